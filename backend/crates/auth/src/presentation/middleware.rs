//! Auth Gate Middleware
//!
//! Request-pipeline stage that extracts and verifies the session token.
//! Two terminal outcomes per request: 401 (missing or invalid token, with
//! distinct messages) or exactly one continuation into the next stage with
//! the verified claim attached.
//!
//! The gate only answers "is this subject authenticated". Ownership checks
//! belong to the individual use cases. It also does not hit the store: the
//! signed claim is trusted as-is, and handlers that need the full identity
//! record fetch it themselves.

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::Request;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::error::AuthError;
use crate::token::{self, SessionClaim};

/// Header carrying the raw token (no "Bearer " prefix)
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState {
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a valid session token
pub async fn require_auth(
    State(state): State<AuthGateState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = req
        .headers()
        .get(AUTH_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    let Some(token) = token else {
        return Err(AuthError::MissingToken.into_response());
    };

    let claim = match token::verify(token, &state.config.token_secret) {
        Ok(claim) => claim,
        Err(_) => return Err(AuthError::InvalidToken.into_response()),
    };

    // Hand the claim to the handler; AuthedUser picks it up from here
    req.extensions_mut().insert(claim);

    Ok(next.run(req).await)
}

/// Extractor handing the verified claim to a handler as an explicit argument.
///
/// Only available behind [`require_auth`]; extracting it on an ungated route
/// rejects the request.
pub struct AuthedUser(pub SessionClaim);

impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionClaim>()
            .copied()
            .map(AuthedUser)
            .ok_or(AuthError::MissingToken)
    }
}
