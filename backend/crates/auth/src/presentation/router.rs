//! Auth Routers
//!
//! Two routers, matching the public HTTP surface: registration under
//! `/users` and session endpoints under `/auth`.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthGateState, require_auth};

/// Create the `/users` router (registration) with PostgreSQL repository
pub fn users_router(users: PgUserRepository, config: Arc<AuthConfig>) -> Router {
    users_router_generic(users, config)
}

/// Create the `/auth` router (login + current user) with PostgreSQL repository
pub fn auth_router(users: PgUserRepository, config: Arc<AuthConfig>) -> Router {
    auth_router_generic(users, config)
}

/// Generic `/users` router for any repository implementation
pub fn users_router_generic<U>(users: U, config: Arc<AuthConfig>) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        users: Arc::new(users),
        config,
    };

    Router::new()
        .route("/", post(handlers::register::<U>))
        .with_state(state)
}

/// Generic `/auth` router for any repository implementation
pub fn auth_router_generic<U>(users: U, config: Arc<AuthConfig>) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let gate = AuthGateState {
        config: config.clone(),
    };
    let state = AuthAppState {
        users: Arc::new(users),
        config,
    };

    // GET /auth goes through the gate; login does not
    let protected = Router::new()
        .route("/", get(handlers::current_user::<U>))
        .route_layer(axum::middleware::from_fn_with_state(gate, require_auth));

    Router::new()
        .route("/login", post(handlers::login::<U>))
        .merge(protected)
        .with_state(state)
}
