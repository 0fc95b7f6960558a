//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - User registration with email + password, Gravatar-derived avatar
//! - Login issuing signed, time-limited session tokens
//! - Request gate verifying the `x-auth-token` header and handing the
//!   verified claim to handlers through an extractor
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (salt embedded in the PHC string)
//! - Tokens are HMAC-SHA256 signed claims with an absolute expiry fixed
//!   at issuance; a new login issues a new token, prior tokens stay valid
//!   until they expire on their own
//! - Login failures are reported with one uniform message regardless of
//!   whether the email or the password was wrong

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;
pub mod token;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::{AUTH_TOKEN_HEADER, AuthGateState, AuthedUser, require_auth};
pub use presentation::router::{auth_router, users_router};
pub use token::SessionClaim;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgUserRepository as UserStore;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
