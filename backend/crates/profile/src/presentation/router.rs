//! Profile Router
//!
//! Reads (`GET /profile`, `GET /profile/user/{id}`) are public by design -
//! the profile list is a directory. Everything that touches the caller's
//! own profile goes through the auth gate.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::domain::repository::UserRepository;
use auth::infra::postgres::PgUserRepository;
use auth::middleware::{AuthGateState, require_auth};

use crate::domain::repository::ProfileRepository;
use crate::infra::postgres::PgProfileRepository;
use crate::presentation::handlers::{self, ProfileAppState};

/// Create the profile router with PostgreSQL repositories
pub fn profile_router(
    profiles: PgProfileRepository,
    users: PgUserRepository,
    config: Arc<AuthConfig>,
) -> Router {
    profile_router_generic(profiles, users, config)
}

/// Generic profile router for any repository implementation
pub fn profile_router_generic<P, U>(profiles: P, users: U, config: Arc<AuthConfig>) -> Router
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let gate = AuthGateState { config };
    let gate_mw = axum::middleware::from_fn_with_state(gate, require_auth);
    let state = ProfileAppState {
        profiles: Arc::new(profiles),
        users: Arc::new(users),
    };

    Router::new()
        // GET / is public; POST and DELETE on the same path are gated
        .route(
            "/",
            get(handlers::list_profiles::<P, U>).merge(
                post(handlers::upsert_profile::<P, U>)
                    .delete(handlers::delete_account::<P, U>)
                    .layer(gate_mw.clone()),
            ),
        )
        .route("/user/{id}", get(handlers::profile_by_owner::<P, U>))
        .route(
            "/me",
            get(handlers::my_profile::<P, U>).layer(gate_mw.clone()),
        )
        .route(
            "/experience",
            put(handlers::add_experience::<P, U>).layer(gate_mw.clone()),
        )
        .route(
            "/experience/{id}",
            delete(handlers::remove_experience::<P, U>).layer(gate_mw.clone()),
        )
        .route(
            "/education",
            put(handlers::add_education::<P, U>).layer(gate_mw.clone()),
        )
        .route(
            "/education/{id}",
            delete(handlers::remove_education::<P, U>).layer(gate_mw),
        )
        .with_state(state)
}
