//! Posts Router
//!
//! Every posts route sits behind the auth gate, reads included, matching
//! the original surface.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::domain::repository::UserRepository;
use auth::infra::postgres::PgUserRepository;
use auth::middleware::{AuthGateState, require_auth};

use crate::domain::repository::PostRepository;
use crate::infra::postgres::PgPostRepository;
use crate::presentation::handlers::{self, PostsAppState};

/// Create the posts router with PostgreSQL repositories
pub fn posts_router(
    posts: PgPostRepository,
    users: PgUserRepository,
    config: Arc<AuthConfig>,
) -> Router {
    posts_router_generic(posts, users, config)
}

/// Generic posts router for any repository implementation
pub fn posts_router_generic<P, U>(posts: P, users: U, config: Arc<AuthConfig>) -> Router
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let gate = AuthGateState { config };
    let state = PostsAppState {
        posts: Arc::new(posts),
        users: Arc::new(users),
    };

    Router::new()
        .route(
            "/",
            post(handlers::create_post::<P, U>).get(handlers::list_posts::<P, U>),
        )
        .route(
            "/{id}",
            get(handlers::get_post::<P, U>).delete(handlers::delete_post::<P, U>),
        )
        .route("/user/{id}", get(handlers::list_posts_by_author::<P, U>))
        .route("/like/{id}", put(handlers::like_post::<P, U>))
        .route("/unlike/{id}", put(handlers::unlike_post::<P, U>))
        .route("/comment/{id}", put(handlers::add_comment::<P, U>))
        .route(
            "/comment/{post_id}/{comment_id}",
            delete(handlers::delete_comment::<P, U>),
        )
        .route_layer(axum::middleware::from_fn_with_state(gate, require_auth))
        .with_state(state)
}
