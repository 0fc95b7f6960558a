//! Posts Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Post aggregate, repository trait
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Model
//! - A post is one aggregate document: author snapshot, text, an ordered
//!   like set, and an ordered comment list, fetched and persisted as a unit
//! - Author name/avatar are snapshots taken at creation and do not track
//!   later identity edits
//! - Only the post author may delete the post; only a comment's author may
//!   delete the comment, independent of who owns the post

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{PostError, PostResult};
pub use infra::postgres::PgPostRepository;
pub use presentation::router::posts_router;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgPostRepository as PostStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
