//! Profile Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Profile aggregate, repository trait
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Model
//! - At most one profile per identity, created lazily on the first write
//! - Writes are partial-field merges: absent or empty input fields leave
//!   the stored values untouched
//! - Experience and education entries are prepend-ordered; removing an
//!   unknown entry id is a silent no-op
//! - Profile reads are public (a directory); deleting the profile is an
//!   account deletion and removes the owning identity too

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{ProfileError, ProfileResult};
pub use infra::postgres::PgProfileRepository;
pub use presentation::router::profile_router;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgProfileRepository as ProfileStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
