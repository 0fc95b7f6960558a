//! Application Layer
//!
//! Use cases for the profile aggregate.

pub mod delete_account;
pub mod entries;
pub mod queries;
pub mod upsert_profile;

// Re-exports
pub use delete_account::DeleteAccountUseCase;
pub use entries::{EducationInput, EducationUseCase, ExperienceInput, ExperienceUseCase};
pub use queries::ProfileQueries;
pub use upsert_profile::UpsertProfileUseCase;
