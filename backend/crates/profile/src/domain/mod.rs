//! Domain Layer
//!
//! The profile aggregate and its repository trait.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::{
    EducationEntry, EntryId, ExperienceEntry, Profile, ProfileFields, SocialLinks,
};
pub use repository::ProfileRepository;
