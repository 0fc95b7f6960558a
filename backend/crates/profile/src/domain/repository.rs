//! Repository Trait
//!
//! Interface for profile persistence. Implementation is in infrastructure
//! layer. Profiles are stored and rewritten as whole aggregates: `update`
//! replaces the embedded lists wholesale, so two concurrent writers of one
//! profile race and the last write wins.

use auth::models::UserId;

use crate::domain::entity::Profile;
use crate::error::ProfileResult;

/// Profile repository trait
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    /// Create a new profile
    async fn create(&self, profile: &Profile) -> ProfileResult<()>;

    /// Find the profile owned by an identity
    async fn find_by_owner(&self, owner_id: &UserId) -> ProfileResult<Option<Profile>>;

    /// All profiles (the public directory)
    async fn list(&self) -> ProfileResult<Vec<Profile>>;

    /// Persist the whole aggregate back
    async fn update(&self, profile: &Profile) -> ProfileResult<()>;

    /// Delete an identity's profile; absent profile is not an error
    async fn delete(&self, owner_id: &UserId) -> ProfileResult<()>;
}
