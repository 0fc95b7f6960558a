//! Upsert Profile Use Case

use std::sync::Arc;

use auth::models::UserId;

use crate::domain::entity::{Profile, ProfileFields};
use crate::domain::repository::ProfileRepository;
use crate::error::ProfileResult;

/// Upsert profile use case
pub struct UpsertProfileUseCase<P>
where
    P: ProfileRepository,
{
    profiles: Arc<P>,
}

impl<P> UpsertProfileUseCase<P>
where
    P: ProfileRepository,
{
    pub fn new(profiles: Arc<P>) -> Self {
        Self { profiles }
    }

    /// Create-or-update by lookup-then-branch: the first write for an owner
    /// creates the profile, later writes merge into it in place. Either way
    /// a second profile is never created for the same owner.
    pub async fn execute(&self, owner_id: UserId, fields: ProfileFields) -> ProfileResult<Profile> {
        match self.profiles.find_by_owner(&owner_id).await? {
            Some(mut profile) => {
                profile.apply(fields);
                self.profiles.update(&profile).await?;
                Ok(profile)
            }
            None => {
                let mut profile = Profile::new(owner_id);
                profile.apply(fields);
                self.profiles.create(&profile).await?;

                tracing::info!(owner_id = %owner_id, "Profile created");

                Ok(profile)
            }
        }
    }
}
