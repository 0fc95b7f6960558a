//! Profile Queries
//!
//! Read-only operations. The list and per-owner lookups back the public
//! directory endpoints; no authentication is involved here.

use std::sync::Arc;

use auth::models::UserId;

use crate::domain::entity::Profile;
use crate::domain::repository::ProfileRepository;
use crate::error::{ProfileError, ProfileResult};

/// Profile query service
pub struct ProfileQueries<P>
where
    P: ProfileRepository,
{
    profiles: Arc<P>,
}

impl<P> ProfileQueries<P>
where
    P: ProfileRepository,
{
    pub fn new(profiles: Arc<P>) -> Self {
        Self { profiles }
    }

    /// All profiles
    pub async fn list(&self) -> ProfileResult<Vec<Profile>> {
        self.profiles.list().await
    }

    /// One identity's profile
    pub async fn get_by_owner(&self, owner_id: &UserId) -> ProfileResult<Profile> {
        self.profiles
            .find_by_owner(owner_id)
            .await?
            .ok_or(ProfileError::NotFound)
    }
}
