//! Delete Account Use Case
//!
//! `DELETE /profile` is account deletion, not just profile-data removal:
//! the profile (if any) is removed and the owning identity is deleted with
//! it. Tokens already issued for the identity keep verifying until they
//! expire, but the subject they point at is gone.

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::models::UserId;

use crate::domain::repository::ProfileRepository;
use crate::error::ProfileResult;

/// Delete account use case
pub struct DeleteAccountUseCase<P, U>
where
    P: ProfileRepository,
    U: UserRepository,
{
    profiles: Arc<P>,
    users: Arc<U>,
}

impl<P, U> DeleteAccountUseCase<P, U>
where
    P: ProfileRepository,
    U: UserRepository,
{
    pub fn new(profiles: Arc<P>, users: Arc<U>) -> Self {
        Self { profiles, users }
    }

    /// Remove the profile and cascade to the owning identity. Having no
    /// profile is fine; the identity is deleted either way.
    pub async fn execute(&self, owner_id: &UserId) -> ProfileResult<()> {
        self.profiles.delete(owner_id).await?;
        self.users.delete(owner_id).await?;

        tracing::info!(owner_id = %owner_id, "Account deleted");

        Ok(())
    }
}
