//! Current User Use Case
//!
//! Resolves a verified session claim back to the stored identity.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::token::SessionClaim;

/// Current user use case
pub struct CurrentUserUseCase<U>
where
    U: UserRepository,
{
    users: Arc<U>,
}

impl<U> CurrentUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Fetch the identity the claim refers to.
    ///
    /// The gate trusts the signed claim without a store round-trip; this is
    /// where flows that need the full record re-fetch it. A subject that no
    /// longer resolves is a server-side inconsistency, not a client error.
    pub async fn execute(&self, claim: &SessionClaim) -> AuthResult<User> {
        self.users
            .find_by_id(&claim.subject_id)
            .await?
            .ok_or(AuthError::UserLookupFailed)
    }
}
