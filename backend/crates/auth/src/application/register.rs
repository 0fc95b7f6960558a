//! Register Use Case
//!
//! Creates a new user account and issues a session token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_id::UserId,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};
use crate::token::{self, SessionClaim};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    /// Session token, issued on every successful registration
    pub token: String,
    pub user_id: UserId,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    users: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(users: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { users, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(AuthError::Validation("Name is required".to_string()));
        }

        let email = Email::new(input.email)?;

        // Duplicate check by lookup; the unique index on users.email is the
        // backstop for two concurrent registrations (see DESIGN.md)
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let raw_password = RawPassword::new(input.password)?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        // Avatar is derived from the email inside User::new
        let user = User::new(name, email, password_hash);

        self.users.create(&user).await?;

        let claim = SessionClaim::new(user.user_id, self.config.token_ttl);
        let token = token::issue(&claim, &self.config.token_secret)?;

        tracing::info!(
            user_id = %user.user_id,
            "User registered"
        );

        Ok(RegisterOutput {
            token,
            user_id: user.user_id,
        })
    }
}
