//! User Entity
//!
//! The registered account: identity data plus the credential hash.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    avatar::AvatarUrl, email::Email, user_id::UserId, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name
    pub name: String,
    /// Email address (unique across users)
    pub email: Email,
    /// Argon2id password hash
    pub password_hash: UserPassword,
    /// Avatar URL, derived from the email at registration
    pub avatar_url: AvatarUrl,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user. The avatar is derived from the email once, here;
    /// later email edits would not change it.
    pub fn new(name: String, email: Email, password_hash: UserPassword) -> Self {
        let now = Utc::now();
        let avatar_url = AvatarUrl::from_email(&email);

        Self {
            user_id: UserId::new(),
            name,
            email,
            password_hash,
            avatar_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the display name
    pub fn rename(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }
}
