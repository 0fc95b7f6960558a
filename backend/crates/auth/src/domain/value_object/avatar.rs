//! Avatar Value Object
//!
//! Gravatar URL derived deterministically from the email address.

use platform::crypto::{sha256, to_hex};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::email::Email;

/// Gravatar rendering options: 200px, PG-rated, "mystery man" fallback
const GRAVATAR_PARAMS: &str = "s=200&r=pg&d=mm";

/// Avatar URL value object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarUrl(String);

impl AvatarUrl {
    /// Derive the avatar from an email address.
    ///
    /// Pure function of the email string: the address is already trimmed
    /// and lowercased by [`Email`], and Gravatar accepts SHA-256 digests.
    pub fn from_email(email: &Email) -> Self {
        let digest = sha256(email.as_str().as_bytes());
        Self(format!(
            "https://www.gravatar.com/avatar/{}?{}",
            to_hex(&digest),
            GRAVATAR_PARAMS
        ))
    }

    /// Create from database value
    pub fn from_db(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Get the URL as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AvatarUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let email = Email::new("user@example.com").unwrap();
        assert_eq!(AvatarUrl::from_email(&email), AvatarUrl::from_email(&email));
    }

    #[test]
    fn test_case_insensitive_via_email_normalization() {
        let a = Email::new("User@Example.COM").unwrap();
        let b = Email::new("user@example.com").unwrap();
        assert_eq!(AvatarUrl::from_email(&a), AvatarUrl::from_email(&b));
    }

    #[test]
    fn test_distinct_emails_distinct_avatars() {
        let a = Email::new("a@example.com").unwrap();
        let b = Email::new("b@example.com").unwrap();
        assert_ne!(AvatarUrl::from_email(&a), AvatarUrl::from_email(&b));
    }

    #[test]
    fn test_url_shape() {
        let email = Email::new("user@example.com").unwrap();
        let url = AvatarUrl::from_email(&email);
        assert!(url.as_str().starts_with("https://www.gravatar.com/avatar/"));
        assert!(url.as_str().ends_with("?s=200&r=pg&d=mm"));
    }
}
