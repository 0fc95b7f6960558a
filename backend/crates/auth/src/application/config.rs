//! Application Configuration
//!
//! Configuration for the Auth application layer. The token secret lives
//! here and is only ever read by `crate::token`.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Token signing secret (HMAC-SHA256 key, 32 bytes)
    pub token_secret: [u8; 32],
    /// Token lifetime; the expiry is fixed at issuance and never refreshed
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

/// Token lifetime: 10,000 minutes
const TOKEN_TTL_MINUTES: u64 = 10_000;

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(TOKEN_TTL_MINUTES * 60),
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
