//! Session Token Codec
//!
//! Encodes and verifies the signed, time-limited token that carries the
//! authenticated-subject claim. This module is the only place that touches
//! the signing secret.
//!
//! Wire format: `base64url(json claim) + "." + base64url(hmac-sha256 tag)`,
//! both parts unpadded. The tag is computed over the encoded claim, so
//! issuance is deterministic for identical claim and secret.

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

use crate::domain::value_object::user_id::UserId;

type HmacSha256 = Hmac<Sha256>;

/// Token codec errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// The claim could not be encoded/signed
    #[error("Token signing failed: {0}")]
    Signing(String),

    /// Malformed structure, bad signature, or expired. One variant for all
    /// three; callers must not be able to tell them apart.
    #[error("Token is not valid")]
    Invalid,
}

/// The authenticated-subject fact embedded in a signed token.
///
/// Ephemeral; never persisted. The expiry is fixed at issuance and never
/// refreshed in place - a new login issues a new claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaim {
    /// The authenticated identity
    pub subject_id: UserId,
    /// Issue time, Unix milliseconds
    pub issued_at_ms: i64,
    /// Absolute expiry, Unix milliseconds
    pub expires_at_ms: i64,
}

impl SessionClaim {
    /// Create a claim for a subject, expiring `ttl` from now
    pub fn new(subject_id: UserId, ttl: Duration) -> Self {
        let now_ms = Utc::now().timestamp_millis();
        Self {
            subject_id,
            issued_at_ms: now_ms,
            expires_at_ms: now_ms + ttl.as_millis() as i64,
        }
    }

    /// A claim is expired at its expiry instant; there is no grace period
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() >= self.expires_at_ms
    }
}

/// Issue a signed token embedding the claim
pub fn issue(claim: &SessionClaim, secret: &[u8; 32]) -> Result<String, TokenError> {
    let payload = serde_json::to_vec(claim).map_err(|e| TokenError::Signing(e.to_string()))?;
    let payload_b64 = URL_SAFE_NO_PAD.encode(&payload);

    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|e| TokenError::Signing(e.to_string()))?;
    mac.update(payload_b64.as_bytes());
    let tag = mac.finalize().into_bytes();

    Ok(format!("{}.{}", payload_b64, URL_SAFE_NO_PAD.encode(tag)))
}

/// Verify a token and return the embedded claim
///
/// The signature is checked before the payload is decoded, so unsigned
/// input is never parsed.
pub fn verify(token: &str, secret: &[u8; 32]) -> Result<SessionClaim, TokenError> {
    let (payload_b64, tag_b64) = token.split_once('.').ok_or(TokenError::Invalid)?;
    if tag_b64.contains('.') {
        return Err(TokenError::Invalid);
    }

    let tag = URL_SAFE_NO_PAD
        .decode(tag_b64)
        .map_err(|_| TokenError::Invalid)?;

    let mut mac = HmacSha256::new_from_slice(secret).map_err(|_| TokenError::Invalid)?;
    mac.update(payload_b64.as_bytes());
    mac.verify_slice(&tag).map_err(|_| TokenError::Invalid)?;

    let payload = URL_SAFE_NO_PAD
        .decode(payload_b64)
        .map_err(|_| TokenError::Invalid)?;
    let claim: SessionClaim =
        serde_json::from_slice(&payload).map_err(|_| TokenError::Invalid)?;

    if claim.is_expired() {
        return Err(TokenError::Invalid);
    }

    Ok(claim)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [7u8; 32];
    const OTHER_SECRET: [u8; 32] = [8u8; 32];

    fn ttl() -> Duration {
        Duration::from_secs(10_000 * 60)
    }

    #[test]
    fn test_roundtrip_before_expiry() {
        let subject = UserId::new();
        let claim = SessionClaim::new(subject, ttl());

        let token = issue(&claim, &SECRET).unwrap();
        let verified = verify(&token, &SECRET).unwrap();

        assert_eq!(verified.subject_id, subject);
        assert_eq!(verified.issued_at_ms, claim.issued_at_ms);
        assert_eq!(verified.expires_at_ms, claim.expires_at_ms);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let claim = SessionClaim::new(UserId::new(), ttl());
        let token = issue(&claim, &SECRET).unwrap();

        assert!(matches!(
            verify(&token, &OTHER_SECRET),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let now_ms = Utc::now().timestamp_millis();
        let claim = SessionClaim {
            subject_id: UserId::new(),
            issued_at_ms: now_ms - 120_000,
            expires_at_ms: now_ms - 60_000,
        };

        let token = issue(&claim, &SECRET).unwrap();
        assert!(matches!(verify(&token, &SECRET), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_expiry_is_exclusive() {
        // A claim expiring exactly now (or earlier) is already invalid
        let now_ms = Utc::now().timestamp_millis();
        let claim = SessionClaim {
            subject_id: UserId::new(),
            issued_at_ms: now_ms - 1,
            expires_at_ms: now_ms,
        };
        assert!(claim.is_expired());
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        assert!(matches!(verify("", &SECRET), Err(TokenError::Invalid)));
        assert!(matches!(
            verify("no-dot-here", &SECRET),
            Err(TokenError::Invalid)
        ));
        assert!(matches!(
            verify("a.b.c", &SECRET),
            Err(TokenError::Invalid)
        ));
        assert!(matches!(
            verify("!!!.###", &SECRET),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let claim = SessionClaim::new(UserId::new(), ttl());
        let token = issue(&claim, &SECRET).unwrap();

        let (payload, tag) = token.split_once('.').unwrap();
        let other = SessionClaim::new(UserId::new(), ttl());
        let other_token = issue(&other, &SECRET).unwrap();
        let (other_payload, _) = other_token.split_once('.').unwrap();

        // Someone else's payload with our tag must not verify
        let spliced = format!("{}.{}", other_payload, tag);
        if other_payload != payload {
            assert!(matches!(
                verify(&spliced, &SECRET),
                Err(TokenError::Invalid)
            ));
        }
    }

    #[test]
    fn test_issue_is_deterministic() {
        let claim = SessionClaim::new(UserId::new(), ttl());
        assert_eq!(
            issue(&claim, &SECRET).unwrap(),
            issue(&claim, &SECRET).unwrap()
        );
    }
}
