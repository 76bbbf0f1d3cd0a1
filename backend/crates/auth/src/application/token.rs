//! Access Tokens
//!
//! Stateless signed tokens binding a user identifier to an expiry time:
//!
//! ```text
//! <user-uuid>.<expires-at-ms>.<base64url(HMAC-SHA256(secret, payload))>
//! ```
//!
//! where `payload` is `<user-uuid>.<expires-at-ms>`. Verification checks
//! the signature in constant time before trusting any field.

use chrono::Utc;
use kernel::id::UserId;
use platform::crypto::{constant_time_eq, from_base64_url, hmac_sha256, to_base64_url};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Issue a token for a user, valid for the configured TTL from now
pub fn issue(user_id: &UserId, config: &AuthConfig) -> String {
    let expires_at_ms = Utc::now().timestamp_millis() + config.token_ttl_ms();
    issue_with_expiry(user_id, expires_at_ms, config)
}

/// Issue a token with an explicit expiry timestamp
pub fn issue_with_expiry(user_id: &UserId, expires_at_ms: i64, config: &AuthConfig) -> String {
    let payload = format!("{}.{}", user_id.as_uuid(), expires_at_ms);
    let signature = hmac_sha256(&config.token_secret, payload.as_bytes());
    format!("{}.{}", payload, to_base64_url(&signature))
}

/// Verify a token and return the encoded user identifier.
///
/// Fails with `Unauthenticated` when the token is malformed, the
/// signature does not verify, or the token has expired.
pub fn verify(token: &str, config: &AuthConfig) -> AuthResult<UserId> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::Unauthenticated);
    }

    let (user_id_str, expires_str, signature_b64) = (parts[0], parts[1], parts[2]);

    // Verify the signature before trusting anything else in the token
    let payload = format!("{}.{}", user_id_str, expires_str);
    let expected = hmac_sha256(&config.token_secret, payload.as_bytes());

    let signature = from_base64_url(signature_b64).map_err(|_| AuthError::Unauthenticated)?;
    if !constant_time_eq(&expected, &signature) {
        return Err(AuthError::Unauthenticated);
    }

    let expires_at_ms: i64 = expires_str.parse().map_err(|_| AuthError::Unauthenticated)?;
    if Utc::now().timestamp_millis() > expires_at_ms {
        return Err(AuthError::Unauthenticated);
    }

    let uuid: Uuid = user_id_str.parse().map_err(|_| AuthError::Unauthenticated)?;
    Ok(UserId::from_uuid(uuid))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AuthConfig {
        AuthConfig::with_random_secret()
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let config = config();
        let user_id = UserId::new();

        let token = issue(&user_id, &config);
        let decoded = verify(&token, &config).unwrap();

        assert_eq!(decoded, user_id);
    }

    #[test]
    fn test_expired_token_fails() {
        let config = config();
        let user_id = UserId::new();

        let expired = Utc::now().timestamp_millis() - 1_000;
        let token = issue_with_expiry(&user_id, expired, &config);

        assert!(matches!(
            verify(&token, &config),
            Err(AuthError::Unauthenticated)
        ));
    }

    #[test]
    fn test_tampered_signature_fails() {
        let config = config();
        let token = issue(&UserId::new(), &config);

        let mut tampered = token[..token.len() - 2].to_string();
        tampered.push_str("xx");

        assert!(verify(&tampered, &config).is_err());
    }

    #[test]
    fn test_tampered_expiry_fails() {
        let config = config();
        let token = issue(&UserId::new(), &config);

        // Stretch the expiry without re-signing
        let parts: Vec<&str> = token.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], i64::MAX, parts[2]);

        assert!(verify(&forged, &config).is_err());
    }

    #[test]
    fn test_wrong_secret_fails() {
        let config_a = config();
        let config_b = config();
        let token = issue(&UserId::new(), &config_a);

        assert!(verify(&token, &config_b).is_err());
    }

    #[test]
    fn test_malformed_tokens_fail() {
        let config = config();
        for garbage in ["", "abc", "a.b", "a.b.c.d", "not-a-uuid.123.sig"] {
            assert!(verify(garbage, &config).is_err(), "accepted: {garbage}");
        }
    }
}
