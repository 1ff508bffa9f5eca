//! Token issuance and verification
//!
//! Issues signed, time-limited identity tokens and verifies them with
//! pre-computed keys. Tokens are stateless: nothing is persisted and
//! expiry is the only end-of-life mechanism.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use scribe_shared::errors::AuthError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Pre-computed signing keys, cached in AppState
///
/// Key derivation is expensive, so the keys are built once at startup and
/// wrapped in Arc for cheap cloning.
#[derive(Clone)]
struct TokenKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl TokenKeys {
    fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// Token service for issuing and verifying identity tokens
#[derive(Clone)]
pub struct TokenService {
    keys: TokenKeys,
    ttl_secs: i64,
}

impl TokenService {
    /// Create a new token service with pre-computed keys
    ///
    /// The signing secret is explicit configuration; call once at startup
    /// and store in AppState, not per-request.
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            keys: TokenKeys::new(secret),
            ttl_secs,
        }
    }

    /// Issue a signed token for the given subject id
    pub fn issue(&self, subject: i64) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.ttl_secs);

        let claims = Claims {
            sub: subject.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))
    }

    /// Verify a token and return the embedded subject id
    ///
    /// Zero leeway: the token is valid up to and including `exp` and
    /// expired strictly after it.
    pub fn verify(&self, token: &str) -> Result<i64, AuthError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.keys.decoding, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                ErrorKind::InvalidSignature => AuthError::BadSignature,
                _ => AuthError::Malformed,
            })?;

        token_data
            .claims
            .sub
            .parse::<i64>()
            .map_err(|_| AuthError::Malformed)
    }

    /// Token lifetime in seconds
    #[inline]
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> TokenService {
        TokenService::new("test-secret", 86400)
    }

    /// Encode claims directly with the same secret, bypassing `issue`,
    /// to control the expiry timestamp.
    fn encode_claims(secret: &str, claims: &Claims) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let service = create_test_service();

        let token = service.issue(42).unwrap();
        let subject = service.verify(&token).unwrap();

        assert_eq!(subject, 42);
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let service = create_test_service();

        assert_eq!(service.verify("garbage"), Err(AuthError::Malformed));
        assert_eq!(service.verify(""), Err(AuthError::Malformed));
        assert_eq!(service.verify("a.b.c"), Err(AuthError::Malformed));
    }

    #[test]
    fn test_wrong_secret_is_bad_signature() {
        let service = create_test_service();
        let other = TokenService::new("another-secret", 86400);

        let token = other.issue(42).unwrap();

        assert_eq!(service.verify(&token), Err(AuthError::BadSignature));
    }

    #[test]
    fn test_expired_token() {
        let service = create_test_service();
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: "42".to_string(),
            exp: now - 5,
            iat: now - 100,
        };
        let token = encode_claims("test-secret", &claims);

        assert_eq!(service.verify(&token), Err(AuthError::Expired));
    }

    #[test]
    fn test_token_valid_just_before_expiry() {
        let service = create_test_service();
        let now = Utc::now().timestamp();

        // A few seconds of headroom so the test cannot race the clock
        let claims = Claims {
            sub: "42".to_string(),
            exp: now + 5,
            iat: now - 100,
        };
        let token = encode_claims("test-secret", &claims);

        assert_eq!(service.verify(&token), Ok(42));
    }

    #[test]
    fn test_non_numeric_subject_is_malformed() {
        let service = create_test_service();
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: "not-a-number".to_string(),
            exp: now + 3600,
            iat: now,
        };
        let token = encode_claims("test-secret", &claims);

        assert_eq!(service.verify(&token), Err(AuthError::Malformed));
    }

    #[test]
    fn test_service_is_clone_cheap() {
        let service = create_test_service();
        let cloned = service.clone();

        let token = service.issue(7).unwrap();
        assert_eq!(cloned.verify(&token), Ok(7));
    }
}
