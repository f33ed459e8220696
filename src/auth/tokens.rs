/**
 * Bearer Token Issue and Verification
 *
 * This module produces and validates the signed tokens used for bearer
 * authentication. Tokens are HS256 JWTs asserting a username; nothing is
 * persisted, so verification is a pure signature check against the
 * server-held secret.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::AuthError;

/// Token lifetime: 30 days
const TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token asserts
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

/// Issue a signed token asserting `username`
///
/// The token carries issue and expiry timestamps, so two tokens issued for
/// the same username at different times are different strings; callers must
/// not rely on token equality.
pub fn issue(secret: &str, username: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();
    let claims = Claims {
        sub: username.to_string(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify a token and return the username it asserts
///
/// Fails with `AuthError::InvalidToken` if the signature does not validate,
/// the token is malformed, or it has expired. A username is only ever
/// returned after the signature check succeeds.
pub fn verify(secret: &str, token: &str) -> Result<String, AuthError> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|err| {
        tracing::warn!("token verification failed: {}", err);
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims.sub)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-signing-secret";

    #[test]
    fn issue_then_verify_round_trips() {
        let token = issue(SECRET, "alice").unwrap();
        assert_eq!(verify(SECRET, &token).unwrap(), "alice");
    }

    #[test]
    fn verify_is_idempotent() {
        let token = issue(SECRET, "alice").unwrap();
        for _ in 0..3 {
            assert_eq!(verify(SECRET, &token).unwrap(), "alice");
        }
    }

    #[test]
    fn tampered_token_is_rejected() {
        let token = issue(SECRET, "alice").unwrap();
        // Flip one character in every position; no variant may verify.
        for i in 0..token.len() {
            let mut bytes = token.clone().into_bytes();
            bytes[i] = if bytes[i] == b'A' { b'B' } else { b'A' };
            let Ok(tampered) = String::from_utf8(bytes) else {
                continue;
            };
            if tampered == token {
                continue;
            }
            assert!(
                verify(SECRET, &tampered).is_err(),
                "tampered byte {} verified",
                i
            );
        }
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue(SECRET, "alice").unwrap();
        assert!(matches!(
            verify("some-other-secret", &token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn malformed_token_is_rejected() {
        assert!(verify(SECRET, "not.a.token").is_err());
        assert!(verify(SECRET, "").is_err());
    }

    #[test]
    fn expiry_is_in_the_future() {
        let token = issue(SECRET, "alice").unwrap();
        let key = DecodingKey::from_secret(SECRET.as_ref());
        let data = decode::<Claims>(&token, &key, &Validation::default()).unwrap();
        assert!(data.claims.exp > data.claims.iat);
        assert_eq!(data.claims.exp - data.claims.iat, TOKEN_TTL_SECS);
    }
}
