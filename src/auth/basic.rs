/**
 * Basic-Auth Verifier
 *
 * Decodes a base64 `username:password` pair from an Authorization header
 * value and checks it against the credential store.
 *
 * # Failure Shape
 *
 * Every verification failure returns an `AuthError` variant that renders as
 * the same uniform rejection. In particular, an unknown username and a
 * wrong password are indistinguishable to the caller; the distinction
 * exists only in server logs.
 */

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use sqlx::AnyPool;

use crate::auth::hashing::verify_password;
use crate::auth::users::{find_by_username, User};
use crate::error::AuthError;

/// Split an Authorization header value into a username/password pair
///
/// Takes the last whitespace-separated chunk as the encoded payload, so
/// both `Basic dXNlcjpwdw==` and a bare `dXNlcjpwdw==` are accepted. The
/// decoded payload must contain exactly one `:`; anything else is
/// malformed.
fn decode_credentials(header: &str) -> Result<(String, String), AuthError> {
    let payload = header
        .split_whitespace()
        .last()
        .ok_or(AuthError::MalformedCredentials)?;

    let decoded = BASE64
        .decode(payload)
        .map_err(|_| AuthError::MalformedCredentials)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthError::MalformedCredentials)?;

    let mut parts = decoded.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(username), Some(password), None) => {
            Ok((username.to_string(), password.to_string()))
        }
        _ => Err(AuthError::MalformedCredentials),
    }
}

/// Verify Basic credentials from a raw Authorization header value
///
/// `header` is `None` when the request carried no Authorization header.
/// On success returns the authenticated user.
pub async fn verify_basic(pool: &AnyPool, header: Option<&str>) -> Result<User, AuthError> {
    let header = header.ok_or_else(|| {
        tracing::warn!("basic auth rejected: missing Authorization header");
        AuthError::MissingCredentials
    })?;

    let (username, password) = decode_credentials(header).inspect_err(|_| {
        tracing::warn!("basic auth rejected: undecodable credential payload");
    })?;

    let user = find_by_username(pool, &username)
        .await
        .map_err(AuthError::Store)?
        .ok_or_else(|| {
            tracing::warn!("basic auth rejected: unknown user '{}'", username);
            AuthError::UnknownUser
        })?;

    let valid = verify_password(&password, &user.password_hash).map_err(AuthError::Digest)?;
    if !valid {
        tracing::warn!("basic auth rejected: wrong password for '{}'", username);
        return Err(AuthError::BadPassword);
    }

    Ok(user)
}
