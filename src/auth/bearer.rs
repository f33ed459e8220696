/**
 * Bearer-Auth Verifier
 *
 * Extracts a signed token from an Authorization header value, verifies it,
 * and resolves the asserted username against the credential store.
 */

use sqlx::AnyPool;

use crate::auth::tokens;
use crate::auth::users::{find_by_username, User};
use crate::error::AuthError;

/// Pull the token out of an Authorization header value
///
/// Takes the last whitespace-separated chunk, so `Bearer <token>` and a
/// bare `<token>` are both accepted; a well-formed scheme prefix is not
/// assumed.
fn extract_token(header: &str) -> Option<&str> {
    header.split_whitespace().last()
}

/// Verify a bearer token from a raw Authorization header value
///
/// `header` is `None` when the request carried no Authorization header.
/// On success returns the authenticated user together with the token as it
/// was presented, so handlers can echo it back.
pub async fn verify_bearer(
    pool: &AnyPool,
    secret: &str,
    header: Option<&str>,
) -> Result<(User, String), AuthError> {
    let header = header.ok_or_else(|| {
        tracing::warn!("bearer auth rejected: missing Authorization header");
        AuthError::MissingCredentials
    })?;

    let token = extract_token(header).ok_or_else(|| {
        tracing::warn!("bearer auth rejected: empty Authorization header");
        AuthError::MalformedCredentials
    })?;

    // tokens::verify logs the failure reason; the token itself is never logged.
    let username = tokens::verify(secret, token)?;

    let user = find_by_username(pool, &username)
        .await
        .map_err(AuthError::Store)?
        .ok_or_else(|| {
            tracing::warn!("bearer auth rejected: token for unknown user '{}'", username);
            AuthError::UnknownUser
        })?;

    Ok((user, token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::users::create_user;
    use crate::database::apply_schema;
    use crate::server::config::DatabaseConfig;

    const SECRET: &str = "test-signing-secret";

    async fn memory_pool() -> AnyPool {
        let pool = DatabaseConfig::Memory.connect().await.unwrap();
        apply_schema(&pool).await.unwrap();
        pool
    }

    #[test]
    fn extracts_token_after_scheme() {
        assert_eq!(extract_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
    }

    #[test]
    fn accepts_a_bare_token_without_scheme() {
        assert_eq!(extract_token("abc.def.ghi"), Some("abc.def.ghi"));
    }

    #[test]
    fn empty_header_has_no_token() {
        assert_eq!(extract_token(""), None);
        assert_eq!(extract_token("   "), None);
    }

    #[tokio::test]
    async fn valid_token_authenticates() {
        let pool = memory_pool().await;
        create_user(&pool, "alice", "pw1").await.unwrap();

        let token = tokens::issue(SECRET, "alice").unwrap();
        let header = format!("Bearer {}", token);

        let (user, presented) = verify_bearer(&pool, SECRET, Some(&header)).await.unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(presented, token);
    }

    #[tokio::test]
    async fn bare_token_authenticates() {
        let pool = memory_pool().await;
        create_user(&pool, "alice", "pw1").await.unwrap();

        let token = tokens::issue(SECRET, "alice").unwrap();
        let (user, _) = verify_bearer(&pool, SECRET, Some(&token)).await.unwrap();
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn missing_header_is_rejected() {
        let pool = memory_pool().await;
        assert!(matches!(
            verify_bearer(&pool, SECRET, None).await,
            Err(AuthError::MissingCredentials)
        ));
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let pool = memory_pool().await;
        assert!(matches!(
            verify_bearer(&pool, SECRET, Some("Bearer garbage")).await,
            Err(AuthError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn token_for_unregistered_user_is_rejected() {
        let pool = memory_pool().await;

        // Signed correctly, but no such user row exists.
        let token = tokens::issue(SECRET, "ghost").unwrap();
        let header = format!("Bearer {}", token);
        assert!(matches!(
            verify_bearer(&pool, SECRET, Some(&header)).await,
            Err(AuthError::UnknownUser)
        ));
    }
}
