/**
 * Secret Handler
 *
 * Implements GET /secret, gated by the Bearer-auth middleware. The body is
 * a fixed confirmation string; the endpoint exists to prove the bearer
 * gate works.
 */

use crate::middleware::auth::AuthUser;

/// Protected confirmation endpoint
pub async fn get_secret(AuthUser(auth): AuthUser) -> &'static str {
    tracing::debug!("secret area accessed by '{}'", auth.user.username);
    "Welcome to the secret area!"
}
