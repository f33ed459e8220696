/**
 * Signin Handler
 *
 * Implements POST /signin. The route is gated by the Basic-auth middleware,
 * so by the time this handler runs the credentials have already been
 * verified and the user attached to the request. The handler's only job is
 * to issue a fresh token and shape the response.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{AuthResponse, UserResponse};
use crate::auth::tokens;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Signin handler
///
/// Returns the authenticated user and a newly issued token. The token is
/// freshly signed on every signin; callers must not expect it to equal one
/// issued earlier.
pub async fn signin(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<AuthResponse>, ApiError> {
    let token =
        tokens::issue(&state.token_secret, &auth.user.username).map_err(ApiError::Signing)?;

    tracing::info!("user signed in: '{}'", auth.user.username);

    Ok(Json(AuthResponse {
        user: UserResponse::from(&auth.user),
        token,
    }))
}
