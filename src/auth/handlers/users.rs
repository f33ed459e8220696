/**
 * List Users Handler
 *
 * Implements GET /users, gated by the Bearer-auth middleware. Returns the
 * usernames of every registered user as a plain JSON array.
 */

use axum::{extract::State, response::Json};

use crate::auth::users::list_usernames;
use crate::error::{ApiError, StoreError};
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// List all usernames
pub async fn get_users(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<Vec<String>>, ApiError> {
    let usernames = list_usernames(&state.pool)
        .await
        .map_err(|err| ApiError::Store(StoreError::Database(err)))?;

    tracing::debug!(
        "user list requested by '{}' ({} users)",
        auth.user.username,
        usernames.len()
    );

    Ok(Json(usernames))
}
