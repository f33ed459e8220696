/**
 * Signup Handler
 *
 * Implements user registration for POST /signup.
 *
 * # Registration Process
 *
 * 1. Validate the request body
 * 2. Hash the password and insert the user (one call into the store)
 * 3. Issue a bearer token
 * 4. Return 201 with user info and token
 *
 * # Errors
 *
 * Duplicate usernames surface as 409; unlike the verification endpoints
 * there is nothing enumeration-sensitive about telling a registrant that a
 * name is taken. Anything else is a generic 400/500.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::{AuthResponse, SignupRequest, UserResponse};
use crate::auth::tokens;
use crate::auth::users::create_user;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Sign up handler
///
/// Creates a new user and returns it together with a freshly issued token,
/// so the client can call protected endpoints without a second round trip.
///
/// # Errors
///
/// * `400 Bad Request` - Empty username or password
/// * `409 Conflict` - Username already registered
/// * `500 Internal Server Error` - Hashing, insert, or signing failed
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    tracing::info!("signup request for username '{}'", request.username);

    if request.username.is_empty() {
        return Err(ApiError::Validation("username must not be empty".into()));
    }
    if request.password.is_empty() {
        return Err(ApiError::Validation("password must not be empty".into()));
    }

    let user = create_user(&state.pool, &request.username, &request.password).await?;

    let token = tokens::issue(&state.token_secret, &user.username).map_err(ApiError::Signing)?;

    tracing::info!("user created: '{}'", user.username);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: UserResponse::from(&user),
            token,
        }),
    ))
}
