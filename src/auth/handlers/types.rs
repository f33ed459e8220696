/**
 * Authentication Handler Types
 *
 * Request and response types shared across the authentication handlers.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Sign up request body
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's chosen username
    pub username: String,
    /// User's password (hashed before storage)
    pub password: String,
}

/// Auth response
///
/// Returned by signup and signin. Carries the user and a freshly issued
/// bearer token for immediate use against the protected endpoints.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// User information (without sensitive data)
    pub user: UserResponse,
    /// Signed bearer token
    pub token: String,
}

/// User response (without sensitive data)
///
/// The password hash never appears here.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// User's username
    pub username: String,
    /// Created at timestamp (Unix seconds)
    pub created_at: i64,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            created_at: user.created_at,
        }
    }
}
