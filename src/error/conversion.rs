/**
 * Error Conversion
 *
 * IntoResponse implementations for the server error types.
 *
 * # Response Shaping
 *
 * Every `AuthError` credential variant produces the identical response:
 * 401 with `{"error":"invalid credentials"}`. Which stage failed (missing
 * header, unknown user, wrong password, bad token) is logged server-side
 * and never reflected in the response, so the rejection cannot be used to
 * enumerate usernames.
 *
 * Internal failures produce 500 with `{"error":"internal server error"}`
 * and the underlying cause is logged at error level.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::types::{ApiError, AuthError};

/// The one rejection body every failed verification produces
fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "invalid credentials" })),
    )
        .into_response()
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "internal server error" })),
    )
        .into_response()
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        if self.is_internal() {
            tracing::error!("verification failed internally: {:#}", ErrorChain(&self));
            return internal_error();
        }
        // The specific variant was already logged where it was detected.
        unauthorized()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::DuplicateUser => (
                StatusCode::CONFLICT,
                Json(json!({ "error": "username already taken" })),
            )
                .into_response(),
            ApiError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Store(err) => {
                tracing::error!("credential store failure: {:#}", ErrorChain(&err));
                internal_error()
            }
            ApiError::Signing(err) => {
                tracing::error!("token signing failure: {:#}", ErrorChain(&err));
                internal_error()
            }
        }
    }
}

/// Formats an error with its source chain for logging
struct ErrorChain<'a>(&'a dyn std::error::Error);

impl std::fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(cause) = source {
            write!(f, ": {}", cause)?;
            source = cause.source();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::types::StoreError;

    #[test]
    fn credential_variants_share_one_status() {
        for err in [
            AuthError::MissingCredentials,
            AuthError::MalformedCredentials,
            AuthError::UnknownUser,
            AuthError::BadPassword,
            AuthError::InvalidToken,
        ] {
            assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn internal_auth_error_is_a_server_error() {
        let response = AuthError::Store(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn duplicate_user_maps_to_conflict() {
        let response = ApiError::DuplicateUser.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let response = ApiError::Validation("username must not be empty".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_failure_maps_to_server_error() {
        let response =
            ApiError::Store(StoreError::Database(sqlx::Error::RowNotFound)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
