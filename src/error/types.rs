/**
 * Error Types
 *
 * This module defines the error types used across the server.
 *
 * # Error Categories
 *
 * ## Authentication Errors
 *
 * `AuthError` covers every way credential verification can fail: a missing
 * or malformed Authorization header, an unknown username, a wrong password,
 * or an invalid bearer token. The variants exist so failures can be logged
 * precisely on the server; at the HTTP boundary they all collapse into the
 * same rejection so a caller cannot probe which stage failed.
 *
 * ## Store Errors
 *
 * `StoreError` covers credential-store failures. `DuplicateUser` is the only
 * variant that surfaces distinctly to clients (at signup); the rest are
 * internal.
 *
 * ## API Errors
 *
 * `ApiError` is the handler-level error type, convertible straight into an
 * HTTP response.
 */

use thiserror::Error;

/// Credential verification failure
///
/// Returned by the Basic and Bearer verifiers. The first five variants are
/// all externally indistinguishable (uniform 401); `Store` and `Digest`
/// represent internal failures and map to a generic 500 instead.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No Authorization header was present on the request
    #[error("missing credentials")]
    MissingCredentials,

    /// The Authorization header could not be decoded into credentials
    #[error("malformed credentials")]
    MalformedCredentials,

    /// No user record exists for the presented username
    #[error("unknown user")]
    UnknownUser,

    /// The presented password did not match the stored digest
    #[error("bad password")]
    BadPassword,

    /// The bearer token failed signature or expiry validation
    #[error("invalid token")]
    InvalidToken,

    /// The credential store could not be queried
    #[error("credential store failure")]
    Store(#[source] sqlx::Error),

    /// The stored password digest could not be parsed
    #[error("unreadable password digest")]
    Digest(#[source] bcrypt::BcryptError),
}

impl AuthError {
    /// Whether this failure is an internal fault rather than bad credentials
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Store(_) | Self::Digest(_))
    }
}

/// Credential store failure
#[derive(Debug, Error)]
pub enum StoreError {
    /// A user with the requested username already exists
    #[error("username already taken")]
    DuplicateUser,

    /// Hashing the password failed before the insert was attempted
    #[error("password hashing failed")]
    Hash(#[from] bcrypt::BcryptError),

    /// The underlying database query failed
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Handler-level error, convertible into an HTTP response
#[derive(Debug, Error)]
pub enum ApiError {
    /// Signup attempted with a username that is already registered
    #[error("username already taken")]
    DuplicateUser,

    /// The request body failed validation
    #[error("{0}")]
    Validation(String),

    /// The credential store failed
    #[error("credential store failure")]
    Store(#[source] StoreError),

    /// Signing a token failed
    #[error("token signing failed")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateUser => Self::DuplicateUser,
            other => Self::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_store_error_becomes_duplicate_api_error() {
        let err: ApiError = StoreError::DuplicateUser.into();
        assert!(matches!(err, ApiError::DuplicateUser));
    }

    #[test]
    fn database_store_error_stays_internal() {
        let err: ApiError = StoreError::Database(sqlx::Error::RowNotFound).into();
        assert!(matches!(err, ApiError::Store(_)));
    }

    #[test]
    fn internal_auth_errors_are_flagged() {
        assert!(AuthError::Store(sqlx::Error::RowNotFound).is_internal());
        assert!(!AuthError::BadPassword.is_internal());
        assert!(!AuthError::MissingCredentials.is_internal());
    }
}
