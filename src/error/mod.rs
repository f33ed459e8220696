//! Error Module
//!
//! Error types for the keygate server and their HTTP conversions.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementations
//! ```
//!
//! # Error Types
//!
//! - `AuthError` - Credential verification failures (collapsed to one
//!   uniform rejection at the HTTP boundary)
//! - `StoreError` - Credential store failures
//! - `ApiError` - Handler-level failures (duplicate user, validation,
//!   internal errors)

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{ApiError, AuthError, StoreError};
