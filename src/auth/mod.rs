//! Authentication Module
//!
//! Credential verification core: password hashing, token issue/verify, the
//! credential store, and the Basic/Bearer verifiers, plus the HTTP handlers
//! for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports
//! ├── hashing.rs  - bcrypt password hashing and verification
//! ├── tokens.rs   - Signed bearer token issue and verification
//! ├── users.rs    - User model and credential store
//! ├── basic.rs    - Basic-auth verifier (header -> user)
//! ├── bearer.rs   - Bearer-auth verifier (header -> user + token)
//! └── handlers/   - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username + password → password hashed → user row inserted
//!    → token issued and returned
//! 2. **Signin**: Basic header → decode → store lookup → bcrypt check →
//!    fresh token returned
//! 3. **Protected endpoints**: Bearer header → signature check → store
//!    lookup → handler runs with the authenticated user
//!
//! # Security
//!
//! - Passwords are bcrypt-hashed before storage and never logged
//! - Tokens are stateless HS256 JWTs signed with a server-held secret
//! - Every verification failure produces the same rejection, so responses
//!   cannot be used to enumerate usernames

/// bcrypt password hashing and verification
pub mod hashing;

/// Signed bearer token issue and verification
pub mod tokens;

/// User model and credential store
pub mod users;

/// Basic-auth verifier
pub mod basic;

/// Bearer-auth verifier
pub mod bearer;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use basic::verify_basic;
pub use bearer::verify_bearer;
pub use handlers::{get_secret, get_users, signin, signup};
pub use users::User;
