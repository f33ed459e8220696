//! Authentication Handlers Module
//!
//! HTTP handlers for the four endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── signin.rs   - Basic-auth signin handler
//! ├── users.rs    - List-users handler (bearer gated)
//! └── secret.rs   - Protected confirmation handler (bearer gated)
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /signup - User registration (public)
//! - **`signin`** - POST /signin - Requires Basic credentials
//! - **`get_users`** - GET /users - Requires a bearer token
//! - **`get_secret`** - GET /secret - Requires a bearer token

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

/// List-users handler
pub mod users;

/// Secret handler
pub mod secret;

pub use types::{AuthResponse, SignupRequest, UserResponse};

pub use secret::get_secret;
pub use signin::signin;
pub use signup::signup;
pub use users::get_users;
