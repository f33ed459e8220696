//! keygate - Minimal Authentication API
//!
//! keygate is a small authentication server: register users, authenticate
//! via HTTP Basic credentials or a signed bearer token, and expose two
//! protected endpoints. The interesting part is the credential-verification
//! core; everything else is thin glue over one relational `users` table.
//!
//! # Module Structure
//!
//! - **`auth`** - Credential verification core and HTTP handlers
//!   - Password hashing (bcrypt), token issue/verify (HS256 JWT)
//!   - Credential store over sqlx
//!   - Basic and Bearer verifiers
//! - **`middleware`** - The request gate layered onto protected routes
//! - **`routes`** - Router assembly, 404 fallback, logging/CORS layers
//! - **`server`** - Configuration, shared state, application assembly
//! - **`database`** - Schema definition and startup application
//! - **`error`** - Error taxonomy and HTTP conversions
//!
//! # Request Flow
//!
//! An inbound request to a protected route passes through exactly one gate
//! (`basic_auth` or `bearer_auth`). The gate extracts credentials from the
//! `Authorization` header, verifies them against the store and, on success,
//! attaches the authenticated identity to the request; any failure returns
//! one uniform rejection that carries no detail about which stage failed.
//!
//! # Usage
//!
//! ```rust,no_run
//! use keygate::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```

/// Credential verification core and HTTP handlers
pub mod auth;

/// Schema definition and startup application
pub mod database;

/// Error taxonomy and HTTP conversions
pub mod error;

/// Request gate middleware
pub mod middleware;

/// Router assembly
pub mod routes;

/// Configuration, shared state, application assembly
pub mod server;
