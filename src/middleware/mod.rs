//! Middleware Module
//!
//! HTTP middleware for the server. Currently this is the authentication
//! gate: `basic_auth` and `bearer_auth` layer onto protected routes and
//! attach the verified identity to the request.

pub mod auth;

pub use auth::{basic_auth, bearer_auth, AuthenticatedUser, AuthUser};
