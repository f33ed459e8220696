//! Database Module
//!
//! Schema definition and startup application for the `users` table.

/// Embedded schema SQL and application helper
pub mod schema;

pub use schema::apply_schema;
