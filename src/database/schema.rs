//! Database schema for keygate
//!
//! The schema is applied at startup with `CREATE TABLE IF NOT EXISTS`, so
//! restarting against an existing database is a no-op. The SQL is kept to
//! the dialect subset shared by SQLite and PostgreSQL, since either backend
//! may sit behind the pool.

use sqlx::AnyPool;

/// SQL statements to create the initial database schema
///
/// Username uniqueness lives here as a column constraint; the store relies
/// on the constraint firing to detect duplicate signups, so concurrent
/// creates of the same username cannot both succeed.
const CREATE_SCHEMA: &[&str] = &[
    r#"
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at BIGINT NOT NULL,
    updated_at BIGINT NOT NULL
)
"#,
];

/// Apply the schema to the connected database
pub async fn apply_schema(pool: &AnyPool) -> Result<(), sqlx::Error> {
    for statement in CREATE_SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!("database schema applied");
    Ok(())
}
