/**
 * User Model and Credential Store
 *
 * This module owns persisted user records. Verifiers only ever read;
 * `create_user` is the single write path, and it hashes the password before
 * the insert so a row without a digest can never exist.
 */

use chrono::Utc;
use sqlx::AnyPool;

use crate::auth::hashing::hash_password;
use crate::error::StoreError;

/// User struct representing a user in the database
///
/// The bearer token is deliberately not a field: it is derived on demand by
/// `auth::tokens::issue`, never stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID, stored as text)
    pub id: String,
    /// Username (unique, immutable after creation)
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp (Unix seconds)
    pub created_at: i64,
    /// Updated at timestamp (Unix seconds)
    pub updated_at: i64,
}

/// Create a new user
///
/// Hashes the password and inserts the row in one atomic statement. Fails
/// with `StoreError::DuplicateUser` when the username's unique constraint
/// fires, so at most one concurrent create for a given username succeeds.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - User's chosen username
/// * `password` - Plaintext password; hashed here, never persisted raw
///
/// # Returns
/// Created user or error
pub async fn create_user(
    pool: &AnyPool,
    username: &str,
    password: &str,
) -> Result<User, StoreError> {
    let password_hash = hash_password(password)?;
    let now = Utc::now().timestamp();

    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        username: username.to_string(),
        password_hash,
        created_at: now,
        updated_at: now,
    };

    sqlx::query(
        r#"
        INSERT INTO users (id, username, password_hash, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(&user.id)
    .bind(&user.username)
    .bind(&user.password_hash)
    .bind(user.created_at)
    .bind(user.updated_at)
    .execute(pool)
    .await
    .map_err(|err| match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => StoreError::DuplicateUser,
        _ => StoreError::Database(err),
    })?;

    Ok(user)
}

/// Get user by username
///
/// Exact match only; no fuzzy lookup.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - Username
///
/// # Returns
/// User or None if not found
pub async fn find_by_username(
    pool: &AnyPool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, created_at, updated_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// List all usernames
///
/// Row order carries no meaning.
pub async fn list_usernames(pool: &AnyPool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT username FROM users")
        .fetch_all(pool)
        .await
}
