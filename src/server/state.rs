/**
 * Application State
 *
 * The state container shared by every handler and gate: the database pool
 * and the token signing secret. Both are cheap to clone per request (the
 * pool is reference-counted internally).
 *
 * No global state exists; everything a request needs reaches it through
 * this struct.
 */

use axum::extract::FromRef;
use sqlx::AnyPool;

/// Application state shared across handlers and middleware
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: AnyPool,
    /// Secret used to sign and verify bearer tokens
    pub token_secret: String,
}

/// Allow handlers to extract the pool directly via `State(AnyPool)`
impl FromRef<AppState> for AnyPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}
