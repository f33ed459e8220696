/**
 * Server Initialization
 *
 * Builds the Axum application from a loaded configuration: opens the
 * database pool, applies the schema, assembles the shared state, and wires
 * the router.
 *
 * Unlike optional integrations, the credential store is required — if the
 * database cannot be reached the server does not start.
 */

use axum::Router;

use crate::database::apply_schema;
use crate::routes::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Initialization Steps
///
/// 1. Open the database pool for the configured backend
/// 2. Apply the schema (idempotent)
/// 3. Build the shared `AppState`
/// 4. Assemble the router with gates and layers
pub async fn create_app(config: ServerConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("initializing keygate server");

    let pool = config.database.connect().await?;
    tracing::info!("database connection pool created");

    apply_schema(&pool).await?;

    let state = AppState {
        pool,
        token_secret: config.token_secret,
    };

    Ok(create_router(state))
}
