/**
 * Router Configuration
 *
 * Assembles the application router: the public signup route, the
 * Basic-gated signin route, the Bearer-gated protected routes, a uniform
 * 404 fallback, and the request-logging and CORS layers that front every
 * route.
 *
 * # Gate Placement
 *
 * The gates are attached with `route_layer`, so they run only when a route
 * actually matches; unmatched paths fall through to the 404 handler rather
 * than producing an auth rejection.
 */

use axum::{
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::{get_secret, get_users, signin, signup};
use crate::middleware::{basic_auth, bearer_auth};
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Routes
///
/// - `POST /signup` - User registration (public)
/// - `POST /signin` - Requires Basic credentials
/// - `GET /users` - Requires a bearer token
/// - `GET /secret` - Requires a bearer token
/// - anything else - uniform 404
pub fn create_router(state: AppState) -> Router<()> {
    let basic_gated = Router::new()
        .route("/signin", post(signin))
        .route_layer(middleware::from_fn_with_state(state.clone(), basic_auth));

    let bearer_gated = Router::new()
        .route("/users", get(get_users))
        .route("/secret", get(get_secret))
        .route_layer(middleware::from_fn_with_state(state.clone(), bearer_auth));

    Router::new()
        .route("/signup", post(signup))
        .merge(basic_gated)
        .merge(bearer_gated)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Uniform response for unmatched routes
async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}
