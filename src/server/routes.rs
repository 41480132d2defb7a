//! Router configuration for the flag service.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use super::{auth, handlers, AppState};

/// Create the main router with all routes.
///
/// The bearer check is a route layer on /flag-image only; /health stays
/// open for orchestrator probes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/flag-image", post(handlers::flag_image))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer,
        ))
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
