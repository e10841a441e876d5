//! Router configuration for the HTTP API.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{fetch_from_rss, health_check, random_song, test_db, welcome, AppState};
use super::middleware::create_cors_layer;

/// Create the main API router, health check included.
///
/// Tracing and CORS wrap every route.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/fetch-from-rss", get(fetch_from_rss))
        .route("/random-song", get(random_song))
        .route("/test-db", get(test_db))
        .with_state(app_state)
        .merge(create_health_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}
