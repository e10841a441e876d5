//! Status handlers.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::db::DbPool;
use crate::media::MediaItemRepository;
use crate::publisher::PublisherRepository;
use crate::web::dto::DbStatusResponse;
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// Body of the root route.
pub const WELCOME_MESSAGE: &str =
    "Welcome to the Sampler App! Try /random-song, /fetch-from-rss, or /upload-audio.";

/// GET / - Welcome text.
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

/// GET /test-db - Report registry and media item counts.
pub async fn test_db(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DbStatusResponse>, ApiError> {
    let (channels, songs) = storage_counts(state.db.pool()).await.map_err(|e| {
        tracing::error!("Database check failed: {}", e);
        ApiError::internal("Database connection failed")
    })?;

    Ok(Json(DbStatusResponse::new(channels, songs)))
}

async fn storage_counts(pool: &DbPool) -> crate::Result<(i64, i64)> {
    let channels = PublisherRepository::new(pool).count().await?;
    let songs = MediaItemRepository::new(pool).count().await?;
    Ok((channels, songs))
}

/// GET /health - Liveness check.
pub async fn health_check() -> &'static str {
    "OK"
}
