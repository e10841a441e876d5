//! Media handlers: on-demand ingestion and random selection.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::media::pick_random;
use crate::web::dto::{FetchResponse, MediaItemResponse};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// GET /fetch-from-rss - Run one ingestion cycle.
pub async fn fetch_from_rss(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FetchResponse>, ApiError> {
    let summary = state
        .pipeline
        .ingest_all(state.db.pool())
        .await
        .map_err(|e| {
            tracing::error!("Failed to ingest feeds: {}", e);
            ApiError::internal("Failed to fetch videos from RSS feeds")
        })?;

    Ok(Json(FetchResponse::new(summary.collected)))
}

/// GET /random-song - Return a random stored item, or `null` when none is stored.
pub async fn random_song(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Option<MediaItemResponse>>, ApiError> {
    let item = pick_random(state.db.pool()).await.map_err(|e| {
        tracing::error!("Failed to pick random media item: {}", e);
        ApiError::internal("Failed to fetch a random song")
    })?;

    Ok(Json(item.map(MediaItemResponse::from)))
}
