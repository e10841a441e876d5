//! API handlers.

pub mod media;
pub mod status;

use std::sync::Arc;

use crate::db::SharedDatabase;
use crate::ingest::IngestionPipeline;

pub use media::*;
pub use status::*;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Storage handle.
    pub db: SharedDatabase,
    /// Ingestion pipeline used by on-demand fetches.
    pub pipeline: Arc<IngestionPipeline>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: SharedDatabase, pipeline: Arc<IngestionPipeline>) -> Self {
        Self { db, pipeline }
    }
}
