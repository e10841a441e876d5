//! Feed ingestion for Sampler.
//!
//! One cycle reads the publisher registry, fetches and parses every feed,
//! and stores the collected entries with a single unordered bulk insert.

pub mod pipeline;
pub mod updater;

pub use pipeline::{IngestSummary, IngestionPipeline};
pub use updater::{start_ingest_updater, IngestUpdater};
