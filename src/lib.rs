//! Sampler - video metadata aggregator
//!
//! Keeps a registry of publishers, ingests their Atom feeds into storage,
//! and serves random picks over a small HTTP API.

pub mod config;
pub mod db;
pub mod error;
pub mod feed;
pub mod ingest;
pub mod logging;
pub mod media;
pub mod publisher;
pub mod web;

pub use config::Config;
pub use db::{Database, DbPool, SharedDatabase};
pub use error::{Result, SamplerError};
pub use feed::{parse_feed, FeedFetcher, ParsedEntry};
pub use ingest::{start_ingest_updater, IngestSummary, IngestUpdater, IngestionPipeline};
pub use media::{pick_random, InsertReport, MediaItem, MediaItemRepository, NewMediaItem};
pub use publisher::{NewPublisher, Publisher, PublisherRepository, DEFAULT_PUBLISHERS};
pub use web::{AppState, WebServer};
