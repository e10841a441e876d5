//! Ingestion cycle: fetch and parse every publisher feed, then store the batch.

use chrono::Utc;
use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::config::FeedConfig;
use crate::db::DbPool;
use crate::feed::{parse_feed, FeedFetcher, ParsedEntry};
use crate::media::{InsertReport, MediaItemRepository, NewMediaItem};
use crate::publisher::{Publisher, PublisherRepository};
use crate::Result;

/// Outcome of one ingestion cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Publishers read from the registry.
    pub publishers: usize,
    /// Entries collected across all feeds. This is the count reported to
    /// clients, whether or not every row was persisted.
    pub collected: usize,
    /// Result of the bulk insert.
    pub report: InsertReport,
}

/// Runs ingestion cycles over the publisher registry.
#[derive(Debug, Clone)]
pub struct IngestionPipeline {
    fetcher: FeedFetcher,
    max_concurrent_fetches: usize,
}

impl IngestionPipeline {
    /// Create a pipeline fetching at most `max_concurrent_fetches` feeds at once.
    pub fn new(fetcher: FeedFetcher, max_concurrent_fetches: usize) -> Self {
        Self {
            fetcher,
            max_concurrent_fetches: max_concurrent_fetches.max(1),
        }
    }

    /// Create a pipeline from the feed configuration.
    pub fn from_config(config: &FeedConfig) -> Result<Self> {
        Ok(Self::new(
            FeedFetcher::new(config)?,
            config.max_concurrent_fetches,
        ))
    }

    /// Run one ingestion cycle.
    ///
    /// Fetch and parse failures only drop the affected publisher. The call
    /// fails when the registry cannot be read or when the bulk insert cannot
    /// run at all; rows rejected individually are listed in the report.
    pub async fn ingest_all(&self, pool: &DbPool) -> Result<IngestSummary> {
        let publishers = PublisherRepository::new(pool).list_all().await?;
        let publisher_count = publishers.len();
        info!(publishers = publisher_count, "Starting ingestion cycle");

        let batches: Vec<Vec<NewMediaItem>> = stream::iter(publishers)
            .map(|publisher| collect_publisher(self.fetcher.clone(), publisher))
            .buffer_unordered(self.max_concurrent_fetches)
            .collect()
            .await;

        let items: Vec<NewMediaItem> = batches.into_iter().flatten().collect();
        let collected = items.len();
        info!(collected, "Total media items collected");

        let report = if items.is_empty() {
            InsertReport::default()
        } else {
            MediaItemRepository::new(pool)
                .insert_unordered(&items)
                .await?
        };

        if report.is_complete() {
            info!(stored = report.succeeded, "Media items stored");
        } else {
            warn!(
                stored = report.succeeded,
                rejected = report.failed(),
                "Media items partially stored"
            );
        }

        Ok(IngestSummary {
            publishers: publisher_count,
            collected,
            report,
        })
    }
}

/// Fetch and parse one publisher. Failures yield an empty batch.
async fn collect_publisher(fetcher: FeedFetcher, publisher: Publisher) -> Vec<NewMediaItem> {
    let publisher_id = publisher.publisher_id.as_str();

    match fetch_entries(&fetcher, publisher_id).await {
        Ok(entries) => {
            if entries.is_empty() {
                info!(publisher_id, "No videos found for publisher");
            }
            let discovered_at = Utc::now();
            entries
                .into_iter()
                .map(|entry| entry.into_new_item(discovered_at))
                .collect()
        }
        Err(e) => {
            warn!(publisher_id, "Skipping publisher feed: {}", e);
            Vec::new()
        }
    }
}

async fn fetch_entries(fetcher: &FeedFetcher, publisher_id: &str) -> Result<Vec<ParsedEntry>> {
    let raw = fetcher.fetch(publisher_id).await?;
    parse_feed(&raw)
}
