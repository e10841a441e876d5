//! Background ingestion task.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};
use tracing::{debug, error, info};

use super::pipeline::{IngestSummary, IngestionPipeline};
use crate::db::SharedDatabase;

/// Runs an ingestion cycle at a fixed interval.
pub struct IngestUpdater {
    db: SharedDatabase,
    pipeline: Arc<IngestionPipeline>,
    period: Duration,
}

impl IngestUpdater {
    /// Create an updater running every `interval_secs` seconds.
    pub fn new(db: SharedDatabase, pipeline: Arc<IngestionPipeline>, interval_secs: u64) -> Self {
        Self {
            db,
            pipeline,
            period: Duration::from_secs(interval_secs),
        }
    }

    /// Run the updater loop. The first cycle starts one period after the call.
    pub async fn run(&self) {
        info!(
            "Ingestion updater started (interval: {} seconds)",
            self.period.as_secs()
        );

        let mut timer = interval(self.period);
        // Skip the first immediate tick
        timer.tick().await;

        loop {
            timer.tick().await;
            self.run_cycle().await;
        }
    }

    /// Run a single cycle, logging its outcome.
    pub async fn run_cycle(&self) -> Option<IngestSummary> {
        debug!("Running scheduled ingestion cycle");
        match self.pipeline.ingest_all(self.db.pool()).await {
            Ok(summary) => {
                info!(
                    publishers = summary.publishers,
                    collected = summary.collected,
                    stored = summary.report.succeeded,
                    "Scheduled ingestion finished"
                );
                Some(summary)
            }
            Err(e) => {
                error!("Scheduled ingestion failed: {}", e);
                None
            }
        }
    }
}

/// Spawn the updater when `interval_secs` is non-zero.
pub fn start_ingest_updater(
    db: SharedDatabase,
    pipeline: Arc<IngestionPipeline>,
    interval_secs: u64,
) -> Option<JoinHandle<()>> {
    if interval_secs == 0 {
        debug!("Ingestion updater disabled");
        return None;
    }

    let updater = IngestUpdater::new(db, pipeline, interval_secs);
    Some(tokio::spawn(async move {
        updater.run().await;
    }))
}
