//! Media item types.

use chrono::{DateTime, Utc};

/// A stored media item (one ingested feed entry).
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    /// Row ID. Ascending IDs give the insertion order.
    pub id: i64,
    /// Upstream identifier of the item (e.g. a video id).
    pub external_id: String,
    /// Item title.
    pub title: String,
    /// Author name reported by the feed at ingestion time.
    pub channel_name: String,
    /// When the item was stored.
    pub discovered_at: DateTime<Utc>,
}

/// New media item for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMediaItem {
    pub external_id: String,
    pub title: String,
    pub channel_name: String,
    pub discovered_at: DateTime<Utc>,
}

impl NewMediaItem {
    /// Create a new item discovered now.
    pub fn new(
        external_id: impl Into<String>,
        title: impl Into<String>,
        channel_name: impl Into<String>,
    ) -> Self {
        Self {
            external_id: external_id.into(),
            title: title.into(),
            channel_name: channel_name.into(),
            discovered_at: Utc::now(),
        }
    }

    /// Override the discovery timestamp.
    pub fn with_discovered_at(mut self, discovered_at: DateTime<Utc>) -> Self {
        self.discovered_at = discovered_at;
        self
    }
}

/// A row rejected during an unordered bulk insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRow {
    /// Position of the row in the submitted batch.
    pub index: usize,
    /// External id of the rejected row.
    pub external_id: String,
    /// Storage error message.
    pub error: String,
}

/// Outcome of an unordered bulk insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertReport {
    /// Rows submitted.
    pub attempted: usize,
    /// Rows committed.
    pub succeeded: usize,
    /// Rows rejected by storage.
    pub failed_rows: Vec<FailedRow>,
}

impl InsertReport {
    /// Number of rejected rows.
    pub fn failed(&self) -> usize {
        self.failed_rows.len()
    }

    /// True when every submitted row was committed.
    pub fn is_complete(&self) -> bool {
        self.failed_rows.is_empty() && self.succeeded == self.attempted
    }
}
