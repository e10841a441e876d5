//! Media item repository.

use chrono::{DateTime, Utc};
use tracing::warn;

use super::types::{FailedRow, InsertReport, MediaItem, NewMediaItem};
use crate::db::DbPool;
use crate::{Result, SamplerError};

/// Row type for media item from database.
#[derive(Debug, Clone, sqlx::FromRow)]
struct MediaItemRow {
    id: i64,
    external_id: String,
    title: String,
    channel_name: String,
    discovered_at: String,
}

impl From<MediaItemRow> for MediaItem {
    fn from(row: MediaItemRow) -> Self {
        MediaItem {
            id: row.id,
            external_id: row.external_id,
            title: row.title,
            channel_name: row.channel_name,
            discovered_at: parse_datetime(&row.discovered_at).unwrap_or_else(Utc::now),
        }
    }
}

/// Repository for media item operations.
pub struct MediaItemRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> MediaItemRepository<'a> {
    /// Create a new repository instance.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a batch without stopping at rejected rows.
    ///
    /// Each row is its own statement on a single connection. A row that
    /// storage rejects is recorded in the report and the remaining rows are
    /// still written. Only failing to obtain a connection fails the call.
    pub async fn insert_unordered(&self, items: &[NewMediaItem]) -> Result<InsertReport> {
        let mut report = InsertReport {
            attempted: items.len(),
            ..InsertReport::default()
        };
        if items.is_empty() {
            return Ok(report);
        }

        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| SamplerError::Database(e.to_string()))?;

        for (index, item) in items.iter().enumerate() {
            let result = sqlx::query(
                r#"
                INSERT INTO media_items (external_id, title, channel_name, discovered_at)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(&item.external_id)
            .bind(&item.title)
            .bind(&item.channel_name)
            .bind(item.discovered_at.to_rfc3339())
            .execute(&mut *conn)
            .await;

            match result {
                Ok(_) => report.succeeded += 1,
                Err(e) => {
                    warn!(
                        external_id = %item.external_id,
                        "Skipping media item rejected by storage: {}", e
                    );
                    report.failed_rows.push(FailedRow {
                        index,
                        external_id: item.external_id.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }

    /// Count all media items.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM media_items")
            .fetch_one(self.pool)
            .await
            .map_err(|e| SamplerError::Database(e.to_string()))?;

        Ok(count.0)
    }

    /// Get the item at `offset` in insertion order.
    pub async fn get_at_offset(&self, offset: i64) -> Result<Option<MediaItem>> {
        let row = sqlx::query_as::<_, MediaItemRow>(
            r#"
            SELECT id, external_id, title, channel_name, discovered_at
            FROM media_items
            ORDER BY id ASC
            LIMIT 1 OFFSET $1
            "#,
        )
        .bind(offset)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| SamplerError::Database(e.to_string()))?;

        Ok(row.map(MediaItem::from))
    }

    /// List the most recently stored items (newest first).
    pub async fn list_recent(&self, limit: usize) -> Result<Vec<MediaItem>> {
        let rows = sqlx::query_as::<_, MediaItemRow>(
            r#"
            SELECT id, external_id, title, channel_name, discovered_at
            FROM media_items
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(self.pool)
        .await
        .map_err(|e| SamplerError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(MediaItem::from).collect())
    }
}

/// Parse a stored timestamp.
fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // SQLite datetime('now') format
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(DateTime::from_naive_utc_and_offset(naive, Utc));
    }
    None
}
