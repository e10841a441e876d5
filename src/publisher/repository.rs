//! Publisher repository.

use super::types::{NewPublisher, Publisher};
use crate::db::DbPool;
use crate::{Result, SamplerError};

/// Row type for publisher from database.
#[derive(Debug, Clone, sqlx::FromRow)]
struct PublisherRow {
    id: i64,
    publisher_id: String,
    name: String,
}

impl From<PublisherRow> for Publisher {
    fn from(row: PublisherRow) -> Self {
        Publisher {
            id: row.id,
            publisher_id: row.publisher_id,
            name: row.name,
        }
    }
}

/// Repository for publisher operations.
pub struct PublisherRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> PublisherRepository<'a> {
    /// Create a new repository instance.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Delete every publisher. Returns the number of deleted rows.
    pub async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM publishers")
            .execute(self.pool)
            .await
            .map_err(|e| SamplerError::Database(e.to_string()))?;

        Ok(result.rows_affected())
    }

    /// Insert publishers in list order, keeping duplicates.
    ///
    /// All rows are written in one transaction.
    pub async fn insert_many(&self, publishers: &[NewPublisher]) -> Result<usize> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| SamplerError::Database(e.to_string()))?;

        for publisher in publishers {
            sqlx::query("INSERT INTO publishers (publisher_id, name) VALUES ($1, $2)")
                .bind(&publisher.publisher_id)
                .bind(&publisher.name)
                .execute(&mut *tx)
                .await
                .map_err(|e| SamplerError::Database(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| SamplerError::Database(e.to_string()))?;

        Ok(publishers.len())
    }

    /// List all publishers in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Publisher>> {
        let rows = sqlx::query_as::<_, PublisherRow>(
            "SELECT id, publisher_id, name FROM publishers ORDER BY id ASC",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| SamplerError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Publisher::from).collect())
    }

    /// Count all publishers.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM publishers")
            .fetch_one(self.pool)
            .await
            .map_err(|e| SamplerError::Database(e.to_string()))?;

        Ok(count.0)
    }
}
