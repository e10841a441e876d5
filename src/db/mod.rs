//! Database module for Sampler.
//!
//! Wraps an sqlx connection pool. SQLite is the default backend; PostgreSQL
//! is selected with the `postgres` feature.

mod schema;

pub use schema::SCHEMA;

use std::sync::Arc;

use tracing::{debug, info};

use crate::{Result, SamplerError};

/// Connection pool type for the enabled backend.
#[cfg(feature = "sqlite")]
pub type DbPool = sqlx::SqlitePool;

/// Connection pool type for the enabled backend.
#[cfg(all(feature = "postgres", not(feature = "sqlite")))]
pub type DbPool = sqlx::PgPool;

/// Database handle shared between the web layer and background tasks.
pub type SharedDatabase = Arc<Database>;

/// Database wrapper owning the connection pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Connect to the database at `url` and apply the schema.
    ///
    /// For SQLite, the database file and its parent directory are created
    /// when missing.
    #[cfg(feature = "sqlite")]
    pub async fn open(url: &str) -> Result<Self> {
        use std::str::FromStr;

        use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

        info!("Opening database at {}", url);

        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| SamplerError::DatabaseConnection(e.to_string()))?
            .create_if_missing(true);

        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|e| SamplerError::DatabaseConnection(e.to_string()))?;

        Self::from_pool(pool).await
    }

    /// Connect to the database at `url` and apply the schema.
    #[cfg(all(feature = "postgres", not(feature = "sqlite")))]
    pub async fn open(url: &str) -> Result<Self> {
        use sqlx::postgres::PgPoolOptions;

        info!("Opening database at {}", url);

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(url)
            .await
            .map_err(|e| SamplerError::DatabaseConnection(e.to_string()))?;

        Self::from_pool(pool).await
    }

    /// Open an in-memory database for testing.
    ///
    /// Every SQLite in-memory connection is its own database, so the pool is
    /// pinned to one connection that is never recycled.
    #[cfg(feature = "sqlite")]
    pub async fn open_in_memory() -> Result<Self> {
        use sqlx::sqlite::SqlitePoolOptions;

        debug!("Opening in-memory database");

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| SamplerError::DatabaseConnection(e.to_string()))?;

        Self::from_pool(pool).await
    }

    /// Wrap an existing pool and apply the schema.
    pub async fn from_pool(pool: DbPool) -> Result<Self> {
        let db = Self { pool };
        db.apply_schema().await?;
        Ok(db)
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Close every connection in the pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn apply_schema(&self) -> Result<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        debug!("Database schema ready");
        Ok(())
    }
}
