//! Error types for Sampler.

use thiserror::Error;

/// Common error type for Sampler.
#[derive(Error, Debug)]
pub enum SamplerError {
    /// Database error.
    ///
    /// This is a generic database error that wraps errors from any database backend.
    /// Database errors from sqlx are automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// Database connection error.
    #[error("database connection error: {0}")]
    DatabaseConnection(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Upstream feed could not be retrieved (network failure or non-2xx status).
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Feed document is not well-formed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Validation error.
    #[error("validation error: {0}")]
    Validation(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for SamplerError {
    fn from(e: sqlx::Error) -> Self {
        SamplerError::Database(e.to_string())
    }
}

/// Result type alias for Sampler operations.
pub type Result<T> = std::result::Result<T, SamplerError>;
