//! HTTP API for Sampler.
//!
//! Thin axum handlers over the ingestion pipeline, random selection and the
//! storage counters.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
