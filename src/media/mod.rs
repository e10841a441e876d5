//! Ingested media items and random selection.

pub mod random;
pub mod repository;
pub mod types;

pub use random::{pick_index, pick_random};
pub use repository::MediaItemRepository;
pub use types::{FailedRow, InsertReport, MediaItem, NewMediaItem};
