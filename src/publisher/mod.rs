//! Publisher registry for Sampler.
//!
//! Publishers are the upstream feed sources. The registry is wiped and
//! reseeded from a built-in list on every process start.

pub mod registry;
pub mod repository;
pub mod types;

pub use registry::{initialize, reset_and_seed, DEFAULT_PUBLISHERS};
pub use repository::PublisherRepository;
pub use types::{NewPublisher, Publisher};
