//! Upstream feed retrieval and parsing.
//!
//! Feeds are Atom documents served at
//! `<base_url>/feeds/videos.xml?channel_id=<publisher id>`.

pub mod fetcher;
pub mod parser;
pub mod types;

pub use fetcher::FeedFetcher;
pub use parser::parse_feed;
pub use types::ParsedEntry;
