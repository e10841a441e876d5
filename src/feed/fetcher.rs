//! Feed fetcher.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config::FeedConfig;
use crate::{Result, SamplerError};

/// User agent string for feed fetching.
const USER_AGENT: &str = concat!("Sampler/", env!("CARGO_PKG_VERSION"), " (feed ingester)");

/// HTTP client for publisher feeds.
///
/// One client is built at startup and shared by every ingestion branch.
#[derive(Debug, Clone)]
pub struct FeedFetcher {
    client: Client,
    base_url: String,
    max_feed_size: u64,
}

impl FeedFetcher {
    /// Create a fetcher from the feed configuration.
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .read_timeout(Duration::from_secs(config.read_timeout_secs))
            .timeout(Duration::from_secs(config.total_timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SamplerError::Fetch(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_feed_size: config.max_feed_size_bytes,
        })
    }

    /// Feed URL for a publisher.
    pub fn feed_url(&self, publisher_id: &str) -> String {
        format!(
            "{}/feeds/videos.xml?channel_id={}",
            self.base_url,
            urlencoding::encode(publisher_id)
        )
    }

    /// Fetch the raw feed document of a publisher.
    ///
    /// Non-2xx responses, transport failures and oversized bodies are
    /// reported as [`SamplerError::Fetch`].
    pub async fn fetch(&self, publisher_id: &str) -> Result<String> {
        let url = self.feed_url(publisher_id);
        debug!(publisher_id, "Fetching feed {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SamplerError::Fetch(format!("failed to fetch feed: {}", e)))?;

        if !response.status().is_success() {
            return Err(SamplerError::Fetch(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        if let Some(content_length) = response.content_length() {
            if content_length > self.max_feed_size {
                return Err(SamplerError::Fetch(format!(
                    "feed too large: {} bytes (max {} bytes)",
                    content_length, self.max_feed_size
                )));
            }
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SamplerError::Fetch(format!("failed to read response: {}", e)))?;

        if bytes.len() as u64 > self.max_feed_size {
            return Err(SamplerError::Fetch(format!(
                "feed too large: {} bytes (max {} bytes)",
                bytes.len(),
                self.max_feed_size
            )));
        }

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
