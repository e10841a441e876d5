//! Configuration module for Sampler.

use serde::Deserialize;
use std::path::Path;

use crate::{Result, SamplerError};

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL (`sqlite://...` or `postgres://...`).
    #[serde(default = "default_db_url")]
    pub url: String,
}

fn default_db_url() -> String {
    "sqlite://data/sampler.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_db_url(),
        }
    }
}

/// Upstream feed configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Scheme and host that serve `/feeds/videos.xml`.
    #[serde(default = "default_feed_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Read timeout in seconds.
    #[serde(default = "default_read_timeout")]
    pub read_timeout_secs: u64,
    /// Total request timeout in seconds.
    #[serde(default = "default_total_timeout")]
    pub total_timeout_secs: u64,
    /// Maximum number of redirects.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
    /// Maximum feed size in bytes.
    #[serde(default = "default_max_feed_size")]
    pub max_feed_size_bytes: u64,
    /// Number of publisher feeds fetched at the same time during one ingestion cycle.
    #[serde(default = "default_max_concurrent_fetches")]
    pub max_concurrent_fetches: usize,
    /// Interval between background ingestion cycles in seconds (0 = disabled).
    #[serde(default)]
    pub update_interval_secs: u64,
}

fn default_feed_base_url() -> String {
    "https://www.youtube.com".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_read_timeout() -> u64 {
    20
}

fn default_total_timeout() -> u64 {
    30
}

fn default_max_redirects() -> usize {
    5
}

fn default_max_feed_size() -> u64 {
    5 * 1024 * 1024 // 5MB
}

fn default_max_concurrent_fetches() -> usize {
    15
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_feed_base_url(),
            connect_timeout_secs: default_connect_timeout(),
            read_timeout_secs: default_read_timeout(),
            total_timeout_secs: default_total_timeout(),
            max_redirects: default_max_redirects(),
            max_feed_size_bytes: default_max_feed_size(),
            max_concurrent_fetches: default_max_concurrent_fetches(),
            update_interval_secs: 0,
        }
    }
}

/// Web API configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebConfig {
    /// CORS allowed origins (empty = any origin).
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/sampler.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Upstream feed configuration.
    #[serde(default)]
    pub feed: FeedConfig,
    /// Web API configuration.
    #[serde(default)]
    pub web: WebConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(SamplerError::Io)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| SamplerError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `PORT`: HTTP listen port
    /// - `DATABASE_URL`: storage connection string
    /// - `SAMPLER_FEED_BASE_URL`: upstream feed host
    ///
    /// Empty or unparsable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Some(port) = env_non_empty("PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Some(url) = env_non_empty("DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(base_url) = env_non_empty("SAMPLER_FEED_BASE_URL") {
            self.feed.base_url = base_url;
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.feed.base_url)
            .map_err(|e| SamplerError::Validation(format!("invalid feed.base_url: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SamplerError::Validation(format!(
                "unsupported feed.base_url scheme: {}",
                parsed.scheme()
            )));
        }
        if self.feed.max_concurrent_fetches == 0 {
            return Err(SamplerError::Validation(
                "feed.max_concurrent_fetches must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3001);

        assert_eq!(config.database.url, "sqlite://data/sampler.db");

        assert_eq!(config.feed.base_url, "https://www.youtube.com");
        assert_eq!(config.feed.connect_timeout_secs, 10);
        assert_eq!(config.feed.read_timeout_secs, 20);
        assert_eq!(config.feed.total_timeout_secs, 30);
        assert_eq!(config.feed.max_redirects, 5);
        assert_eq!(config.feed.max_feed_size_bytes, 5 * 1024 * 1024);
        assert_eq!(config.feed.max_concurrent_fetches, 15);
        assert_eq!(config.feed.update_interval_secs, 0);

        assert!(config.web.cors_origins.is_empty());

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, "logs/sampler.log");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 8080

[database]
url = "postgres://localhost/sampler"

[feed]
base_url = "http://feeds.example.com"
connect_timeout_secs = 5
read_timeout_secs = 6
total_timeout_secs = 7
max_redirects = 2
max_feed_size_bytes = 1024
max_concurrent_fetches = 4
update_interval_secs = 900

[web]
cors_origins = ["http://localhost:5173"]

[logging]
level = "debug"
file = "custom/logs/app.log"
"#;

        let config = Config::parse(toml).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.url, "postgres://localhost/sampler");
        assert_eq!(config.feed.base_url, "http://feeds.example.com");
        assert_eq!(config.feed.connect_timeout_secs, 5);
        assert_eq!(config.feed.read_timeout_secs, 6);
        assert_eq!(config.feed.total_timeout_secs, 7);
        assert_eq!(config.feed.max_redirects, 2);
        assert_eq!(config.feed.max_feed_size_bytes, 1024);
        assert_eq!(config.feed.max_concurrent_fetches, 4);
        assert_eq!(config.feed.update_interval_secs, 900);
        assert_eq!(config.web.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, "custom/logs/app.log");
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[server]
port = 4000
"#;

        let config = Config::parse(toml).unwrap();

        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.feed.max_concurrent_fetches, 15);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.database.url, "sqlite://data/sampler.db");
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = Config::parse("this is not valid toml [[[");

        assert!(result.is_err());
        if let Err(SamplerError::Config(msg)) = result {
            assert!(msg.contains("config parse error"));
        } else {
            panic!("Expected Config error");
        }
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load("nonexistent.toml");
        assert!(matches!(result, Err(SamplerError::Io(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 3999").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 3999);
    }

    #[test]
    fn test_apply_env_overrides() {
        let original_port = std::env::var("PORT").ok();
        let original_db = std::env::var("DATABASE_URL").ok();

        std::env::set_var("PORT", "4321");
        std::env::set_var("DATABASE_URL", "sqlite::memory:");

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.server.port, 4321);
        assert_eq!(config.database.url, "sqlite::memory:");

        // Empty and unparsable values leave the config untouched
        std::env::set_var("PORT", "not-a-port");
        std::env::set_var("DATABASE_URL", "");

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.database.url, "sqlite://data/sampler.db");

        match original_port {
            Some(val) => std::env::set_var("PORT", val),
            None => std::env::remove_var("PORT"),
        }
        match original_db {
            Some(val) => std::env::set_var("DATABASE_URL", val),
            None => std::env::remove_var("DATABASE_URL"),
        }
    }

    #[test]
    fn test_validate_default() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_base_url() {
        let mut config = Config::default();
        config.feed.base_url = "not a url".to_string();
        assert!(matches!(
            config.validate(),
            Err(SamplerError::Validation(_))
        ));

        config.feed.base_url = "ftp://example.com".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("unsupported feed.base_url scheme"));
    }

    #[test]
    fn test_validate_zero_concurrency() {
        let mut config = Config::default();
        config.feed.max_concurrent_fetches = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_concurrent_fetches"));
    }
}
