//! Client configuration, passed explicitly to `TmdbClient::new`.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use costar_error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TmdbConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "TmdbConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "TmdbConfig::default_timeout_secs")]
    pub timeout_secs: u64,
    /// Extra attempts after a temporary failure. Zero disables retrying.
    #[serde(default)]
    pub max_retries: u32,
    #[serde(default = "TmdbConfig::default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

impl TmdbConfig {
    fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    fn default_timeout_secs() -> u64 {
        30
    }

    fn default_retry_backoff_ms() -> u64 {
        500
    }

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::config_invalid(
                "missing TMDB api key (set --api-key, TMDB_API_KEY or [tmdb].api_key)",
            )
            .with_operation("tmdb::config"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Error::config_invalid("base_url must be an http(s) url")
                .with_operation("tmdb::config")
                .with_context("base_url", self.base_url.clone()));
        }
        if self.timeout_secs == 0 {
            return Err(Error::config_invalid("timeout_secs must be positive")
                .with_operation("tmdb::config"));
        }
        Ok(())
    }
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: Self::default_base_url(),
            timeout_secs: Self::default_timeout_secs(),
            max_retries: 0,
            retry_backoff_ms: Self::default_retry_backoff_ms(),
        }
    }
}

// The key never shows up in logs or error output.
impl fmt::Debug for TmdbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbConfig")
            .field("api_key", &if self.api_key.is_empty() { "" } else { "***" })
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_ms", &self.retry_backoff_ms)
            .finish()
    }
}
