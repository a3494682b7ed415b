//! Configuration file loading and precedence.
//!
//! Every setting resolves as: command line flag, then environment
//! (`TMDB_API_KEY` only), then the TOML file, then the built-in default.
//!
//! ```toml
//! [tmdb]
//! api_key = "..."
//! timeout_secs = 30
//! max_retries = 2
//!
//! [run]
//! start = "2000-01-01"
//! end = "2025-12-31"
//! cast_limit = 5
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use costar_core::DateRange;
use costar_error::{Error, Result};
use costar_tmdb::TmdbConfig;

use crate::options::{SourceOptions, TraversalOptions};

pub const API_KEY_ENV: &str = "TMDB_API_KEY";
pub const DEFAULT_START: &str = "2000-01-01";
pub const DEFAULT_END: &str = "2025-12-31";
pub const DEFAULT_CAST_LIMIT: usize = 5;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub run: RunSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSection {
    pub start: Option<String>,
    pub end: Option<String>,
    pub cast_limit: Option<usize>,
    pub parallel: Option<bool>,
}

impl FileConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            Error::from(e)
                .with_operation("config::from_path")
                .with_context("path", path.display().to_string())
        })?;
        Self::parse(&text).map_err(|e| e.with_context("path", path.display().to_string()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| {
            Error::config_invalid("invalid TOML configuration")
                .with_operation("config::parse")
                .set_source(e)
        })
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub tmdb: TmdbConfig,
    pub range: DateRange,
    pub cast_limit: usize,
    pub parallel: bool,
}

/// Merge the file, environment and command line into one configuration.
///
/// The TMDB section is not validated here; sources that need a key check it
/// themselves.
pub fn resolve(
    file: FileConfig,
    traversal: &TraversalOptions,
    source: &SourceOptions,
    env_api_key: Option<String>,
) -> Result<ResolvedConfig> {
    let FileConfig { mut tmdb, run } = file;

    if let Some(key) = source.api_key.clone().or(env_api_key.filter(|k| !k.is_empty())) {
        tmdb.api_key = key;
    }
    if let Some(url) = &source.base_url {
        tmdb.base_url = url.clone();
    }
    if let Some(retries) = source.max_retries {
        tmdb.max_retries = retries;
    }

    let start = traversal
        .start
        .as_deref()
        .or(run.start.as_deref())
        .unwrap_or(DEFAULT_START);
    let end = traversal
        .end
        .as_deref()
        .or(run.end.as_deref())
        .unwrap_or(DEFAULT_END);
    let range = DateRange::parse(start, end).map_err(|e| e.with_operation("config::resolve"))?;

    let cast_limit = traversal
        .cast_limit
        .or(run.cast_limit)
        .unwrap_or(DEFAULT_CAST_LIMIT);

    Ok(ResolvedConfig {
        tmdb,
        range,
        cast_limit,
        parallel: traversal.parallel || run.parallel.unwrap_or(false),
    })
}
