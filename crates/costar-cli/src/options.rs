//! Shared CLI option groups.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

/// How the filmography is traversed.
#[derive(Args, Debug, Clone, Default)]
pub struct TraversalOptions {
    /// Only movies released strictly after this date (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    pub start: Option<String>,

    /// Only movies released strictly before this date (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    pub end: Option<String>,

    /// Top-billed co-stars taken from each movie.
    #[arg(long = "cast-limit", value_name = "N")]
    pub cast_limit: Option<usize>,

    /// Fetch cast lists in parallel. The graph is identical to a sequential run.
    #[arg(long)]
    pub parallel: bool,
}

/// Where the metadata comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceOptions {
    /// TMDB v3 api key (falls back to TMDB_API_KEY, then the config file).
    #[arg(long = "api-key", value_name = "KEY")]
    pub api_key: Option<String>,

    /// TMDB api base url.
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Extra attempts for requests that fail temporarily.
    #[arg(long = "retries", value_name = "N")]
    pub max_retries: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What gets written where.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputOptions {
    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also list the N best connected people.
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Write the graph as DOT to this file.
    #[arg(long, value_name = "FILE")]
    pub dot: Option<PathBuf>,

    /// Render the graph to PNG with graphviz `dot`.
    #[arg(long, value_name = "FILE")]
    pub png: Option<PathBuf>,

    /// Write the report to this file instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl TraversalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self.end = Some(end.into());
        self
    }

    pub fn with_cast_limit(mut self, limit: usize) -> Self {
        self.cast_limit = Some(limit);
        self
    }
}

impl SourceOptions {
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}
