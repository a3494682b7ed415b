//! Metadata source adapter for costar.
//!
//! - [`source`]: the `MetadataSource` trait the pipeline talks to
//! - [`client`]: blocking HTTP client for the TMDB v3 API
//! - [`config`]: explicit client configuration (api key, base url, retries)
//! - [`mock`]: in-memory source for tests and offline runs
//! - [`retry`]: retry loop driven by `ErrorStatus`

mod client;
mod config;
mod mock;
mod retry;
mod source;
mod types;

pub use client::TmdbClient;
pub use config::{DEFAULT_BASE_URL, TmdbConfig};
pub use mock::MockSource;
pub use retry::with_retries;
pub use source::MetadataSource;
pub use types::{MovieCastResponse, MovieCreditsResponse, PersonResponse};
