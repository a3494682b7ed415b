//! Blocking HTTP client for the TMDB v3 API.

use std::time::Instant;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use costar_core::{CastMember, MovieCredit, MovieId, PersonId};
use costar_error::{Error, Result};

use crate::config::TmdbConfig;
use crate::retry::with_retries;
use crate::source::MetadataSource;
use crate::types::{MovieCastResponse, MovieCreditsResponse, PersonResponse};

const USER_AGENT: &str = concat!("costar/", env!("CARGO_PKG_VERSION"));

/// TMDB-backed [`MetadataSource`].
#[derive(Debug)]
pub struct TmdbClient {
    config: TmdbConfig,
    http: Client,
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> Result<Self> {
        config.validate()?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                Error::config_invalid("failed to build HTTP client")
                    .with_operation("tmdb::client::new")
                    .set_source(e)
            })?;
        Ok(Self { config, http })
    }

    /// Full request url for an API path such as `movie/603/credits`.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}?api_key={}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/'),
            self.config.api_key
        )
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let start = Instant::now();
        let result = with_retries(self.config.max_retries, self.config.retry_backoff(), || {
            self.get_once(&url)
        });
        debug!(
            path,
            ok = result.is_ok(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "tmdb request"
        );
        result.map_err(|e| e.with_operation("tmdb::get_json").with_context("path", path))
    }

    fn get_once<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.http.get(url).send().map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http_status(status.as_u16()));
        }

        response.json::<T>().map_err(|e| {
            if e.is_decode() {
                Error::deserialization_failed("malformed TMDB response").set_source(e)
            } else {
                map_transport_error(e)
            }
        })
    }
}

fn map_transport_error(err: reqwest::Error) -> Error {
    // Strip the url: it carries the api key.
    let err = err.without_url();
    if err.is_timeout() {
        Error::timeout("TMDB request timed out").set_source(err)
    } else {
        Error::network("TMDB request failed").set_source(err)
    }
}

impl MetadataSource for TmdbClient {
    fn raw_filmography(&self, person: PersonId) -> Result<Vec<MovieCredit>> {
        let response: MovieCreditsResponse = self
            .get_json(&format!("person/{person}/movie_credits"))
            .map_err(|e| {
                e.with_operation("tmdb::filmography")
                    .with_context("person_id", person.to_string())
            })?;
        Ok(response.cast)
    }

    fn raw_cast(&self, movie: MovieId) -> Result<Vec<CastMember>> {
        let response: MovieCastResponse = self
            .get_json(&format!("movie/{movie}/credits"))
            .map_err(|e| {
                e.with_operation("tmdb::cast")
                    .with_context("movie_id", movie.to_string())
            })?;
        Ok(response.cast)
    }

    fn fetch_person_name(&self, person: PersonId) -> Result<String> {
        let response: PersonResponse = self.get_json(&format!("person/{person}")).map_err(|e| {
            e.with_operation("tmdb::person")
                .with_context("person_id", person.to_string())
        })?;
        Ok(response.name)
    }
}
