//! Release-date filtering of a filmography.

use serde::Serialize;
use tracing::debug;

use costar_error::{Error, Result};

use crate::date::ReleaseDate;
use crate::types::MovieCredit;

/// Open interval of release dates: both bounds are excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: ReleaseDate,
    pub end: ReleaseDate,
}

impl DateRange {
    pub fn new(start: ReleaseDate, end: ReleaseDate) -> Self {
        Self { start, end }
    }

    /// Parse both bounds from `YYYY-MM-DD` text.
    ///
    /// Rejects malformed bounds and ranges whose start is not before the end.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start_date: ReleaseDate = start
            .parse()
            .map_err(|e: Error| e.with_context("bound", "start"))?;
        let end_date: ReleaseDate = end
            .parse()
            .map_err(|e: Error| e.with_context("bound", "end"))?;

        if start_date >= end_date {
            return Err(Error::config_invalid(format!(
                "date range start {start_date} must be before end {end_date}"
            ))
            .with_operation("credit::DateRange::parse"));
        }

        Ok(Self::new(start_date, end_date))
    }

    /// `start < date < end`.
    pub fn contains(&self, date: ReleaseDate) -> bool {
        date > self.start && date < self.end
    }
}

/// Keep the credits released strictly inside `range`, in input order.
///
/// Credits whose date is missing or does not parse are dropped.
pub fn filter_credits<I>(credits: I, range: &DateRange) -> Vec<MovieCredit>
where
    I: IntoIterator<Item = MovieCredit>,
{
    credits
        .into_iter()
        .filter(|credit| match credit.parsed_release_date() {
            Some(date) => range.contains(date),
            None => {
                debug!(
                    movie_id = credit.id,
                    title = %credit.title,
                    release_date = ?credit.release_date,
                    "dropping credit without a usable release date"
                );
                false
            }
        })
        .collect()
}
