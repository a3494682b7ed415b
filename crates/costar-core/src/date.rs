//! Calendar dates used to pick the most recent collaboration.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use costar_error::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A release date with day precision. No time of day, no timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseDate(NaiveDate);

impl ReleaseDate {
    /// Parse `YYYY-MM-DD`. Empty or malformed text yields `None`.
    ///
    /// Exactly four year digits and two digits each for month and day;
    /// no sign, padding or surrounding whitespace.
    pub fn parse(text: &str) -> Option<Self> {
        if !has_date_shape(text) {
            return None;
        }
        NaiveDate::parse_from_str(text, DATE_FORMAT).ok().map(Self)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

fn has_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl FromStr for ReleaseDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::invalid_date(s))
    }
}

impl fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Strict "after" comparison between a candidate date and the stored one.
///
/// A missing date on either side is never "after": the stored label stays.
pub fn is_after(candidate: Option<ReleaseDate>, stored: Option<ReleaseDate>) -> bool {
    match (candidate, stored) {
        (Some(candidate), Some(stored)) => candidate > stored,
        _ => false,
    }
}
