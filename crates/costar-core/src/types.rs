//! Records exchanged with the metadata source.

use serde::{Deserialize, Serialize};

use crate::date::ReleaseDate;

pub type PersonId = u64;
pub type MovieId = u64;

/// One entry of a person's filmography.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieCredit {
    pub id: MovieId,
    #[serde(default)]
    pub title: String,
    /// Raw `YYYY-MM-DD` text as delivered upstream; may be empty or null.
    #[serde(default)]
    pub release_date: Option<String>,
}

impl MovieCredit {
    pub fn new(id: MovieId, title: impl Into<String>, release_date: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            release_date: Some(release_date.into()),
        }
    }

    pub fn parsed_release_date(&self) -> Option<ReleaseDate> {
        self.release_date.as_deref().and_then(ReleaseDate::parse)
    }
}

/// A billed cast member of one movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: PersonId,
    #[serde(default)]
    pub name: String,
    /// Billing position as reported by the source.
    #[serde(default)]
    pub order: u32,
}

impl CastMember {
    pub fn new(id: PersonId, name: impl Into<String>, order: u32) -> Self {
        Self {
            id,
            name: name.into(),
            order,
        }
    }
}
