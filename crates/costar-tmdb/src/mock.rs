//! In-memory metadata source for tests and offline runs.

use std::collections::{HashMap, HashSet};

use parking_lot::Mutex;

use costar_core::{CastMember, MovieCredit, MovieId, PersonId};
use costar_error::{Error, ErrorKind, Result};

use crate::source::MetadataSource;

/// Canned filmographies, casts and names, with injectable failures.
#[derive(Debug, Default)]
pub struct MockSource {
    names: HashMap<PersonId, String>,
    filmographies: HashMap<PersonId, Vec<MovieCredit>>,
    casts: HashMap<MovieId, Vec<CastMember>>,
    failing_people: HashSet<PersonId>,
    failing_movies: HashSet<MovieId>,
    /// Movie ids in the order their casts were requested.
    cast_requests: Mutex<Vec<MovieId>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_person(mut self, id: PersonId, name: impl Into<String>) -> Self {
        self.names.insert(id, name.into());
        self
    }

    pub fn with_filmography(mut self, person: PersonId, credits: Vec<MovieCredit>) -> Self {
        self.filmographies.insert(person, credits);
        self
    }

    pub fn with_cast(mut self, movie: MovieId, cast: Vec<CastMember>) -> Self {
        self.casts.insert(movie, cast);
        self
    }

    /// Make every filmography lookup for `person` fail with a network error.
    pub fn fail_filmography(mut self, person: PersonId) -> Self {
        self.failing_people.insert(person);
        self
    }

    /// Make the cast lookup for `movie` fail with a network error.
    pub fn fail_cast(mut self, movie: MovieId) -> Self {
        self.failing_movies.insert(movie);
        self
    }

    pub fn cast_requests(&self) -> Vec<MovieId> {
        self.cast_requests.lock().clone()
    }
}

impl MetadataSource for MockSource {
    fn raw_filmography(&self, person: PersonId) -> Result<Vec<MovieCredit>> {
        if self.failing_people.contains(&person) {
            return Err(Error::network("injected filmography failure")
                .with_operation("mock::filmography")
                .with_context("person_id", person.to_string()));
        }
        self.filmographies.get(&person).cloned().ok_or_else(|| {
            Error::new(ErrorKind::NotFound, "no filmography")
                .with_operation("mock::filmography")
                .with_context("person_id", person.to_string())
        })
    }

    fn raw_cast(&self, movie: MovieId) -> Result<Vec<CastMember>> {
        self.cast_requests.lock().push(movie);
        if self.failing_movies.contains(&movie) {
            return Err(Error::network("injected cast failure")
                .with_operation("mock::cast")
                .with_context("movie_id", movie.to_string()));
        }
        Ok(self.casts.get(&movie).cloned().unwrap_or_default())
    }

    fn fetch_person_name(&self, person: PersonId) -> Result<String> {
        self.names.get(&person).cloned().ok_or_else(|| {
            Error::new(ErrorKind::NotFound, "unknown person")
                .with_operation("mock::person")
                .with_context("person_id", person.to_string())
        })
    }
}
