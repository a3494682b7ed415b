//! The metadata source seam.

use std::collections::HashSet;

use costar_core::{CastMember, DateRange, MovieCredit, MovieId, PersonId, filter_credits, limit_cast};
use costar_error::Result;

/// Where filmographies and cast lists come from.
///
/// Implementors only perform the raw lookups; the provided `fetch_*`
/// methods apply the date filter and the billing-order cast limit so every
/// source behaves the same way.
pub trait MetadataSource: Send + Sync {
    /// Every movie credit of `person`, unfiltered, in source order.
    fn raw_filmography(&self, person: PersonId) -> Result<Vec<MovieCredit>>;

    /// The full cast of `movie` in billing order.
    fn raw_cast(&self, movie: MovieId) -> Result<Vec<CastMember>>;

    /// Display name of `person`.
    fn fetch_person_name(&self, person: PersonId) -> Result<String>;

    /// Movies of `person` released strictly inside `range`.
    fn fetch_filmography(&self, person: PersonId, range: &DateRange) -> Result<Vec<MovieCredit>> {
        let credits = self.raw_filmography(person)?;
        Ok(filter_credits(credits, range))
    }

    /// The first `limit` billed cast members of `movie` not in `exclude`.
    fn fetch_cast(
        &self,
        movie: MovieId,
        limit: usize,
        exclude: &HashSet<PersonId>,
    ) -> Result<Vec<CastMember>> {
        let cast = self.raw_cast(movie)?;
        Ok(limit_cast(cast, exclude, limit))
    }
}

impl<S: MetadataSource + ?Sized> MetadataSource for &S {
    fn raw_filmography(&self, person: PersonId) -> Result<Vec<MovieCredit>> {
        (**self).raw_filmography(person)
    }

    fn raw_cast(&self, movie: MovieId) -> Result<Vec<CastMember>> {
        (**self).raw_cast(movie)
    }

    fn fetch_person_name(&self, person: PersonId) -> Result<String> {
        (**self).fetch_person_name(person)
    }
}

impl<S: MetadataSource + ?Sized> MetadataSource for Box<S> {
    fn raw_filmography(&self, person: PersonId) -> Result<Vec<MovieCredit>> {
        (**self).raw_filmography(person)
    }

    fn raw_cast(&self, movie: MovieId) -> Result<Vec<CastMember>> {
        (**self).raw_cast(movie)
    }

    fn fetch_person_name(&self, person: PersonId) -> Result<String> {
        (**self).fetch_person_name(person)
    }
}
