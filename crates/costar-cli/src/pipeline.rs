//! Core traversal: filmography → casts → collaboration graph.

use std::collections::HashSet;
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use costar_core::{CastMember, CollaborationGraph, MovieCredit, MovieId, PersonId};
use costar_error::Result;
use costar_tmdb::MetadataSource;

use crate::CostarOptions;

/// A movie whose cast could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedMovie {
    pub id: MovieId,
    pub title: String,
    pub reason: String,
}

/// The built graph plus what happened while building it.
#[derive(Debug)]
pub struct BuildOutcome {
    pub graph: CollaborationGraph,
    pub focal: PersonId,
    pub focal_name: String,
    /// Movies retained by the date filter.
    pub movies_considered: usize,
    pub skipped: Vec<SkippedMovie>,
}

/// Build the collaboration graph of `opts.person`.
///
/// 1. Fetch and date-filter the filmography (failure aborts the run)
/// 2. Add the focal person
/// 3. For every retained movie, fetch the limited cast and fold it in;
///    a failed cast fetch skips that movie only
pub fn build_collaboration_graph<S>(source: &S, opts: &CostarOptions) -> Result<BuildOutcome>
where
    S: MetadataSource + ?Sized,
{
    let focal = opts.person;

    let fetch_start = Instant::now();
    let filmography = source
        .fetch_filmography(focal, &opts.range)
        .map_err(|e| {
            e.with_operation("pipeline::filmography")
                .with_context("person_id", focal.to_string())
        })?;
    info!(
        person = focal,
        movies = filmography.len(),
        "Filmography: {:.2}s",
        fetch_start.elapsed().as_secs_f64()
    );

    let focal_name = resolve_focal_name(source, opts);
    let mut graph = CollaborationGraph::new();
    graph.add_node(focal, focal_name.as_str());

    let exclude: HashSet<PersonId> = [focal].into_iter().collect();
    let mut skipped = Vec::new();

    let cast_start = Instant::now();
    if opts.parallel {
        // Fetch concurrently, fold in filmography order.
        let casts: Vec<Result<Vec<CastMember>>> = filmography
            .par_iter()
            .map(|movie| source.fetch_cast(movie.id, opts.cast_limit, &exclude))
            .collect();
        for (movie, cast) in filmography.iter().zip(casts) {
            fold_movie(&mut graph, focal, movie, cast, &mut skipped);
        }
    } else {
        for movie in &filmography {
            let cast = source.fetch_cast(movie.id, opts.cast_limit, &exclude);
            fold_movie(&mut graph, focal, movie, cast, &mut skipped);
        }
    }
    info!(
        parallel = opts.parallel,
        skipped = skipped.len(),
        "Cast fetching: {:.2}s",
        cast_start.elapsed().as_secs_f64()
    );

    Ok(BuildOutcome {
        graph,
        focal,
        focal_name,
        movies_considered: filmography.len(),
        skipped,
    })
}

fn resolve_focal_name<S>(source: &S, opts: &CostarOptions) -> String
where
    S: MetadataSource + ?Sized,
{
    if let Some(name) = &opts.person_name {
        return name.clone();
    }
    match source.fetch_person_name(opts.person) {
        Ok(name) if !name.is_empty() => name,
        Ok(_) => format!("person {}", opts.person),
        Err(e) => {
            warn!(person = opts.person, error = %e, "could not fetch focal person name");
            format!("person {}", opts.person)
        }
    }
}

fn fold_movie(
    graph: &mut CollaborationGraph,
    focal: PersonId,
    movie: &MovieCredit,
    cast: Result<Vec<CastMember>>,
    skipped: &mut Vec<SkippedMovie>,
) {
    match cast {
        Ok(cast) => {
            graph.record_movie(focal, &movie.title, movie.parsed_release_date(), &cast);
        }
        Err(e) => {
            warn!(movie_id = movie.id, title = %movie.title, error = %e, "skipping movie");
            skipped.push(SkippedMovie {
                id: movie.id,
                title: movie.title.clone(),
                reason: e.kind().to_string(),
            });
        }
    }
}
