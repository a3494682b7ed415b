//! Report generation (text / JSON) and graph files (DOT / PNG).

use std::collections::BTreeSet;
use std::fmt::Write;
use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;
use tracing::{info, warn};

use costar_core::{DateRange, GraphStats, PersonId, RankedPerson, top_collaborators};
use costar_dot::{RenderOptions, render_graph, render_png, write_dot};
use costar_error::{Error, ErrorKind, Result};

use crate::CostarOptions;
use crate::options::OutputFormat;
use crate::pipeline::{BuildOutcome, SkippedMovie};

/// Everything the run reports, serializable as-is for `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub person: PersonId,
    pub name: String,
    pub range: DateRange,
    pub movies_considered: usize,
    pub movies_skipped: usize,
    pub skipped: Vec<SkippedMovie>,
    pub stats: GraphStats,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub top_collaborators: Vec<RankedPerson>,
}

impl Report {
    pub fn new(outcome: &BuildOutcome, opts: &CostarOptions) -> Self {
        Self {
            person: outcome.focal,
            name: outcome.focal_name.clone(),
            range: opts.range,
            movies_considered: outcome.movies_considered,
            movies_skipped: outcome.skipped.len(),
            skipped: outcome.skipped.clone(),
            stats: GraphStats::collect(&outcome.graph),
            top_collaborators: opts
                .top
                .map(|k| top_collaborators(&outcome.graph, k))
                .unwrap_or_default(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => serde_json::to_string_pretty(self)
                .map(|json| json + "\n")
                .map_err(|e| {
                    Error::new(ErrorKind::SerializationFailed, "report to JSON")
                        .with_operation("output::render")
                        .set_source(e)
                }),
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Collaboration Graph for {} ===", self.name);
        let _ = writeln!(
            out,
            "Movies: {} considered, {} skipped ({} to {})",
            self.movies_considered, self.movies_skipped, self.range.start, self.range.end
        );
        let _ = writeln!(out, "Total Nodes: {}", self.stats.total_nodes);
        let _ = writeln!(out, "Total Edges: {}", self.stats.total_edges);
        let _ = writeln!(out, "Max Degree Nodes (degree {}):", self.stats.max_degree);
        for (id, name) in &self.stats.max_degree_nodes {
            let _ = writeln!(out, "  {} (ID {})", name, id);
        }

        if !self.top_collaborators.is_empty() {
            let _ = writeln!(out, "Top Collaborators:");
            for person in &self.top_collaborators {
                let _ = writeln!(
                    out,
                    "  {:>3}  {} (ID {})",
                    person.degree, person.name, person.id
                );
            }
        }

        if !self.skipped.is_empty() {
            let _ = writeln!(out, "Skipped Movies:");
            for movie in &self.skipped {
                let _ = writeln!(out, "  {} (ID {}): {}", movie.title, movie.id, movie.reason);
            }
        }
        out
    }
}

/// Write the DOT file and, if asked, the PNG next to it.
///
/// A PNG failure is logged and tolerated; the DOT file is still there.
/// Returns the DOT path that was written, if any.
pub fn generate_graph_files(outcome: &BuildOutcome, opts: &CostarOptions) -> Result<Option<PathBuf>> {
    let dot_path = match (&opts.dot_path, &opts.png_path) {
        (Some(dot), _) => dot.clone(),
        (None, Some(png)) => png.with_extension("dot"),
        (None, None) => return Ok(None),
    };

    let render_start = Instant::now();
    let mut highlight: BTreeSet<PersonId> =
        outcome.graph.max_degree_nodes().into_keys().collect();
    highlight.insert(outcome.focal);
    let options = RenderOptions {
        highlight,
        ..RenderOptions::default()
    };
    let dot = render_graph(&outcome.graph, &options);
    write_dot(&dot_path, &dot)?;
    info!(
        "Graph rendering: {:.2}s",
        render_start.elapsed().as_secs_f64()
    );

    if let Some(png_path) = &opts.png_path {
        if let Err(e) = render_png(&dot_path, png_path) {
            warn!(error = %e, "could not generate PNG");
        }
    }

    Ok(Some(dot_path))
}
