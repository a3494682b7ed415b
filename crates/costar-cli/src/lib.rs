//! costar command-line interface.
//!
pub mod config;
pub mod options;
pub mod output;
pub mod pipeline;

use std::path::PathBuf;

use costar_core::{DateRange, PersonId};
use costar_error::Result;
use costar_tmdb::MetadataSource;

pub use config::{FileConfig, ResolvedConfig, resolve};
pub use options::{OutputFormat, OutputOptions, SourceOptions, TraversalOptions};
pub use output::{Report, generate_graph_files};
pub use pipeline::{BuildOutcome, SkippedMovie, build_collaboration_graph};

use crate::config::DEFAULT_CAST_LIMIT;

/// Options for running costar.
#[derive(Debug, Clone)]
pub struct CostarOptions {
    pub person: PersonId,
    /// Overrides the name looked up from the source.
    pub person_name: Option<String>,
    pub range: DateRange,
    pub cast_limit: usize,
    pub parallel: bool,
    pub format: OutputFormat,
    pub top: Option<usize>,
    pub dot_path: Option<PathBuf>,
    pub png_path: Option<PathBuf>,
}

impl CostarOptions {
    pub fn new(person: PersonId, range: DateRange) -> Self {
        Self {
            person,
            person_name: None,
            range,
            cast_limit: DEFAULT_CAST_LIMIT,
            parallel: false,
            format: OutputFormat::Text,
            top: None,
            dot_path: None,
            png_path: None,
        }
    }
}

/// Main entry point: build the graph, write graph files, return the report.
pub fn run_main<S>(source: &S, opts: &CostarOptions) -> Result<String>
where
    S: MetadataSource + ?Sized,
{
    let outcome = build_collaboration_graph(source, opts)?;
    generate_graph_files(&outcome, opts)?;
    Report::new(&outcome, opts).render(opts.format)
}
