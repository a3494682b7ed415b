use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use costar::config::API_KEY_ENV;
use costar::{
    CostarOptions, FileConfig, OutputOptions, ResolvedConfig, SourceOptions, TraversalOptions,
    resolve, run_main,
};
use costar_core::PersonId;
use costar_tmdb::TmdbClient;

#[derive(Parser, Debug)]
#[command(
    name = "costar",
    about = "costar: who does this actor keep working with?",
    version
)]
pub struct Cli {
    /// TMDB person id of the focal actor (e.g. 2975)
    #[arg(short = 'p', long = "person", value_name = "ID")]
    person: PersonId,

    /// Display name of the focal actor (looked up when omitted)
    #[arg(long, value_name = "NAME")]
    name: Option<String>,

    /// TOML configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<String>,

    #[command(flatten)]
    traversal: TraversalOptions,

    #[command(flatten)]
    source: SourceOptions,

    #[command(flatten)]
    output: OutputOptions,
}

impl Cli {
    fn options(&self, resolved: &ResolvedConfig) -> CostarOptions {
        CostarOptions {
            person: self.person,
            person_name: self.name.clone(),
            range: resolved.range,
            cast_limit: resolved.cast_limit,
            parallel: resolved.parallel,
            format: self.output.format,
            top: self.output.top,
            dot_path: self.output.dot.clone(),
            png_path: self.output.png.clone(),
        }
    }
}

/// Write the report to `path`, or to stdout when no path is given.
fn emit_report(report: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, report)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => print!("{report}"),
    }
    Ok(())
}

pub fn run(args: Cli) -> anyhow::Result<()> {
    let total_start = Instant::now();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let file = match &args.config {
        Some(path) => FileConfig::from_path(path)?,
        None => FileConfig::default(),
    };
    let resolved = resolve(
        file,
        &args.traversal,
        &args.source,
        std::env::var(API_KEY_ENV).ok(),
    )?;

    let opts = args.options(&resolved);

    let client = TmdbClient::new(resolved.tmdb)?;

    let report = match run_main(&client, &opts) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, "execution failed");
            return Err(e.into());
        }
    };

    emit_report(&report, args.output.output.as_deref())?;

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    Ok(())
}

pub fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    run(args)
}
