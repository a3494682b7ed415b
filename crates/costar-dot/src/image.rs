//! Writing DOT files and turning them into PNG images with Graphviz.

use std::fs;
use std::path::Path;
use std::process::Command;

use tracing::info;

use costar_error::{Error, Result};

/// Write a rendered DOT document to `path`.
pub fn write_dot(path: &Path, dot: &str) -> Result<()> {
    fs::write(path, dot).map_err(|e| {
        Error::from(e)
            .with_operation("dot::write_dot")
            .with_context("path", path.display().to_string())
    })?;
    info!(path = %path.display(), bytes = dot.len(), "DOT written");
    Ok(())
}

/// Run `dot -Tpng <dot_path> -o <png_path>`.
///
/// Fails with `RenderFailed` when Graphviz is missing or exits non-zero.
pub fn render_png(dot_path: &Path, png_path: &Path) -> Result<()> {
    let output = Command::new("dot")
        .arg("-Tpng")
        .arg(dot_path)
        .arg("-o")
        .arg(png_path)
        .output()
        .map_err(|e| {
            Error::render_failed("could not run graphviz `dot`")
                .with_operation("dot::render_png")
                .set_source(e)
        })?;

    if !output.status.success() {
        return Err(Error::render_failed(String::from_utf8_lossy(&output.stderr).trim().to_string())
            .with_operation("dot::render_png")
            .with_context("exit", output.status.to_string())
            .with_context("input", dot_path.display().to_string()));
    }

    info!(path = %png_path.display(), "PNG rendered");
    Ok(())
}
