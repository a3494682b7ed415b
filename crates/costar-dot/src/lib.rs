//! Graph rendering for producing DOT output and PNG images.
//!
//! - [`dot`]: DOT builder and escaping helpers
//! - [`render`]: collaboration graph to DOT
//! - [`image`]: Graphviz invocation for PNG output

mod dot;
mod image;
mod render;

pub use dot::{DotBuilder, escape_label};
pub use image::{render_png, write_dot};
pub use render::{RenderOptions, node_id, render_graph};
