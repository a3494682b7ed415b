//! DOT format utilities for graph rendering.

use std::fmt::Write;

/// Escape special characters for DOT labels.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

fn write_attrs(output: &mut String, attrs: &[(&str, &str)]) {
    for (i, (key, value)) in attrs.iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        let _ = write!(output, "{}=\"{}\"", key, escape_label(value));
    }
}

/// Builder for an undirected DOT graph.
pub struct DotBuilder {
    output: String,
    indent: usize,
}

impl DotBuilder {
    /// Start an undirected graph with the given name.
    pub fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "graph {name} {{");
        Self { output, indent: 1 }
    }

    /// Add a graph attribute.
    pub fn attr(&mut self, key: &str, value: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{}=\"{}\";", key, escape_label(value));
        self
    }

    /// Default attributes for every node.
    pub fn node_defaults(&mut self, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        self.output.push_str("node [");
        write_attrs(&mut self.output, attrs);
        self.output.push_str("];\n");
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    pub fn node(&mut self, id: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{id}");
        if !attrs.is_empty() {
            self.output.push_str(" [");
            write_attrs(&mut self.output, attrs);
            self.output.push(']');
        }
        self.output.push_str(";\n");
        self
    }

    pub fn edge(&mut self, from: &str, to: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{from} -- {to}");
        if !attrs.is_empty() {
            self.output.push_str(" [");
            write_attrs(&mut self.output, attrs);
            self.output.push(']');
        }
        self.output.push_str(";\n");
        self
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}
