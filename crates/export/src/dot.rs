//! Graphviz DOT rendering.
//!
//! ```text
//! digraph G {
//!   2 [color=red]
//!   3 [label=n3,color=black]
//!   2->3 [label=1.5,color=blue]
//! }
//! ```
//!
//! Node statements are `id [label=<token>,color=<token>]` and arc statements
//! `from->to [label=<token>,color=<token>]`; the label clause is left out when
//! the label is empty.

use std::fs;
use std::io::Write;
use std::path::Path;

use arcgraph_graph::{Arc, Graph, Node};
use tracing::info;

use crate::error::{ExportError, ExportResult};
use crate::options::ExportOptions;

/// Renders graphs as DOT text.
#[derive(Debug, Clone, Default)]
pub struct DotExporter {
    options: ExportOptions,
}

impl DotExporter {
    #[must_use]
    pub const fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Render `graph` to a string
    ///
    /// Nodes come first in id order, then arcs in `(from, to)` order.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcgraph_export::DotExporter;
    /// use arcgraph_graph::{Arc, Graph, Node};
    ///
    /// let mut graph = Graph::new();
    /// graph.add_node(Node::new(1));
    /// graph.add_node(Node::new(2));
    /// graph.add_arc(Arc::new(1, 2).and_value(4.0));
    ///
    /// let dot = DotExporter::default().render(&graph);
    /// assert_eq!(
    ///     dot,
    ///     "digraph G {\n  1 [color=black]\n  2 [color=black]\n  1->2 [label=4,color=black]\n}\n"
    /// );
    /// ```
    #[must_use]
    pub fn render(&self, graph: &Graph) -> String {
        let mut out = format!("digraph {} {{\n", token(&self.options.graph_name));
        for node in graph.nodes() {
            out.push_str("  ");
            out.push_str(&self.node_statement(node));
            out.push('\n');
        }
        for arc in graph.arcs() {
            out.push_str("  ");
            out.push_str(&arc_statement(arc));
            out.push('\n');
        }
        out.push_str("}\n");
        out
    }

    /// Write the rendered graph to any writer
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Io` if the writer fails.
    pub fn write_to<W: Write>(&self, graph: &Graph, writer: &mut W) -> ExportResult<()> {
        writer.write_all(self.render(graph).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Write the rendered graph to `path`, replacing any existing file
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Write` naming the path if the file cannot be
    /// written.
    pub fn export_to_file(&self, graph: &Graph, path: impl AsRef<Path>) -> ExportResult<()> {
        let path = path.as_ref();
        fs::write(path, self.render(graph)).map_err(|e| ExportError::write(path, e))?;

        info!(
            path = %path.display(),
            nodes = graph.node_count(),
            arcs = graph.arc_count(),
            "graph exported"
        );
        Ok(())
    }

    fn node_statement(&self, node: &Node) -> String {
        let mut attrs = attributes(node.name(), node.color().as_str());
        if self.options.include_shape {
            attrs.push_str(",shape=");
            attrs.push_str(&token(node.shape().as_str()));
        }
        format!("{} [{attrs}]", node.id())
    }
}

fn arc_statement(arc: &Arc) -> String {
    format!(
        "{}->{} [{}]",
        arc.from(),
        arc.to(),
        attributes(arc.label(), arc.color().as_str())
    )
}

fn attributes(label: &str, color: &str) -> String {
    if label.is_empty() {
        format!("color={}", token(color))
    } else {
        format!("label={},color={}", token(label), token(color))
    }
}

/// Words the DOT grammar reserves, matched without regard to case
const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// Leaves DOT identifiers and numerals bare, quotes anything else
fn token(raw: &str) -> String {
    if (is_identifier(raw) && !is_keyword(raw)) || is_numeral(raw) {
        return raw.to_string();
    }

    let mut quoted = String::with_capacity(raw.len().saturating_add(2));
    quoted.push('"');
    for c in raw.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

fn is_identifier(raw: &str) -> bool {
    let mut chars = raw.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_keyword(raw: &str) -> bool {
    KEYWORDS.iter().any(|keyword| keyword.eq_ignore_ascii_case(raw))
}

fn is_numeral(raw: &str) -> bool {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    !(whole.is_empty() && fraction.is_empty())
        && all_digits(whole)
        && all_digits(fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcgraph_graph::{Color, Shape};

    #[test]
    fn test_plain_tokens_stay_bare() {
        for raw in ["black", "n42", "_x1", "7", "-3", "2.5", ".5", "4."] {
            assert_eq!(token(raw), raw);
        }
    }

    #[test]
    fn test_other_tokens_are_quoted() {
        assert_eq!(token("#ff0000"), "\"#ff0000\"");
        assert_eq!(token("two words"), "\"two words\"");
        assert_eq!(token("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(token(""), "\"\"");
        assert_eq!(token("."), "\".\"");
        assert_eq!(token("1.2.3"), "\"1.2.3\"");
        assert_eq!(token("node"), "\"node\"");
        assert_eq!(token("Graph"), "\"Graph\"");
        assert_eq!(token("STRICT"), "\"STRICT\"");
        assert_eq!(token("nodes"), "nodes");
    }

    #[test]
    fn test_label_clause_omitted_when_empty() {
        assert_eq!(attributes("", "red"), "color=red");
        assert_eq!(attributes("n1", "red"), "label=n1,color=red");
    }

    #[test]
    fn test_shapes_only_when_requested() {
        let node = Node::with_name(3, "n3").and_color(Color::Green);
        let plain = DotExporter::default();
        assert_eq!(plain.node_statement(&node), "3 [label=n3,color=green]");

        let mut boxed = node;
        boxed.set_shape(Shape::Box);
        let shaped = DotExporter::new(ExportOptions::default().with_shapes(true));
        assert_eq!(shaped.node_statement(&boxed), "3 [label=n3,color=green,shape=box]");
    }

    #[test]
    fn test_empty_graph_renders_header_and_footer() {
        let exporter = DotExporter::new(ExportOptions::default().with_graph_name("empty"));
        let dot = exporter.render(&Graph::new());
        assert_eq!(dot, "digraph empty {\n}\n");
    }
}
