//! DOT export behavior against real graphs and files.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::io::{self, Write};

use arcgraph_export::{DotExporter, ExportError, ExportOptions};
use arcgraph_graph::{Arc, Color, Graph, Node};

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Writer that refuses every write
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn given_divisor_graph_when_rendered_then_every_arc_has_a_statement() {
    // GIVEN: The visualized divisibility graph of 12
    let graph = Graph::divisor_graph(12, true);

    // WHEN
    let dot = DotExporter::default().render(&graph);

    // THEN: Header, five nodes, seven labelled arcs, footer
    let lines: Vec<&str> = dot.lines().collect();
    assert_eq!(lines.first(), Some(&"digraph G {"));
    assert_eq!(lines.last(), Some(&"}"));
    assert_eq!(lines.len(), 14);
    assert!(lines.contains(&"  4 [color=red]"));
    assert!(lines.contains(&"  3 [color=black]"));
    assert!(lines.contains(&"  2->12 [label=6,color=black]"));
    assert!(lines.contains(&"  6->12 [label=2,color=black]"));
}

#[test]
fn given_free_form_colors_and_labels_when_rendered_then_quoted() {
    // GIVEN
    let mut graph = Graph::new();
    let _ = graph.add_node(Node::with_name(1, "start node").and_color("#00ff00"));
    let _ = graph.add_node(Node::new(2));
    let _ = graph.add_arc(Arc::new(1, 2).and_label("a\"b").and_color(Color::Blue));

    // WHEN
    let dot = DotExporter::default().render(&graph);

    // THEN
    assert!(dot.contains("  1 [label=\"start node\",color=\"#00ff00\"]\n"));
    assert!(dot.contains("  1->2 [label=\"a\\\"b\",color=blue]\n"));
}

#[test]
fn given_dot_keywords_as_names_when_rendered_then_quoted() {
    // GIVEN: Names, a label and a graph name that DOT reserves
    let mut graph = Graph::new();
    let _ = graph.add_node(Node::with_name(1, "node"));
    let _ = graph.add_node(Node::with_name(2, "Edge"));
    let _ = graph.add_arc(Arc::new(1, 2).and_label("subgraph"));
    let exporter = DotExporter::new(ExportOptions::default().with_graph_name("graph"));

    // WHEN
    let dot = exporter.render(&graph);

    // THEN
    assert_eq!(
        dot,
        "digraph \"graph\" {\n  1 [label=\"node\",color=black]\n  2 [label=\"Edge\",color=black]\n  1->2 [label=\"subgraph\",color=black]\n}\n"
    );
}

#[test]
fn given_file_path_when_exported_then_file_holds_rendering() -> TestResult {
    // GIVEN
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("graph.dot");
    let graph = Graph::divisor_graph(6, false);
    let exporter = DotExporter::new(ExportOptions::default().with_graph_name("six"));

    // WHEN
    exporter.export_to_file(&graph, &path)?;

    // THEN
    let written = std::fs::read_to_string(&path)?;
    assert_eq!(written, exporter.render(&graph));
    assert!(written.starts_with("digraph six {\n"));
    Ok(())
}

#[test]
fn given_missing_directory_when_exported_then_error_names_path() -> TestResult {
    // GIVEN
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("missing").join("graph.dot");

    // WHEN
    let result = DotExporter::default().export_to_file(&Graph::new(), &path);

    // THEN
    match result {
        Err(ExportError::Write { path: reported, .. }) => assert_eq!(reported, path),
        other => return Err(format!("expected a write error, got {other:?}").into()),
    }
    Ok(())
}

#[test]
fn given_failing_writer_when_written_then_io_error_returned() {
    let result = DotExporter::default().write_to(&Graph::divisor_graph(4, false), &mut BrokenPipe);
    assert!(matches!(result, Err(ExportError::Io(_))));
}

#[test]
fn given_buffer_when_written_then_matches_render() -> TestResult {
    let graph = Graph::divisor_graph(8, true);
    let exporter = DotExporter::default();
    let mut buffer = Vec::new();

    exporter.write_to(&graph, &mut buffer)?;

    assert_eq!(String::from_utf8(buffer)?, exporter.render(&graph));
    Ok(())
}

#[test]
fn given_toml_options_when_parsed_then_missing_fields_default() -> TestResult {
    let options: ExportOptions = toml::from_str("include_shape = true")?;
    assert_eq!(options.graph_name, "G");
    assert!(options.include_shape);
    Ok(())
}
