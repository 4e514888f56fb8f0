//! # Arcgraph Export
//!
//! Renders a finished [`arcgraph_graph::Graph`] as Graphviz DOT, to a string,
//! any writer, or a file. Rendering only reads the graph.

#![forbid(unsafe_code)]

pub mod dot;
pub mod error;
pub mod options;

pub use dot::DotExporter;
pub use error::{ExportError, ExportResult};
pub use options::ExportOptions;
