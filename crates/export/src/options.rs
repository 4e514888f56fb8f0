//! Rendering options for the DOT exporter.

use serde::{Deserialize, Serialize};

/// How a graph is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Name written in the `digraph <name> {` header.
    #[serde(default = "default_graph_name")]
    pub graph_name: String,

    /// Append `shape=<shape>` to node statements.
    #[serde(default)]
    pub include_shape: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            graph_name: default_graph_name(),
            include_shape: false,
        }
    }
}

impl ExportOptions {
    #[must_use]
    pub fn with_graph_name(mut self, graph_name: impl Into<String>) -> Self {
        self.graph_name = graph_name.into();
        self
    }

    #[must_use]
    pub const fn with_shapes(mut self, include_shape: bool) -> Self {
        self.include_shape = include_shape;
        self
    }
}

fn default_graph_name() -> String {
    "G".to_string()
}
