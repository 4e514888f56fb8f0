//! Graph-specific error types

use thiserror::Error;

use crate::node::NodeId;

/// Graph-specific error types
///
/// The boolean/`Option` operations on [`crate::Graph`] never surface these;
/// they are returned by the `try_*` variants and by the generators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("Node already exists: {0}")]
    DuplicateNode(NodeId),

    #[error("Arc already exists: {0}->{1}")]
    DuplicateArc(NodeId, NodeId),

    #[error("Arc endpoint is not a member of the graph: {0}")]
    MissingEndpoint(NodeId),

    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Arc not found: {0}->{1}")]
    ArcNotFound(NodeId, NodeId),

    #[error("Invalid arc probability: {0} (expected a value within [0, 1])")]
    InvalidProbability(f64),

    #[error("Invalid generator configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Could not draw {requested} distinct node ids after {attempts} attempts")]
    IdSpaceExhausted { requested: usize, attempts: usize },
}

impl GraphError {
    pub fn duplicate_node(id: impl Into<NodeId>) -> Self {
        Self::DuplicateNode(id.into())
    }

    pub fn duplicate_arc(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self::DuplicateArc(from.into(), to.into())
    }

    pub fn missing_endpoint(id: impl Into<NodeId>) -> Self {
        Self::MissingEndpoint(id.into())
    }

    pub fn node_not_found(id: impl Into<NodeId>) -> Self {
        Self::NodeNotFound(id.into())
    }

    pub fn arc_not_found(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self::ArcNotFound(from.into(), to.into())
    }

    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    pub const fn id_space_exhausted(requested: usize, attempts: usize) -> Self {
        Self::IdSpaceExhausted {
            requested,
            attempts,
        }
    }
}

/// Result type for graph operations
pub type GraphResult<T> = std::result::Result<T, GraphError>;
