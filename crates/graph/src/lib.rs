//! # Arcgraph Graph
//!
//! Directed graph model with mutual successor/predecessor adjacency.
//!
//! Nodes live in an arena keyed by [`NodeId`]. Each node owns the arcs leaving
//! it and records the identity of the arcs entering it; [`Graph`] keeps the two
//! sides consistent on every mutation. On top of the model:
//!
//! - breadth-first and depth-first traversals
//! - randomized topological sort and cycle detection
//! - random graph, random DAG and divisibility-graph generators

#![forbid(unsafe_code)]

pub mod arc;
pub mod color;
pub mod config;
pub mod error;
mod generators;
pub mod graph;
pub mod node;
mod topo;
mod traversal;

pub use arc::{Arc, ArcId};
pub use color::{Color, Shape};
pub use config::GeneratorConfig;
pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use node::{Node, NodeId};
