//! # Graph
//!
//! Owner of the node arena. Every arc lives in its source node's `succ` map and
//! is named by identity in its target node's `pred` set; all mutation goes
//! through [`Graph`] so both sides always change together.

use std::collections::BTreeMap;
use std::fmt;

use itertools::Itertools;
use tracing::debug;

use crate::arc::{Arc, ArcId};
use crate::color::Color;
use crate::error::{GraphError, GraphResult};
use crate::node::{Node, NodeId};

/// A directed graph with at most one arc per ordered endpoint pair.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: BTreeMap<NodeId, Node>,
}

impl Graph {
    /// Create a new empty graph
    ///
    /// # Examples
    ///
    /// ```
    /// use arcgraph_graph::Graph;
    ///
    /// let graph = Graph::new();
    /// assert_eq!(graph.node_count(), 0);
    /// assert_eq!(graph.arc_count(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
        }
    }

    /// Add a node to the graph
    ///
    /// # Returns
    ///
    /// `true` if the node was inserted, `false` if a node with the same id is
    /// already a member (the graph is left untouched).
    ///
    /// # Examples
    ///
    /// ```
    /// use arcgraph_graph::{Graph, Node};
    ///
    /// let mut graph = Graph::new();
    /// assert!(graph.add_node(Node::new(1)));
    /// assert!(!graph.add_node(Node::with_name(1, "again")));
    /// assert_eq!(graph.node_count(), 1);
    /// ```
    pub fn add_node(&mut self, node: Node) -> bool {
        self.try_add_node(node).is_ok()
    }

    /// Add a node to the graph, reporting why it was refused
    ///
    /// Any arcs the node carried from another graph are dropped: a node enters
    /// a graph without adjacency.
    ///
    /// # Errors
    ///
    /// * `GraphError::DuplicateNode` if a node with the same id is a member
    pub fn try_add_node(&mut self, mut node: Node) -> GraphResult<()> {
        let id = node.id();
        if self.nodes.contains_key(&id) {
            return Err(GraphError::duplicate_node(id));
        }

        let _ = node.take_adjacency();
        self.nodes.insert(id, node);
        debug!(node = %id, "node added");

        Ok(())
    }

    #[must_use]
    pub fn contains_node(&self, id: impl Into<NodeId>) -> bool {
        self.nodes.contains_key(&id.into())
    }

    #[must_use]
    pub fn get_node(&self, id: impl Into<NodeId>) -> Option<&Node> {
        self.nodes.get(&id.into())
    }

    /// Mutable access to a node's display attributes
    pub fn get_node_mut(&mut self, id: impl Into<NodeId>) -> Option<&mut Node> {
        self.nodes.get_mut(&id.into())
    }

    /// Remove a node together with every arc touching it
    ///
    /// # Returns
    ///
    /// `true` if the node was a member and has been removed.
    pub fn remove_node(&mut self, id: impl Into<NodeId>) -> bool {
        self.try_remove_node(id).is_ok()
    }

    /// Remove a node, detaching each incident arc from the opposite endpoint
    ///
    /// # Returns
    ///
    /// The removed node, stripped of its adjacency.
    ///
    /// # Errors
    ///
    /// * `GraphError::NodeNotFound` if no node has this id
    pub fn try_remove_node(&mut self, id: impl Into<NodeId>) -> GraphResult<Node> {
        let id = id.into();
        let mut node = self
            .nodes
            .remove(&id)
            .ok_or_else(|| GraphError::node_not_found(id))?;

        let (outgoing, incoming) = node.take_adjacency();
        let detached = outgoing.len().saturating_add(incoming.len());

        for arc in outgoing {
            if let Some(target) = self.nodes.get_mut(&arc.to()) {
                target.remove_pred(arc.id());
            }
        }
        for arc in incoming {
            if let Some(source) = self.nodes.get_mut(&arc.from) {
                let _ = source.remove_succ(arc.to);
            }
        }

        debug!(node = %id, detached, "node removed");
        Ok(node)
    }

    /// True iff both endpoints are members and the arc `from -> to` exists
    #[must_use]
    pub fn contains_arc(&self, from: impl Into<NodeId>, to: impl Into<NodeId>) -> bool {
        self.get_arc(from, to).is_some()
    }

    #[must_use]
    pub fn get_arc(&self, from: impl Into<NodeId>, to: impl Into<NodeId>) -> Option<&Arc> {
        let to = to.into();
        if !self.nodes.contains_key(&to) {
            return None;
        }
        self.nodes.get(&from.into())?.succ_arc(to)
    }

    /// Mutable access to an arc's display attributes and value
    pub fn get_arc_mut(
        &mut self,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
    ) -> Option<&mut Arc> {
        let to = to.into();
        if !self.nodes.contains_key(&to) {
            return None;
        }
        self.nodes.get_mut(&from.into())?.succ_arc_mut(to)
    }

    /// Add an arc between two member nodes
    ///
    /// # Returns
    ///
    /// `true` if the arc was inserted into both `from.succ` and `to.pred`;
    /// `false` (with no mutation) if an endpoint is missing or the endpoint
    /// pair is already connected.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcgraph_graph::{Arc, Graph, Node};
    ///
    /// let mut graph = Graph::new();
    /// graph.add_node(Node::new(1));
    /// graph.add_node(Node::new(2));
    /// assert!(graph.add_arc(Arc::new(1, 2)));
    /// assert!(!graph.add_arc(Arc::new(1, 2)));
    /// assert!(!graph.add_arc(Arc::new(1, 3)));
    /// assert_eq!(graph.arc_count(), 1);
    /// ```
    pub fn add_arc(&mut self, arc: Arc) -> bool {
        self.try_add_arc(arc).is_ok()
    }

    /// Add an arc, reporting why it was refused
    ///
    /// # Errors
    ///
    /// * `GraphError::MissingEndpoint` if `from` or `to` is not a member
    /// * `GraphError::DuplicateArc` if an arc with the same endpoints exists
    pub fn try_add_arc(&mut self, arc: Arc) -> GraphResult<()> {
        let id = arc.id();
        if !self.nodes.contains_key(&id.to) {
            return Err(GraphError::missing_endpoint(id.to));
        }
        let source = self
            .nodes
            .get_mut(&id.from)
            .ok_or_else(|| GraphError::missing_endpoint(id.from))?;
        if !source.add_succ(arc) {
            return Err(GraphError::duplicate_arc(id.from, id.to));
        }

        if let Some(target) = self.nodes.get_mut(&id.to) {
            target.add_pred(id);
        }
        debug!(arc = %id, "arc added");

        Ok(())
    }

    /// Remove the arc `from -> to`
    ///
    /// # Returns
    ///
    /// `true` if the arc existed and was detached from both endpoints.
    pub fn remove_arc(&mut self, from: impl Into<NodeId>, to: impl Into<NodeId>) -> bool {
        self.try_remove_arc(from, to).is_ok()
    }

    /// Remove the arc `from -> to`, returning it
    ///
    /// # Errors
    ///
    /// * `GraphError::ArcNotFound` if the arc does not exist
    pub fn try_remove_arc(
        &mut self,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
    ) -> GraphResult<Arc> {
        let id = ArcId::new(from, to);
        if !self.contains_arc(id.from, id.to) {
            return Err(GraphError::arc_not_found(id.from, id.to));
        }

        let arc = self
            .nodes
            .get_mut(&id.from)
            .and_then(|source| source.remove_succ(id.to))
            .ok_or_else(|| GraphError::arc_not_found(id.from, id.to))?;
        if let Some(target) = self.nodes.get_mut(&id.to) {
            target.remove_pred(id);
        }
        debug!(arc = %id, "arc removed");

        Ok(arc)
    }

    /// Number of member nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of arcs, derived from the nodes' outgoing collections
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.nodes.values().map(Node::succ_count).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in id order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Node ids in ascending order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.nodes.keys().copied()
    }

    /// Arcs in `(from, to)` order
    pub fn arcs(&self) -> impl Iterator<Item = &Arc> {
        self.nodes.values().flat_map(Node::succ)
    }

    /// Targets of the arcs leaving `id`
    ///
    /// # Errors
    ///
    /// * `GraphError::NodeNotFound` if `id` is not a member
    pub fn get_successors(&self, id: impl Into<NodeId>) -> GraphResult<Vec<NodeId>> {
        let id = id.into();
        self.nodes
            .get(&id)
            .map(|node| node.successor_ids().collect())
            .ok_or_else(|| GraphError::node_not_found(id))
    }

    /// Sources of the arcs entering `id`
    ///
    /// # Errors
    ///
    /// * `GraphError::NodeNotFound` if `id` is not a member
    pub fn get_predecessors(&self, id: impl Into<NodeId>) -> GraphResult<Vec<NodeId>> {
        let id = id.into();
        self.nodes
            .get(&id)
            .map(|node| node.predecessor_ids().collect())
            .ok_or_else(|| GraphError::node_not_found(id))
    }

    /// Recolor every node and every arc
    pub fn set_color(&mut self, color: impl Into<Color>) {
        let color = color.into();
        for node in self.nodes.values_mut() {
            node.set_color(color.clone());
            for arc in node.succ_arcs_mut() {
                arc.set_color(color.clone());
            }
        }
    }

    pub(crate) fn set_node_colors(&mut self, color: &Color) {
        for node in self.nodes.values_mut() {
            node.set_color(color.clone());
        }
    }

    pub(crate) fn mark_node(&mut self, id: NodeId, color: Color) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.set_color(color);
        }
    }

    pub(crate) fn mark_arc(&mut self, from: NodeId, to: NodeId, color: Color) {
        if let Some(arc) = self.get_arc_mut(from, to) {
            arc.set_color(color);
        }
    }

    pub(crate) fn node_has_color(&self, id: NodeId, color: &Color) -> bool {
        self.nodes.get(&id).is_some_and(|node| node.color() == color)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "G --> {} Nodes", self.node_count())?;
        writeln!(f, "      {} Arcs", self.arc_count())?;
        writeln!(f, "Nodes = {{ {} }}", self.node_ids().join(" "))?;
        writeln!(f, "Arcs = {{ {} }}", self.arcs().join(" "))
    }
}
