//! Graph vertices and their adjacency collections.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::arc::{Arc, ArcId};
use crate::color::{Color, Shape};

/// Type-safe wrapper for node identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(i64);

impl NodeId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer id
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for NodeId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vertex of the graph.
///
/// A node owns the arcs leaving it (`succ`, keyed by target id) and records the
/// identity of the arcs entering it (`pred`). Keeping `from.succ` and `to.pred`
/// consistent is the job of [`crate::Graph`]; the node performs no endpoint
/// checking of its own.
///
/// Nodes compare and order by id alone.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    name: String,
    color: Color,
    shape: Shape,
    succ: BTreeMap<NodeId, Arc>,
    pred: BTreeSet<ArcId>,
}

impl Node {
    /// Creates an unnamed black node with no arcs
    ///
    /// # Examples
    ///
    /// ```
    /// use arcgraph_graph::Node;
    ///
    /// let node = Node::new(7);
    /// assert_eq!(node.id().get(), 7);
    /// assert!(node.name().is_empty());
    /// assert_eq!(node.succ_count(), 0);
    /// ```
    #[must_use]
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self::with_name(id, String::new())
    }

    /// Creates a node carrying a display name
    #[must_use]
    pub fn with_name(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: Color::default(),
            shape: Shape::default(),
            succ: BTreeMap::new(),
            pred: BTreeSet::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub const fn color(&self) -> &Color {
        &self.color
    }

    pub fn set_color(&mut self, color: impl Into<Color>) {
        self.color = color.into();
    }

    #[must_use]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    /// Returns the node with the updated color (functional style)
    #[must_use]
    pub fn and_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// Outgoing arcs, in arc order
    pub fn succ(&self) -> impl Iterator<Item = &Arc> {
        self.succ.values()
    }

    /// Identities of incoming arcs, in arc order
    pub fn pred(&self) -> impl Iterator<Item = ArcId> {
        self.pred.iter().copied()
    }

    /// Targets of the outgoing arcs, in arc order
    pub fn successor_ids(&self) -> impl Iterator<Item = NodeId> {
        self.succ.keys().copied()
    }

    /// Sources of the incoming arcs, in arc order
    pub fn predecessor_ids(&self) -> impl Iterator<Item = NodeId> {
        self.pred.iter().map(|arc| arc.from)
    }

    #[must_use]
    pub fn succ_count(&self) -> usize {
        self.succ.len()
    }

    #[must_use]
    pub fn pred_count(&self) -> usize {
        self.pred.len()
    }

    #[must_use]
    pub fn contains_succ(&self, to: NodeId) -> bool {
        self.succ.contains_key(&to)
    }

    #[must_use]
    pub fn contains_pred(&self, from: NodeId) -> bool {
        self.pred.contains(&ArcId {
            from,
            to: self.id,
        })
    }

    /// Outgoing arc towards `to`, if any
    #[must_use]
    pub fn succ_arc(&self, to: NodeId) -> Option<&Arc> {
        self.succ.get(&to)
    }

    pub(crate) fn succ_arc_mut(&mut self, to: NodeId) -> Option<&mut Arc> {
        self.succ.get_mut(&to)
    }

    pub(crate) fn succ_arcs_mut(&mut self) -> impl Iterator<Item = &mut Arc> {
        self.succ.values_mut()
    }

    /// Stores `arc` as outgoing; false if an arc to the same target exists
    pub(crate) fn add_succ(&mut self, arc: Arc) -> bool {
        match self.succ.entry(arc.to()) {
            std::collections::btree_map::Entry::Occupied(_) => false,
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(arc);
                true
            }
        }
    }

    pub(crate) fn add_pred(&mut self, arc: ArcId) -> bool {
        self.pred.insert(arc)
    }

    pub(crate) fn remove_succ(&mut self, to: NodeId) -> Option<Arc> {
        self.succ.remove(&to)
    }

    pub(crate) fn remove_pred(&mut self, arc: ArcId) -> bool {
        self.pred.remove(&arc)
    }

    /// Drops both adjacency collections, returning what they held
    pub(crate) fn take_adjacency(&mut self) -> (Vec<Arc>, Vec<ArcId>) {
        let succ = std::mem::take(&mut self.succ).into_values().collect();
        let pred = std::mem::take(&mut self.pred).into_iter().collect();
        (succ, pred)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_compare_by_id_only() {
        let plain = Node::new(4);
        let decorated = Node::with_name(4, "four").and_color(Color::Red);
        assert_eq!(plain, decorated);
        assert!(Node::new(3) < Node::new(4));
    }

    #[test]
    fn test_add_succ_rejects_second_arc_to_same_target() {
        let mut node = Node::new(1);
        assert!(node.add_succ(Arc::new(1, 2)));
        assert!(!node.add_succ(Arc::new(1, 2).and_value(3.0)));
        assert_eq!(node.succ_count(), 1);
        assert_eq!(node.succ_arc(NodeId::new(2)).and_then(Arc::value), None);
    }

    #[test]
    fn test_succ_iterates_in_target_order() {
        let mut node = Node::new(1);
        for to in [9, 3, 5] {
            node.add_succ(Arc::new(1, to));
        }
        let targets: Vec<i64> = node.successor_ids().map(NodeId::get).collect();
        assert_eq!(targets, vec![3, 5, 9]);
    }

    #[test]
    fn test_pred_membership() {
        let mut node = Node::new(2);
        node.add_pred(ArcId::new(1, 2));
        assert!(node.contains_pred(NodeId::new(1)));
        assert!(!node.contains_pred(NodeId::new(3)));
        assert!(node.remove_pred(ArcId::new(1, 2)));
        assert!(!node.remove_pred(ArcId::new(1, 2)));
        assert_eq!(node.pred_count(), 0);
    }

    #[test]
    fn test_take_adjacency_empties_node() {
        let mut node = Node::new(2);
        node.add_succ(Arc::new(2, 3));
        node.add_pred(ArcId::new(1, 2));
        let (succ, pred) = node.take_adjacency();
        assert_eq!(succ.len(), 1);
        assert_eq!(pred, vec![ArcId::new(1, 2)]);
        assert_eq!(node.succ_count(), 0);
        assert_eq!(node.pred_count(), 0);
    }
}
