//! Directed arcs and their endpoint-pair identity.

use std::cmp::Ordering;
use std::fmt;

use crate::color::Color;
use crate::node::NodeId;

/// Identity of an arc: its ordered endpoint pair.
///
/// Ordering is lexicographic on `(from, to)`, which is the order every
/// adjacency collection iterates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArcId {
    pub from: NodeId,
    pub to: NodeId,
}

impl ArcId {
    #[must_use]
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// True when both endpoints are the same node
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for ArcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// A directed edge between two nodes.
///
/// Endpoints are stored as ids and resolved through the owning
/// [`crate::Graph`]. Equality and ordering only look at the endpoint pair, so
/// two arcs with the same endpoints but different attributes compare equal.
#[derive(Debug, Clone)]
pub struct Arc {
    id: ArcId,
    value: Option<f64>,
    color: Color,
    label: String,
}

impl Arc {
    /// Creates an unvalued black arc with an empty label
    ///
    /// # Examples
    ///
    /// ```
    /// use arcgraph_graph::{Arc, Color};
    ///
    /// let arc = Arc::new(1, 2);
    /// assert_eq!(arc.from().get(), 1);
    /// assert_eq!(arc.to().get(), 2);
    /// assert_eq!(arc.value(), None);
    /// assert_eq!(arc.color(), &Color::Black);
    /// assert!(arc.label().is_empty());
    /// ```
    #[must_use]
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            id: ArcId::new(from, to),
            value: None,
            color: Color::default(),
            label: String::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> ArcId {
        self.id
    }

    #[must_use]
    pub const fn from(&self) -> NodeId {
        self.id.from
    }

    #[must_use]
    pub const fn to(&self) -> NodeId {
        self.id.to
    }

    /// Returns the arc's weight, `None` while unset
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        self.value
    }

    /// Sets the weight and overwrites the label with its decimal form
    ///
    /// ```
    /// use arcgraph_graph::Arc;
    ///
    /// let mut arc = Arc::new(1, 2);
    /// arc.set_label("first");
    /// arc.set_value(2.5);
    /// assert_eq!(arc.value(), Some(2.5));
    /// assert_eq!(arc.label(), "2.5");
    /// ```
    pub fn set_value(&mut self, value: f64) {
        self.value = Some(value);
        self.label = value.to_string();
    }

    #[must_use]
    pub const fn color(&self) -> &Color {
        &self.color
    }

    pub fn set_color(&mut self, color: impl Into<Color>) {
        self.color = color.into();
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Returns the arc with the updated value (functional style)
    #[must_use]
    pub fn and_value(mut self, value: f64) -> Self {
        self.set_value(value);
        self
    }

    /// Returns the arc with the updated color (functional style)
    #[must_use]
    pub fn and_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// Returns the arc with the updated label (functional style)
    #[must_use]
    pub fn and_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl PartialEq for Arc {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Arc {}

impl PartialOrd for Arc {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Arc {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.id, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arcs_with_same_endpoints_are_equal() {
        let plain = Arc::new(3, 6);
        let decorated = Arc::new(3, 6).and_value(2.0).and_color(Color::Red);
        assert_eq!(plain, decorated);
        assert_eq!(plain.cmp(&decorated), Ordering::Equal);
    }

    #[test]
    fn test_arc_order_is_lexicographic_on_endpoints() {
        let mut arcs = vec![Arc::new(2, 1), Arc::new(1, 5), Arc::new(1, 3), Arc::new(0, 9)];
        arcs.sort();
        let ids: Vec<String> = arcs.iter().map(ToString::to_string).collect();
        assert_eq!(ids, vec!["0->9", "1->3", "1->5", "2->1"]);
    }

    #[test]
    fn test_set_value_overwrites_label() {
        let arc = Arc::new(1, 2).and_label("custom").and_value(7.0);
        assert_eq!(arc.label(), "7");
        assert_eq!(arc.value(), Some(7.0));
    }

    #[test]
    fn test_set_label_after_value_keeps_value() {
        let mut arc = Arc::new(1, 2).and_value(0.5);
        arc.set_label("half");
        assert_eq!(arc.label(), "half");
        assert_eq!(arc.value(), Some(0.5));
    }

    #[test]
    fn test_self_loop_id() {
        assert!(ArcId::new(4, 4).is_loop());
        assert!(!ArcId::new(4, 5).is_loop());
    }
}
