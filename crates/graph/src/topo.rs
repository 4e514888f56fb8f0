//! Topological ordering by repeated source extraction, and the cycle check
//! built on it.
//!
//! # Algorithm Overview
//!
//! Start from the nodes without incoming arcs. Repeatedly move one of them to
//! the output; every target of its outgoing arcs whose predecessors have now
//! all been output becomes a source itself. Nodes on or behind a cycle are
//! never admitted, so the output is short exactly when the graph is cyclic.
//!
//! # Complexity
//!
//! - Time: O(V * S + E log V), where S is the largest source set; a uniform
//!   pick walks the ordered set
//! - Space: O(V)

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;
use tracing::debug;

use crate::color::{Color, Shape};
use crate::graph::Graph;
use crate::node::{Node, NodeId};

impl Graph {
    /// Nodes without incoming arcs
    ///
    /// With `visualize`, each source is drawn as a box.
    pub fn sources(&mut self, visualize: bool) -> BTreeSet<NodeId> {
        let sources: BTreeSet<NodeId> = self
            .nodes()
            .filter(|node| node.pred_count() == 0)
            .map(Node::id)
            .collect();

        if visualize {
            for &id in &sources {
                if let Some(node) = self.get_node_mut(id) {
                    node.set_shape(Shape::Box);
                }
            }
        }

        sources
    }

    /// Randomized topological sort
    ///
    /// Each step picks the next node uniformly among the current sources, so
    /// repeated calls may return different valid orders.
    ///
    /// # Returns
    ///
    /// Every node exactly once, each arc's source before its target, when the
    /// graph is acyclic. On a cyclic graph, the prefix of nodes that source
    /// extraction can reach; nodes on or downstream of a cycle are missing.
    ///
    /// With `visualize`, sources become boxes and each arc that admitted its
    /// target into the source set turns red.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcgraph_graph::{Arc, Graph, Node, NodeId};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut graph = Graph::new();
    /// for id in [1, 2, 3] {
    ///     graph.add_node(Node::new(id));
    /// }
    /// graph.add_arc(Arc::new(3, 1));
    /// graph.add_arc(Arc::new(1, 2));
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let order: Vec<i64> = graph
    ///     .topological_sort(&mut rng, false)
    ///     .into_iter()
    ///     .map(NodeId::get)
    ///     .collect();
    /// assert_eq!(order, vec![3, 1, 2]);
    /// ```
    pub fn topological_sort<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        visualize: bool,
    ) -> Vec<NodeId> {
        let order = self.extract_sources(visualize, |candidates| {
            let len = candidates.len();
            if len == 0 {
                return None;
            }
            candidates.iter().nth(rng.gen_range(0..len)).copied()
        });

        debug!(
            sorted = order.len(),
            nodes = self.node_count(),
            "topological sort complete"
        );
        order
    }

    /// Whether the graph contains at least one cycle
    ///
    /// Runs source extraction and compares the number of nodes it emits with
    /// the node count. With `visualize`, every node left out of the order is
    /// colored blue; this covers the cycles and whatever only they can reach.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcgraph_graph::{Arc, Graph, Node};
    ///
    /// let mut graph = Graph::new();
    /// graph.add_node(Node::new(1));
    /// graph.add_node(Node::new(2));
    /// graph.add_arc(Arc::new(1, 2));
    /// assert!(!graph.has_cycle(false));
    ///
    /// graph.add_arc(Arc::new(2, 1));
    /// assert!(graph.has_cycle(false));
    /// ```
    pub fn has_cycle(&mut self, visualize: bool) -> bool {
        // The emitted set does not depend on which source is picked first.
        let order = self.extract_sources(false, |candidates| candidates.first().copied());
        let cyclic = order.len() != self.node_count();

        if cyclic && visualize {
            let emitted: BTreeSet<NodeId> = order.into_iter().collect();
            let stuck: Vec<NodeId> = self
                .node_ids()
                .filter(|id| !emitted.contains(id))
                .collect();
            for id in stuck {
                self.mark_node(id, Color::Blue);
            }
        }

        debug!(cyclic, "cycle check complete");
        cyclic
    }

    fn extract_sources<F>(&mut self, visualize: bool, mut pick: F) -> Vec<NodeId>
    where
        F: FnMut(&BTreeSet<NodeId>) -> Option<NodeId>,
    {
        let mut sources = self.sources(visualize);
        let mut chosen = Vec::with_capacity(self.node_count());
        // Predecessors of each node not yet emitted
        let mut remaining: BTreeMap<NodeId, usize> = self
            .nodes()
            .map(|node| (node.id(), node.pred_count()))
            .collect();

        while let Some(next) = pick(&sources) {
            if !sources.remove(&next) {
                break;
            }
            chosen.push(next);

            let targets = self.get_successors(next).unwrap_or_default();
            for target in targets {
                let admissible = remaining.get_mut(&target).is_some_and(|left| {
                    *left = left.saturating_sub(1);
                    *left == 0
                });
                if admissible {
                    sources.insert(target);
                    if visualize {
                        self.mark_arc(next, target, Color::Red);
                    }
                }
            }
        }

        chosen
    }
}
