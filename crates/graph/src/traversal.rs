//! Breadth-first and depth-first traversals.
//!
//! Both traversals use node colors as their visit marks, so intermediate
//! progress is visible on the graph itself:
//!
//! | Traversal | unvisited | visited | tree arc (`visualize`) |
//! |-----------|-----------|---------|------------------------|
//! | BFS       | black     | blue    | blue                   |
//! | DFS       | black     | red     | green                  |
//!
//! Every node is reset to black when a whole-graph traversal returns; tree-arc
//! colors are kept.

use std::collections::{BTreeSet, VecDeque};

use tracing::{debug, trace};

use crate::color::Color;
use crate::graph::Graph;
use crate::node::NodeId;

/// Color of a node not reached yet
const UNVISITED: Color = Color::Black;

/// One level of the explicit depth-first stack: a node and the targets of its
/// outgoing arcs that have not been looked at yet.
#[derive(Debug)]
struct Frame {
    node: NodeId,
    pending: std::vec::IntoIter<NodeId>,
}

impl Frame {
    fn new(graph: &Graph, node: NodeId) -> Self {
        let pending = graph
            .get_node(node)
            .map(|n| n.successor_ids().collect::<Vec<_>>())
            .unwrap_or_default()
            .into_iter();
        Self { node, pending }
    }
}

impl Graph {
    /// Breadth-first traversal of the whole graph
    ///
    /// Starts a single-source traversal from every node still unvisited, in id
    /// order, so disconnected parts are covered too. Within one source the
    /// frontier is FIFO, giving classic layer-by-layer order.
    ///
    /// # Returns
    ///
    /// Node ids in the order they left the frontier.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcgraph_graph::{Arc, Graph, Node, NodeId};
    ///
    /// let mut graph = Graph::new();
    /// for id in [1, 2, 3, 4] {
    ///     graph.add_node(Node::new(id));
    /// }
    /// graph.add_arc(Arc::new(1, 3));
    /// graph.add_arc(Arc::new(1, 2));
    /// graph.add_arc(Arc::new(3, 4));
    ///
    /// let order: Vec<i64> = graph
    ///     .breadth_first_traversal(false)
    ///     .into_iter()
    ///     .map(NodeId::get)
    ///     .collect();
    /// assert_eq!(order, vec![1, 2, 3, 4]);
    /// ```
    pub fn breadth_first_traversal(&mut self, visualize: bool) -> Vec<NodeId> {
        self.set_node_colors(&UNVISITED);

        let roots: Vec<NodeId> = self.node_ids().collect();
        let mut order = Vec::with_capacity(roots.len());
        for root in roots {
            if self.node_has_color(root, &UNVISITED) {
                self.breadth_first_from(root, visualize, &mut order);
            }
        }

        self.set_node_colors(&UNVISITED);
        debug!(visited = order.len(), "breadth-first traversal complete");
        order
    }

    fn breadth_first_from(&mut self, source: NodeId, visualize: bool, order: &mut Vec<NodeId>) {
        self.mark_node(source, Color::Blue);
        let mut frontier = VecDeque::from([source]);
        let mut enqueued = BTreeSet::from([source]);

        while let Some(current) = frontier.pop_front() {
            let targets = self.get_successors(current).unwrap_or_default();
            for target in targets {
                if self.node_has_color(target, &UNVISITED) && enqueued.insert(target) {
                    frontier.push_back(target);
                    if visualize {
                        self.mark_arc(current, target, Color::Blue);
                    }
                }
            }

            self.mark_node(current, Color::Blue);
            order.push(current);
            trace!(node = %current, frontier = frontier.len(), "bfs visit");
        }
    }

    /// Depth-first traversal of the whole graph
    ///
    /// Pre-order: a node is marked when first reached, then its outgoing arcs
    /// are followed in arc order. Runs on an explicit stack, so chain length is
    /// not limited by the thread's stack size.
    ///
    /// # Returns
    ///
    /// Node ids in pre-order.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcgraph_graph::{Arc, Graph, Node, NodeId};
    ///
    /// let mut graph = Graph::new();
    /// for id in [1, 2, 3, 4] {
    ///     graph.add_node(Node::new(id));
    /// }
    /// graph.add_arc(Arc::new(1, 3));
    /// graph.add_arc(Arc::new(1, 2));
    /// graph.add_arc(Arc::new(2, 4));
    ///
    /// let order: Vec<i64> = graph
    ///     .depth_first_traversal(false)
    ///     .into_iter()
    ///     .map(NodeId::get)
    ///     .collect();
    /// assert_eq!(order, vec![1, 2, 4, 3]);
    /// ```
    pub fn depth_first_traversal(&mut self, visualize: bool) -> Vec<NodeId> {
        self.set_node_colors(&UNVISITED);

        let roots: Vec<NodeId> = self.node_ids().collect();
        let mut order = Vec::with_capacity(roots.len());
        for root in roots {
            if self.node_has_color(root, &UNVISITED) {
                self.depth_first_from(root, visualize, &mut order);
            }
        }

        self.set_node_colors(&UNVISITED);
        debug!(visited = order.len(), "depth-first traversal complete");
        order
    }

    fn depth_first_from(&mut self, root: NodeId, visualize: bool, order: &mut Vec<NodeId>) {
        self.mark_node(root, Color::Red);
        order.push(root);
        let mut stack = vec![Frame::new(self, root)];

        while let Some(frame) = stack.last_mut() {
            let Some(target) = frame.pending.next() else {
                stack.pop();
                continue;
            };
            let from = frame.node;
            if self.node_has_color(target, &Color::Red) {
                continue;
            }

            if visualize {
                self.mark_arc(from, target, Color::Green);
            }
            self.mark_node(target, Color::Red);
            order.push(target);
            trace!(node = %target, depth = stack.len(), "dfs visit");
            stack.push(Frame::new(self, target));
        }
    }
}
