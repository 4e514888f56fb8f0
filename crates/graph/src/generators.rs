//! Graph generators: random graphs, random DAGs and divisibility graphs.
//!
//! The random generators take their randomness from the caller, so a seeded
//! source reproduces the same graph.

use rand::Rng;
use rand::distributions::{Bernoulli, Distribution};
use tracing::{debug, warn};

use crate::arc::Arc;
use crate::color::Color;
use crate::config::GeneratorConfig;
use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::node::{Node, NodeId};

impl Graph {
    /// Random directed graph with `nb` nodes
    ///
    /// Node ids are drawn from `0..id_space_factor * nb` until `nb` distinct
    /// ids have been inserted. Every ordered pair of distinct nodes then gets
    /// an arc with probability `arc_probability`, so the result may be cyclic.
    ///
    /// # Errors
    ///
    /// * `GraphError::InvalidProbability` / `GraphError::InvalidConfig` if
    ///   `config` does not validate
    /// * `GraphError::IdSpaceExhausted` if `nb * max_attempts_per_node` draws
    ///   did not produce `nb` distinct ids
    ///
    /// # Examples
    ///
    /// ```
    /// use arcgraph_graph::{GeneratorConfig, Graph};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let graph = Graph::random_graph(8, &GeneratorConfig::default(), &mut rng)?;
    /// assert_eq!(graph.node_count(), 8);
    /// assert!(graph.arcs().all(|arc| !arc.id().is_loop()));
    /// # Ok::<(), arcgraph_graph::GraphError>(())
    /// ```
    pub fn random_graph<R: Rng + ?Sized>(
        nb: usize,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> GraphResult<Self> {
        let coin = coin(config)?;
        let mut graph = Self::with_random_nodes(nb, config, rng, Node::new)?;

        let ids: Vec<NodeId> = graph.node_ids().collect();
        for &from in &ids {
            for &to in &ids {
                if from != to && coin.sample(rng) {
                    graph.add_arc(Arc::new(from, to));
                }
            }
        }

        debug!(
            nodes = graph.node_count(),
            arcs = graph.arc_count(),
            "random graph generated"
        );
        Ok(graph)
    }

    /// Random directed acyclic graph with `nb` nodes
    ///
    /// Same node generation as [`Graph::random_graph`], with each node named
    /// `n<id>`. Only pairs whose target id is greater than the source id are
    /// candidates for an arc, which rules out cycles.
    ///
    /// # Errors
    ///
    /// Same as [`Graph::random_graph`].
    pub fn random_dag<R: Rng + ?Sized>(
        nb: usize,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> GraphResult<Self> {
        let coin = coin(config)?;
        let mut graph =
            Self::with_random_nodes(nb, config, rng, |id| Node::with_name(id, format!("n{id}")))?;

        let ids: Vec<NodeId> = graph.node_ids().collect();
        for (position, &from) in ids.iter().enumerate() {
            for &to in ids.iter().skip(position.saturating_add(1)) {
                if coin.sample(rng) && !graph.contains_arc(from, to) {
                    graph.add_arc(Arc::new(from, to));
                }
            }
        }

        debug!(
            nodes = graph.node_count(),
            arcs = graph.arc_count(),
            "random DAG generated"
        );
        Ok(graph)
    }

    /// Divisibility graph of `nb`
    ///
    /// Nodes are the divisors `d` of `nb` with `2 <= d <= nb`; there is an arc
    /// `j -> i` whenever `j` divides `i` and `j != i`. With `visualize`, even
    /// nodes are red and each arc is labelled with the quotient `i / j`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcgraph_graph::Graph;
    ///
    /// let mut graph = Graph::divisor_graph(12, false);
    /// assert_eq!(graph.node_count(), 5);
    /// assert_eq!(graph.arc_count(), 7);
    /// assert!(!graph.has_cycle(false));
    /// ```
    #[must_use]
    pub fn divisor_graph(nb: i64, visualize: bool) -> Self {
        let divisors: Vec<i64> = (2..=nb).filter(|d| nb.checked_rem(*d) == Some(0)).collect();

        let mut graph = Self::new();
        for &d in &divisors {
            let node = Node::new(d);
            let node = if visualize && d.checked_rem(2) == Some(0) {
                node.and_color(Color::Red)
            } else {
                node
            };
            graph.add_node(node);
        }

        for &j in &divisors {
            for &i in &divisors {
                if i == j || i.checked_rem(j) != Some(0) {
                    continue;
                }
                let arc = match i.checked_div(j) {
                    Some(quotient) if visualize => Arc::new(j, i).and_label(quotient.to_string()),
                    _ => Arc::new(j, i),
                };
                graph.add_arc(arc);
            }
        }

        debug!(
            nb,
            nodes = graph.node_count(),
            arcs = graph.arc_count(),
            "divisor graph generated"
        );
        graph
    }

    fn with_random_nodes<R, F>(
        nb: usize,
        config: &GeneratorConfig,
        rng: &mut R,
        make_node: F,
    ) -> GraphResult<Self>
    where
        R: Rng + ?Sized,
        F: Fn(i64) -> Node,
    {
        let mut graph = Self::new();
        if nb == 0 {
            return Ok(graph);
        }

        let id_space = usize::try_from(config.id_space_factor)
            .ok()
            .and_then(|factor| factor.checked_mul(nb))
            .and_then(|span| i64::try_from(span).ok())
            .ok_or_else(|| GraphError::invalid_config("id space exceeds the node id range"))?;
        let max_attempts = usize::try_from(config.max_attempts_per_node)
            .map_or(usize::MAX, |per_node| per_node.saturating_mul(nb));

        let mut attempts: usize = 0;
        while graph.node_count() < nb && attempts < max_attempts {
            attempts = attempts.saturating_add(1);
            graph.add_node(make_node(rng.gen_range(0..id_space)));
        }

        if graph.node_count() < nb {
            warn!(
                requested = nb,
                inserted = graph.node_count(),
                attempts,
                "node id draws exhausted"
            );
            return Err(GraphError::id_space_exhausted(nb, attempts));
        }

        Ok(graph)
    }
}

/// Validates `config` and builds the per-pair arc coin
fn coin(config: &GeneratorConfig) -> GraphResult<Bernoulli> {
    config.validate()?;
    let p = config.arc_probability;
    Bernoulli::new(p).map_err(|_| GraphError::InvalidProbability(p))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_random_graph_has_requested_node_count() -> GraphResult<()> {
        let mut rng = StdRng::seed_from_u64(1);
        let graph = Graph::random_graph(25, &GeneratorConfig::default(), &mut rng)?;
        assert_eq!(graph.node_count(), 25);
        assert!(graph.node_ids().all(|id| (0..250).contains(&id.get())));
        Ok(())
    }

    #[test]
    fn test_same_seed_same_graph() -> GraphResult<()> {
        let config = GeneratorConfig::default();
        let first = Graph::random_graph(12, &config, &mut StdRng::seed_from_u64(9))?;
        let second = Graph::random_graph(12, &config, &mut StdRng::seed_from_u64(9))?;
        assert_eq!(first.to_string(), second.to_string());
        Ok(())
    }

    #[test]
    fn test_probability_one_yields_complete_graph() -> GraphResult<()> {
        let config = GeneratorConfig::new().with_arc_probability(1.0);
        let mut rng = StdRng::seed_from_u64(3);
        let graph = Graph::random_graph(6, &config, &mut rng)?;
        assert_eq!(graph.arc_count(), 30);

        let dag = Graph::random_dag(6, &config, &mut rng)?;
        assert_eq!(dag.arc_count(), 15);
        Ok(())
    }

    #[test]
    fn test_probability_zero_yields_no_arcs() -> GraphResult<()> {
        let config = GeneratorConfig::new().with_arc_probability(0.0);
        let graph = Graph::random_graph(10, &config, &mut StdRng::seed_from_u64(5))?;
        assert_eq!(graph.arc_count(), 0);
        Ok(())
    }

    #[test]
    fn test_random_dag_names_nodes_and_orders_arcs() -> GraphResult<()> {
        let mut rng = StdRng::seed_from_u64(17);
        let mut dag = Graph::random_dag(20, &GeneratorConfig::default(), &mut rng)?;
        assert!(dag.nodes().all(|n| n.name() == format!("n{}", n.id())));
        assert!(dag.arcs().all(|arc| arc.from() < arc.to()));
        assert!(!dag.has_cycle(false));
        Ok(())
    }

    #[test]
    fn test_exhausted_id_space_is_an_error() {
        // factor 1 with a single attempt per node cannot fill 50 ids reliably
        let config = GeneratorConfig::new()
            .with_id_space_factor(1)
            .with_max_attempts_per_node(1);
        let result = Graph::random_graph(50, &config, &mut StdRng::seed_from_u64(0));
        assert!(matches!(
            result,
            Err(GraphError::IdSpaceExhausted { requested: 50, attempts: 50 })
        ));
    }

    #[test]
    fn test_invalid_probability_is_rejected() {
        let config = GeneratorConfig::new().with_arc_probability(2.0);
        let result = Graph::random_dag(3, &config, &mut StdRng::seed_from_u64(0));
        assert_eq!(result.err(), Some(GraphError::InvalidProbability(2.0)));
    }

    #[test]
    fn test_zero_nodes_is_empty() -> GraphResult<()> {
        let mut rng = StdRng::seed_from_u64(0);
        let graph = Graph::random_graph(0, &GeneratorConfig::default(), &mut rng)?;
        assert!(graph.is_empty());
        Ok(())
    }

    #[test]
    fn test_divisor_graph_of_twelve() {
        let graph = Graph::divisor_graph(12, false);
        let ids: Vec<i64> = graph.node_ids().map(NodeId::get).collect();
        assert_eq!(ids, vec![2, 3, 4, 6, 12]);
        let arcs: Vec<String> = graph.arcs().map(ToString::to_string).collect();
        assert_eq!(
            arcs,
            vec!["2->4", "2->6", "2->12", "3->6", "3->12", "4->12", "6->12"]
        );
        assert!(graph.arcs().all(|arc| arc.label().is_empty()));
    }

    #[test]
    fn test_divisor_graph_visualize_marks_even_nodes_and_quotients() {
        let graph = Graph::divisor_graph(12, true);
        assert_eq!(graph.get_node(4).map(Node::color), Some(&Color::Red));
        assert_eq!(graph.get_node(3).map(Node::color), Some(&Color::Black));
        assert_eq!(graph.get_arc(3, 12).map(Arc::label), Some("4"));
        assert_eq!(graph.get_arc(2, 6).map(Arc::label), Some("3"));
    }

    #[test]
    fn test_divisor_graph_of_prime_and_small_values() {
        let prime = Graph::divisor_graph(13, false);
        assert_eq!(prime.node_count(), 1);
        assert_eq!(prime.arc_count(), 0);
        assert!(Graph::divisor_graph(1, false).is_empty());
        assert!(Graph::divisor_graph(-6, false).is_empty());
    }
}
