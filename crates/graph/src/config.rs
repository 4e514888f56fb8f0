//! Configuration for the random graph generators.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Tuning knobs shared by [`crate::Graph::random_graph`] and
/// [`crate::Graph::random_dag`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Probability that a candidate arc is added.
    #[serde(default = "default_arc_probability")]
    pub arc_probability: f64,

    /// Node ids are drawn from `0..id_space_factor * nb`.
    #[serde(default = "default_id_space_factor")]
    pub id_space_factor: u32,

    /// Id draws allowed per requested node before giving up.
    #[serde(default = "default_max_attempts_per_node")]
    pub max_attempts_per_node: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorConfig {
    /// Create a generator config with defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            arc_probability: 0.4,
            id_space_factor: 10,
            max_attempts_per_node: 100,
        }
    }

    #[must_use]
    pub const fn with_arc_probability(mut self, arc_probability: f64) -> Self {
        self.arc_probability = arc_probability;
        self
    }

    #[must_use]
    pub const fn with_id_space_factor(mut self, id_space_factor: u32) -> Self {
        self.id_space_factor = id_space_factor;
        self
    }

    #[must_use]
    pub const fn with_max_attempts_per_node(mut self, max_attempts_per_node: u32) -> Self {
        self.max_attempts_per_node = max_attempts_per_node;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// * `GraphError::InvalidProbability` if `arc_probability` is not a finite
    ///   value within `[0, 1]`
    /// * `GraphError::InvalidConfig` if either factor is zero
    pub fn validate(&self) -> GraphResult<()> {
        let p = self.arc_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(GraphError::InvalidProbability(p));
        }

        if self.id_space_factor == 0 {
            return Err(GraphError::invalid_config(
                "id_space_factor must be greater than 0",
            ));
        }

        if self.max_attempts_per_node == 0 {
            return Err(GraphError::invalid_config(
                "max_attempts_per_node must be greater than 0",
            ));
        }

        Ok(())
    }
}

const fn default_arc_probability() -> f64 {
    GeneratorConfig::new().arc_probability
}

const fn default_id_space_factor() -> u32 {
    GeneratorConfig::new().id_space_factor
}

const fn default_max_attempts_per_node() -> u32 {
    GeneratorConfig::new().max_attempts_per_node
}
