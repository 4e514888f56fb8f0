//! Driver configuration loaded from a TOML file.
//!
//! ```toml
//! seed = 42
//!
//! [generator]
//! arc_probability = 0.25
//!
//! [export]
//! graph_name = "divisors"
//! include_shape = true
//! ```

use std::path::Path;

use arcgraph_core::{Error, Result};
use arcgraph_export::ExportOptions;
use arcgraph_graph::GeneratorConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Every section is optional; missing fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Seed used when the command line does not give one.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub export: ExportOptions,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// holds an invalid generator configuration.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::file_read_failed(path, e.to_string()))?;
        let config: Self = toml::from_str(&contents)?;

        config
            .generator
            .validate()
            .map_err(|e| Error::invalid_config(e.to_string()))?;

        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Configuration from `path` when given, defaults otherwise.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_file`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }
}
