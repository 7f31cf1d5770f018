//! Configuration loading from a TOML file with CLI overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{GraphError, GraphResult, DEFAULT_WEIGHT};

/// Which graph variant an edge list is loaded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// Edges are one-way.
    #[default]
    Directed,
    /// Edges connect both endpoints symmetrically.
    Undirected,
}

impl GraphKind {
    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }
}

/// Settings controlling how edge lists are interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Graph variant to build.
    #[serde(default)]
    pub kind: GraphKind,
    /// Weight for edge-list lines without a weight field.
    #[serde(default = "default_weight")]
    pub default_weight: f64,
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            kind: GraphKind::default(),
            default_weight: default_weight(),
            log_level: default_log_level(),
        }
    }
}

impl GraphConfig {
    /// Apply command-line overrides on top of file or default values.
    pub fn with_overrides(mut self, undirected: bool, default_weight: Option<f64>) -> Self {
        if undirected {
            self.kind = GraphKind::Undirected;
        }
        if let Some(w) = default_weight {
            self.default_weight = w;
        }
        self
    }
}

/// Load configuration from a TOML file. Missing keys take their defaults.
pub fn load_config(path: &Path) -> GraphResult<GraphConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        GraphError::Config(format!("Failed to read config file {}: {e}", path.display()))
    })?;

    toml::from_str(&content).map_err(|e| GraphError::Config(format!("Failed to parse config: {e}")))
}
