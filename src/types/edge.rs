//! The plain edge triple.

use serde::{Deserialize, Serialize};

use super::{NodeId, DEFAULT_WEIGHT};

/// A weighted connection from a source node to a target node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source node.
    pub source: NodeId,
    /// Target node.
    pub target: NodeId,
    /// Edge weight.
    pub weight: f64,
}

impl Edge {
    /// Create a new edge.
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// Create a new edge carrying the default weight.
    pub fn unweighted(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self::new(source, target, DEFAULT_WEIGHT)
    }

    /// True when source and target are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.source, self.target, self.weight)
    }
}
