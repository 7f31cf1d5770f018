//! Set of visited nodes.

use std::collections::HashSet;
use std::sync::Mutex;

use crate::types::NodeId;

use super::lock;

/// An unordered set of nodes.
#[derive(Debug, Default)]
pub struct VisitedSet {
    set: Mutex<HashSet<NodeId>>,
}

impl VisitedSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            set: Mutex::new(HashSet::new()),
        }
    }

    /// Add a node. Returns false if it was already present.
    pub fn add(&self, node: NodeId) -> bool {
        lock(&self.set).insert(node)
    }

    /// True if the node has been added.
    pub fn contains(&self, node: &str) -> bool {
        lock(&self.set).contains(node)
    }

    /// Number of distinct nodes.
    pub fn len(&self) -> usize {
        lock(&self.set).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all members in no particular order.
    pub fn to_vec(&self) -> Vec<NodeId> {
        lock(&self.set).iter().cloned().collect()
    }

    /// Consume the set, returning its members in no particular order.
    pub fn into_vec(self) -> Vec<NodeId> {
        self.set
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .into_iter()
            .collect()
    }
}
