//! Weighted adjacency map, the storage primitive shared by both graph variants.

use std::collections::{HashMap, HashSet};

use crate::types::NodeId;

use super::NeighborSource;

/// Neighbor map of a single node: target -> weight.
pub type Neighbors = HashMap<NodeId, f64>;

/// Mapping from source node to its weighted targets.
///
/// A source key is present only while it has at least one outgoing edge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedAdjacency {
    map: HashMap<NodeId, Neighbors>,
}

impl WeightedAdjacency {
    /// Create an empty adjacency.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Insert an edge, overwriting the weight of an existing one.
    pub fn add_edge(&mut self, source: &str, target: &str, weight: f64) {
        if let Some(nbrs) = self.map.get_mut(source) {
            nbrs.insert(target.to_string(), weight);
            return;
        }
        let mut nbrs = Neighbors::new();
        nbrs.insert(target.to_string(), weight);
        self.map.insert(source.to_string(), nbrs);
    }

    /// Remove an edge. Removing the last edge of a source drops the source.
    /// Missing sources or targets are ignored.
    pub fn remove_edge(&mut self, source: &str, target: &str) {
        let Some(nbrs) = self.map.get_mut(source) else {
            return;
        };
        nbrs.remove(target);
        if nbrs.is_empty() {
            self.map.remove(source);
        }
    }

    /// Targets and weights of a source node.
    pub fn get_neighbors(&self, node: &str) -> Option<&Neighbors> {
        self.map.get(node)
    }

    /// True if an edge exists from source to target.
    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.get_edge_weight(source, target).is_some()
    }

    /// Weight of the edge from source to target.
    pub fn get_edge_weight(&self, source: &str, target: &str) -> Option<f64> {
        self.map.get(source)?.get(target).copied()
    }

    /// Sum of the weights of all edges leaving a node.
    pub fn get_out_degree(&self, node: &str) -> Option<f64> {
        self.get_neighbors(node).map(|nbrs| nbrs.values().sum())
    }

    /// All nodes with at least one outgoing edge.
    pub fn get_source_nodes(&self) -> HashSet<&str> {
        self.map.keys().map(String::as_str).collect()
    }

    /// True if the node has at least one outgoing edge.
    pub fn contains_source(&self, node: &str) -> bool {
        self.map.contains_key(node)
    }

    /// Number of source nodes.
    pub fn source_count(&self) -> usize {
        self.map.len()
    }

    /// Number of (source, target) entries.
    pub fn entry_count(&self) -> usize {
        self.map.values().map(HashMap::len).sum()
    }

    /// True when no edges are stored.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over every (source, target, weight) entry.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, f64)> + '_ {
        self.map.iter().flat_map(|(src, nbrs)| {
            nbrs.iter()
                .map(move |(tgt, &w)| (src.as_str(), tgt.as_str(), w))
        })
    }
}

impl NeighborSource for WeightedAdjacency {
    fn has_node(&self, node: &str) -> bool {
        self.contains_source(node)
    }

    fn neighbors(&self, node: &str) -> Option<&Neighbors> {
        self.get_neighbors(node)
    }
}
