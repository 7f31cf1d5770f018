//! Directed graph: a forward adjacency kept in lockstep with its inverse index.

use std::collections::HashSet;

use crate::types::{Edge, NodeId, DEFAULT_WEIGHT};

use super::adjacency::{Neighbors, WeightedAdjacency};
use super::{EdgeSink, NeighborSource};

/// Adjacency map representation of a directed, weighted graph.
///
/// For every edge `(s, t, w)` in the forward adjacency the inverse adjacency holds
/// `(t, s, w)`. Both maps are only ever mutated together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectedGraph {
    /// Forward edges: source -> target -> weight.
    out_adj: WeightedAdjacency,
    /// Inverse index of `out_adj`: target -> source -> weight.
    in_adj: WeightedAdjacency,
}

impl DirectedGraph {
    /// Create an empty directed graph.
    pub fn new() -> Self {
        Self {
            out_adj: WeightedAdjacency::new(),
            in_adj: WeightedAdjacency::new(),
        }
    }

    /// Create a graph pre-seeded with edges. Later duplicates overwrite earlier weights.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(&edge.source, &edge.target, edge.weight);
        }
        graph
    }

    /// Add (or re-weight) the edge `from -> to`.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) {
        self.out_adj.add_edge(from, to, weight);
        self.in_adj.add_edge(to, from, weight);
    }

    /// Add the edge `from -> to` with the default weight.
    pub fn add_unweighted_edge(&mut self, from: &str, to: &str) {
        self.add_edge(from, to, DEFAULT_WEIGHT);
    }

    /// Remove the edge `from -> to` if present.
    pub fn remove_edge(&mut self, from: &str, to: &str) {
        self.out_adj.remove_edge(from, to);
        self.in_adj.remove_edge(to, from);
    }

    /// Remove every edge into or out of a node, after which the node no longer exists.
    pub fn remove_node(&mut self, node: &str) {
        let sources: Vec<NodeId> = self
            .get_in_neighbors(node)
            .map(|nbrs| nbrs.keys().cloned().collect())
            .unwrap_or_default();
        for src in &sources {
            self.remove_edge(src, node);
        }

        let targets: Vec<NodeId> = self
            .get_out_neighbors(node)
            .map(|nbrs| nbrs.keys().cloned().collect())
            .unwrap_or_default();
        for tgt in &targets {
            self.remove_edge(node, tgt);
        }
    }

    /// All nodes that have at least one incoming or outgoing edge.
    pub fn get_nodes(&self) -> Vec<NodeId> {
        let mut seen: HashSet<&str> = self.out_adj.get_source_nodes();
        seen.extend(self.in_adj.get_source_nodes());
        seen.into_iter().map(str::to_string).collect()
    }

    /// True if the node has at least one incoming or outgoing edge.
    pub fn has_node(&self, node: &str) -> bool {
        self.out_adj.contains_source(node) || self.in_adj.contains_source(node)
    }

    /// Outgoing neighbors of a node.
    pub fn get_neighbors(&self, node: &str) -> Option<&Neighbors> {
        self.get_out_neighbors(node)
    }

    /// Targets of edges leaving a node.
    pub fn get_out_neighbors(&self, node: &str) -> Option<&Neighbors> {
        self.out_adj.get_neighbors(node)
    }

    /// Sources of edges entering a node.
    pub fn get_in_neighbors(&self, node: &str) -> Option<&Neighbors> {
        self.in_adj.get_neighbors(node)
    }

    /// Sum of the weights of edges leaving a node.
    pub fn get_out_degree(&self, node: &str) -> Option<f64> {
        self.out_adj.get_out_degree(node)
    }

    /// Sum of the weights of edges entering a node.
    pub fn get_in_degree(&self, node: &str) -> Option<f64> {
        self.in_adj.get_out_degree(node)
    }

    /// Sum of the weights of all edges touching a node.
    ///
    /// A self-loop is one edge, so its weight is counted once even though it
    /// appears in both the forward and the inverse adjacency.
    pub fn get_total_degree(&self, node: &str) -> Option<f64> {
        if !self.has_node(node) {
            return None;
        }
        let out_deg = self.get_out_degree(node).unwrap_or(0.0);
        let in_deg: f64 = self
            .get_in_neighbors(node)
            .map(|nbrs| {
                nbrs.iter()
                    .filter(|(src, _)| src.as_str() != node)
                    .map(|(_, w)| w)
                    .sum::<f64>()
            })
            .unwrap_or(0.0);
        Some(out_deg + in_deg)
    }

    /// True if the edge `from -> to` exists.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.out_adj.has_edge(from, to)
    }

    /// Weight of the edge `from -> to`.
    pub fn get_edge_weight(&self, from: &str, to: &str) -> Option<f64> {
        self.out_adj.get_edge_weight(from, to)
    }

    /// Forward adjacency.
    pub fn out_adjacency(&self) -> &WeightedAdjacency {
        &self.out_adj
    }

    /// Inverse adjacency.
    pub fn in_adjacency(&self) -> &WeightedAdjacency {
        &self.in_adj
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.get_nodes().len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.out_adj.entry_count()
    }

    /// True when the graph has no edges (and therefore no nodes).
    pub fn is_empty(&self) -> bool {
        self.out_adj.is_empty()
    }

    /// Every edge, in no particular order.
    pub fn edges(&self) -> Vec<Edge> {
        self.out_adj
            .iter()
            .map(|(src, tgt, w)| Edge::new(src, tgt, w))
            .collect()
    }
}

impl NeighborSource for DirectedGraph {
    fn has_node(&self, node: &str) -> bool {
        DirectedGraph::has_node(self, node)
    }

    fn neighbors(&self, node: &str) -> Option<&Neighbors> {
        self.get_out_neighbors(node)
    }
}

impl EdgeSink for DirectedGraph {
    fn add_edge(&mut self, source: &str, target: &str, weight: f64) {
        DirectedGraph::add_edge(self, source, target, weight);
    }
}

impl FromIterator<Edge> for DirectedGraph {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}
