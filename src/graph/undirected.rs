//! Undirected graph stored as one adjacency map written symmetrically.

use crate::types::{Edge, NodeId, DEFAULT_WEIGHT};

use super::adjacency::{Neighbors, WeightedAdjacency};
use super::{EdgeSink, NeighborSource};

/// Symmetric adjacency map representation of an undirected, weighted graph.
///
/// Every edge `(a, b, w)` is stored as both `a -> b` and `b -> a` with the same
/// weight. A self-loop is a single entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UndirectedGraph {
    adj: WeightedAdjacency,
}

impl UndirectedGraph {
    /// Create an empty undirected graph.
    pub fn new() -> Self {
        Self {
            adj: WeightedAdjacency::new(),
        }
    }

    /// Create a graph pre-seeded with edges.
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

    /// Add (or re-weight) the edge between `a` and `b`.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64) {
        self.adj.add_edge(a, b, weight);
        self.adj.add_edge(b, a, weight);
    }

    /// Add the edge between `a` and `b` with the default weight.
    pub fn add_unweighted_edge(&mut self, a: &str, b: &str) {
        self.add_edge(a, b, DEFAULT_WEIGHT);
    }

    /// Remove the edge between `a` and `b` if present.
    pub fn remove_edge(&mut self, a: &str, b: &str) {
        self.adj.remove_edge(a, b);
        self.adj.remove_edge(b, a);
    }

    /// Remove every edge incident to a node, after which the node no longer exists.
    pub fn remove_node(&mut self, node: &str) {
        let nbrs: Vec<NodeId> = self
            .get_neighbors(node)
            .map(|nbrs| nbrs.keys().cloned().collect())
            .unwrap_or_default();
        for nbr in &nbrs {
            self.remove_edge(node, nbr);
        }
    }

    /// All nodes with at least one incident edge.
    pub fn get_nodes(&self) -> Vec<NodeId> {
        self.adj
            .get_source_nodes()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// True if the node has at least one incident edge.
    pub fn has_node(&self, node: &str) -> bool {
        self.adj.contains_source(node)
    }

    /// Nodes adjacent to a node.
    pub fn get_neighbors(&self, node: &str) -> Option<&Neighbors> {
        self.adj.get_neighbors(node)
    }

    /// Sum of the weights of the edges incident to a node. A self-loop counts once.
    pub fn get_degree(&self, node: &str) -> Option<f64> {
        self.adj.get_out_degree(node)
    }

    /// True if `a` and `b` are connected.
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.adj.has_edge(a, b)
    }

    /// Weight of the edge between `a` and `b`.
    pub fn get_edge_weight(&self, a: &str, b: &str) -> Option<f64> {
        self.adj.get_edge_weight(a, b)
    }

    /// The underlying symmetric adjacency.
    pub fn adjacency(&self) -> &WeightedAdjacency {
        &self.adj
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adj.source_count()
    }

    /// Number of edges, each unordered pair counted once.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().filter(|(a, b, _)| a <= b).count()
    }

    /// True when the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Every edge once, with `source <= target`.
    pub fn edges(&self) -> Vec<Edge> {
        self.adj
            .iter()
            .filter(|(a, b, _)| a <= b)
            .map(|(a, b, w)| Edge::new(a, b, w))
            .collect()
    }
}

impl NeighborSource for UndirectedGraph {
    fn has_node(&self, node: &str) -> bool {
        UndirectedGraph::has_node(self, node)
    }

    fn neighbors(&self, node: &str) -> Option<&Neighbors> {
        self.get_neighbors(node)
    }
}

impl EdgeSink for UndirectedGraph {
    fn add_edge(&mut self, source: &str, target: &str, weight: f64) {
        UndirectedGraph::add_edge(self, source, target, weight);
    }
}

impl FromIterator<Edge> for UndirectedGraph {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}
