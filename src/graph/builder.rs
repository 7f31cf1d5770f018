//! Fluent API for building graphs of either variant.

use crate::types::{Edge, DEFAULT_WEIGHT};

use super::{DirectedGraph, EdgeSink, UndirectedGraph};

/// Fluent builder collecting edges before choosing a graph variant.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Add a weighted edge.
    pub fn link(&mut self, source: &str, target: &str, weight: f64) -> &mut Self {
        self.edges.push(Edge::new(source, target, weight));
        self
    }

    /// Add an edge with the default weight.
    pub fn link_unweighted(&mut self, source: &str, target: &str) -> &mut Self {
        self.link(source, target, DEFAULT_WEIGHT)
    }

    /// Edges collected so far, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Build a directed graph from the collected edges.
    pub fn build_directed(&self) -> DirectedGraph {
        DirectedGraph::from_edges(self.edges.iter().cloned())
    }

    /// Build an undirected graph from the collected edges.
    pub fn build_undirected(&self) -> UndirectedGraph {
        UndirectedGraph::from_edges(self.edges.iter().cloned())
    }
}

impl EdgeSink for GraphBuilder {
    fn add_edge(&mut self, source: &str, target: &str, weight: f64) {
        self.link(source, target, weight);
    }
}
