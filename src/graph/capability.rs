//! Minimal capability traits that decouple search and loading from the graph variants.

use super::adjacency::Neighbors;

/// Read access needed by graph search.
pub trait NeighborSource {
    /// True if the node is present in the graph.
    fn has_node(&self, node: &str) -> bool;

    /// Outgoing neighbors of a node with their weights.
    fn neighbors(&self, node: &str) -> Option<&Neighbors>;
}

/// Anything that accepts weighted edges, such as a graph being loaded from a file.
pub trait EdgeSink {
    /// Insert or overwrite an edge.
    fn add_edge(&mut self, source: &str, target: &str, weight: f64);
}

impl<T: NeighborSource + ?Sized> NeighborSource for &T {
    fn has_node(&self, node: &str) -> bool {
        (**self).has_node(node)
    }

    fn neighbors(&self, node: &str) -> Option<&Neighbors> {
        (**self).neighbors(node)
    }
}

impl<T: EdgeSink + ?Sized> EdgeSink for &mut T {
    fn add_edge(&mut self, source: &str, target: &str, weight: f64) {
        (**self).add_edge(source, target, weight)
    }
}
