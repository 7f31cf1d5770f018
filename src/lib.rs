//! Weighted graph: in-memory directed and undirected graphs with reachability search.
//!
//! Graphs are stored as adjacency maps from source node to weighted targets. A
//! directed graph keeps an inverse index in lockstep for in-neighbor queries; an
//! undirected graph writes every edge in both directions. Depth-first and
//! breadth-first search run over either variant through the [`NeighborSource`]
//! capability trait.

pub mod cli;
pub mod collections;
pub mod config;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use collections::{Frontier, NodeQueue, NodeStack, VisitedSet};
pub use config::{load_config, GraphConfig, GraphKind};
pub use format::{EdgeListReader, EdgeListWriter};
pub use graph::{
    bfs, dfs, DirectedGraph, EdgeSink, GraphBuilder, NeighborSource, Neighbors, UndirectedGraph,
    WeightedAdjacency,
};
pub use types::{Edge, GraphError, GraphResult, NodeId, DEFAULT_WEIGHT};
