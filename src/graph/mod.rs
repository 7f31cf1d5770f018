//! In-memory graph storage and search: the core data structures.

pub mod adjacency;
pub mod builder;
pub mod capability;
pub mod directed;
pub mod traversal;
pub mod undirected;

pub use adjacency::{Neighbors, WeightedAdjacency};
pub use builder::GraphBuilder;
pub use capability::{EdgeSink, NeighborSource};
pub use directed::DirectedGraph;
pub use traversal::{bfs, dfs};
pub use undirected::UndirectedGraph;
