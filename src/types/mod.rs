//! Shared data types for the weighted graph library.

pub mod edge;
pub mod error;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};

/// Identifier of a node. Nodes have no existence apart from the edges that mention them.
pub type NodeId = String;

/// Weight assigned to an edge when none is given.
pub const DEFAULT_WEIGHT: f64 = 1.0;
