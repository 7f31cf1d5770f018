//! Error types for the weighted graph library.

use std::num::ParseFloatError;

use thiserror::Error;

/// Errors returned by the weighted graph library.
///
/// Absent nodes and edges are not errors; queries report them with `Option` or `bool`.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Pop from an empty stack or queue.
    #[error("Cannot pop from empty {0}")]
    EmptyContainer(&'static str),

    /// Malformed weight field in an edge list.
    #[error("Invalid weight {token:?} on line {line}: {source}")]
    InvalidWeight {
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
