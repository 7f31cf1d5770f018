//! Thread-safe node containers used as traversal frontiers and visited sets.
//!
//! Each container guards its contents with a mutex per call. Compound sequences
//! such as `len()` followed by `pop()` are not atomic.

pub mod queue;
pub mod stack;
pub mod visited;

pub use queue::NodeQueue;
pub use stack::NodeStack;
pub use visited::VisitedSet;

use std::sync::{Mutex, MutexGuard};

use crate::types::{GraphResult, NodeId};

/// A work list of discovered but not yet expanded nodes.
pub trait Frontier {
    /// Add a node to the frontier.
    fn push(&self, node: NodeId);

    /// Take the next node, or fail with `EmptyContainer`.
    fn pop(&self) -> GraphResult<NodeId>;

    /// Number of nodes waiting.
    fn len(&self) -> usize;

    /// True if no nodes are waiting.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lock a container mutex, recovering the data if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
