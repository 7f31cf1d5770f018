//! FIFO queue of nodes.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::types::{GraphError, GraphResult, NodeId};

use super::{lock, Frontier};

/// A first-in, first-out queue of nodes.
#[derive(Debug, Default)]
pub struct NodeQueue {
    nodes: Mutex<VecDeque<NodeId>>,
}

impl NodeQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            nodes: Mutex::new(VecDeque::new()),
        }
    }

    /// Append a node to the back of the queue.
    pub fn push(&self, node: NodeId) {
        lock(&self.nodes).push_back(node);
    }

    /// Remove and return the oldest node.
    pub fn pop(&self) -> GraphResult<NodeId> {
        lock(&self.nodes)
            .pop_front()
            .ok_or(GraphError::EmptyContainer("queue"))
    }

    pub fn len(&self) -> usize {
        lock(&self.nodes).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Frontier for NodeQueue {
    fn push(&self, node: NodeId) {
        NodeQueue::push(self, node);
    }

    fn pop(&self) -> GraphResult<NodeId> {
        NodeQueue::pop(self)
    }

    fn len(&self) -> usize {
        NodeQueue::len(self)
    }
}
