//! LIFO stack of nodes.

use std::sync::Mutex;

use crate::types::{GraphError, GraphResult, NodeId};

use super::{lock, Frontier};

/// A last-in, first-out stack of nodes.
#[derive(Debug, Default)]
pub struct NodeStack {
    nodes: Mutex<Vec<NodeId>>,
}

impl NodeStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            nodes: Mutex::new(Vec::new()),
        }
    }

    /// Push a node on top of the stack.
    pub fn push(&self, node: NodeId) {
        lock(&self.nodes).push(node);
    }

    /// Remove and return the most recently pushed node.
    pub fn pop(&self) -> GraphResult<NodeId> {
        lock(&self.nodes)
            .pop()
            .ok_or(GraphError::EmptyContainer("stack"))
    }

    /// Number of nodes on the stack.
    pub fn len(&self) -> usize {
        lock(&self.nodes).len()
    }

    /// True if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Frontier for NodeStack {
    fn push(&self, node: NodeId) {
        NodeStack::push(self, node);
    }

    fn pop(&self) -> GraphResult<NodeId> {
        NodeStack::pop(self)
    }

    fn len(&self) -> usize {
        NodeStack::len(self)
    }
}
