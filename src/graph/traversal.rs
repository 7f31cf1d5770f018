//! Graph traversal algorithms (DFS, BFS).

use crate::collections::{Frontier, NodeQueue, NodeStack, VisitedSet};
use crate::types::NodeId;

use super::NeighborSource;

/// Depth-first search from a starting node, following outgoing edges.
///
/// Returns every reachable node, including `start`, in no particular order.
/// A start node that is not in the graph yields an empty result.
pub fn dfs<G>(graph: &G, start: &str) -> Vec<NodeId>
where
    G: NeighborSource + ?Sized,
{
    search(graph, start, NodeStack::new())
}

/// Breadth-first search from a starting node, following outgoing edges.
///
/// Reaches the same set of nodes as [`dfs`].
pub fn bfs<G>(graph: &G, start: &str) -> Vec<NodeId>
where
    G: NeighborSource + ?Sized,
{
    search(graph, start, NodeQueue::new())
}

fn search<G, F>(graph: &G, start: &str, frontier: F) -> Vec<NodeId>
where
    G: NeighborSource + ?Sized,
    F: Frontier,
{
    if !graph.has_node(start) {
        log::trace!("search start {start:?} not in graph");
        return Vec::new();
    }

    let visited = VisitedSet::new();
    frontier.push(start.to_string());

    // A node can be queued once per incoming edge; only the first pop expands it.
    while let Ok(current) = frontier.pop() {
        if visited.contains(&current) {
            continue;
        }
        if let Some(nbrs) = graph.neighbors(&current) {
            for nbr in nbrs.keys() {
                if !visited.contains(nbr) {
                    frontier.push(nbr.clone());
                }
            }
        }
        visited.add(current);
    }

    log::trace!("search from {start:?} reached {} nodes", visited.len());
    visited.into_vec()
}
