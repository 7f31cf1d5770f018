//! CLI command implementations.

use std::io::Write;
use std::path::Path;

use crate::config::{GraphConfig, GraphKind};
use crate::format::{EdgeListReader, EdgeListWriter};
use crate::graph::{bfs, dfs, DirectedGraph, NeighborSource, Neighbors, UndirectedGraph};
use crate::types::{Edge, GraphResult, NodeId};

/// A graph of either variant loaded from an edge-list file.
pub enum LoadedGraph {
    Directed(DirectedGraph),
    Undirected(UndirectedGraph),
}

impl LoadedGraph {
    /// Load an edge-list file into the variant chosen by the config.
    pub fn load(path: &Path, config: &GraphConfig) -> GraphResult<Self> {
        let reader = EdgeListReader::with_default_weight(config.default_weight);
        match config.kind {
            GraphKind::Directed => {
                let mut graph = DirectedGraph::new();
                reader.load_file(path, &mut graph)?;
                Ok(Self::Directed(graph))
            }
            GraphKind::Undirected => {
                let mut graph = UndirectedGraph::new();
                reader.load_file(path, &mut graph)?;
                Ok(Self::Undirected(graph))
            }
        }
    }

    pub fn kind(&self) -> GraphKind {
        match self {
            Self::Directed(_) => GraphKind::Directed,
            Self::Undirected(_) => GraphKind::Undirected,
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Self::Directed(g) => g.node_count(),
            Self::Undirected(g) => g.node_count(),
        }
    }

    pub fn edge_count(&self) -> usize {
        match self {
            Self::Directed(g) => g.edge_count(),
            Self::Undirected(g) => g.edge_count(),
        }
    }

    pub fn edges(&self) -> Vec<Edge> {
        match self {
            Self::Directed(g) => g.edges(),
            Self::Undirected(g) => g.edges(),
        }
    }

    fn as_source(&self) -> &dyn NeighborSource {
        match self {
            Self::Directed(g) => g,
            Self::Undirected(g) => g,
        }
    }
}

/// Which search algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Dfs,
    Bfs,
}

impl SearchKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dfs => "dfs",
            Self::Bfs => "bfs",
        }
    }
}

/// Display node and edge counts.
pub fn cmd_info(path: &Path, config: &GraphConfig, json: bool) -> GraphResult<()> {
    let graph = LoadedGraph::load(path, config)?;
    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "kind": graph.kind().name(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Kind: {}", graph.kind().name());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
    }
    Ok(())
}

/// Print the adjacency structure. `inverse` selects a directed graph's in-adjacency.
pub fn cmd_print(path: &Path, config: &GraphConfig, inverse: bool) -> GraphResult<()> {
    let graph = LoadedGraph::load(path, config)?;
    let adj = match &graph {
        LoadedGraph::Directed(g) if inverse => g.in_adjacency(),
        LoadedGraph::Directed(g) => g.out_adjacency(),
        LoadedGraph::Undirected(g) => g.adjacency(),
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    EdgeListWriter::write_adjacency(adj, &mut out)?;
    out.flush()?;
    Ok(())
}

/// List the neighbors of a node with edge weights.
pub fn cmd_neighbors(path: &Path, config: &GraphConfig, node: &str, json: bool) -> GraphResult<()> {
    let graph = LoadedGraph::load(path, config)?;
    let nbrs = sorted_neighbors(graph.as_source().neighbors(node));

    if json {
        let list: Vec<serde_json::Value> = nbrs
            .iter()
            .map(|(n, w)| serde_json::json!({"node": n, "weight": w}))
            .collect();
        println!(
            "{}",
            serde_json::json!({"node": node, "found": graph.as_source().has_node(node), "neighbors": list})
        );
    } else if nbrs.is_empty() {
        println!("{node} has no neighbors");
    } else {
        println!("Neighbors of {node}:");
        for (n, w) in &nbrs {
            println!("  {n}: {w}");
        }
    }
    Ok(())
}

/// Report the weighted degree of a node.
pub fn cmd_degree(path: &Path, config: &GraphConfig, node: &str, json: bool) -> GraphResult<()> {
    let graph = LoadedGraph::load(path, config)?;
    match &graph {
        LoadedGraph::Directed(g) => {
            let out_deg = g.get_out_degree(node);
            let in_deg = g.get_in_degree(node);
            let total = g.get_total_degree(node);
            if json {
                println!(
                    "{}",
                    serde_json::json!({"node": node, "out": out_deg, "in": in_deg, "total": total})
                );
            } else if let Some(total) = total {
                println!("Node: {node}");
                println!("  Out degree: {}", out_deg.unwrap_or(0.0));
                println!("  In degree: {}", in_deg.unwrap_or(0.0));
                println!("  Total degree: {total}");
            } else {
                println!("Node {node} not found");
            }
        }
        LoadedGraph::Undirected(g) => {
            let deg = g.get_degree(node);
            if json {
                println!("{}", serde_json::json!({"node": node, "degree": deg}));
            } else if let Some(deg) = deg {
                println!("Node: {node}");
                println!("  Degree: {deg}");
            } else {
                println!("Node {node} not found");
            }
        }
    }
    Ok(())
}

/// Run DFS or BFS from a node and list the reachable set.
pub fn cmd_search(
    path: &Path,
    config: &GraphConfig,
    kind: SearchKind,
    start: &str,
    json: bool,
) -> GraphResult<()> {
    let graph = LoadedGraph::load(path, config)?;
    let mut reached: Vec<NodeId> = match kind {
        SearchKind::Dfs => dfs(graph.as_source(), start),
        SearchKind::Bfs => bfs(graph.as_source(), start),
    };
    reached.sort_unstable();

    if json {
        println!(
            "{}",
            serde_json::json!({"search": kind.name(), "start": start, "reached": reached})
        );
    } else {
        println!("Reachable from {} ({}): {} nodes", start, kind.name(), reached.len());
        for node in &reached {
            println!("  {node}");
        }
    }
    Ok(())
}

/// Write the normalized edge list (or JSON edges) to stdout.
pub fn cmd_export(path: &Path, config: &GraphConfig, json: bool, pretty: bool) -> GraphResult<()> {
    let graph = LoadedGraph::load(path, config)?;
    let mut edges = graph.edges();
    if json {
        edges.sort_by(|a, b| a.source.cmp(&b.source).then(a.target.cmp(&b.target)));
        let output = if pretty {
            serde_json::to_string_pretty(&edges)
        } else {
            serde_json::to_string(&edges)
        };
        println!("{}", output.unwrap_or_default());
        return Ok(());
    }
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    EdgeListWriter::write_to(&edges, &mut out)?;
    out.flush()?;
    Ok(())
}

fn sorted_neighbors(nbrs: Option<&Neighbors>) -> Vec<(NodeId, f64)> {
    let mut list: Vec<(NodeId, f64)> = nbrs
        .map(|m| m.iter().map(|(n, &w)| (n.clone(), w)).collect())
        .unwrap_or_default();
    list.sort_by(|a, b| a.0.cmp(&b.0));
    list
}
