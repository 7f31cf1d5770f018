//! Phase 1 tests: adjacency storage + directed and undirected graphs.

use std::collections::HashSet;

use weighted_graph::graph::{DirectedGraph, GraphBuilder, UndirectedGraph, WeightedAdjacency};
use weighted_graph::types::{Edge, DEFAULT_WEIGHT};

// ==================== Helper ====================

/// The five-edge directed graph used across these tests.
fn sample_directed() -> DirectedGraph {
    let mut dg = DirectedGraph::new();
    dg.add_edge("a", "b", 1.5);
    dg.add_edge("a", "c", 2.0);
    dg.add_edge("b", "c", 3.3);
    dg.add_edge("c", "a", 7.0);
    dg.add_edge("c", "d", 1.1);
    dg
}

fn sample_undirected() -> UndirectedGraph {
    let mut g = UndirectedGraph::new();
    g.add_edge("a", "b", 1.5);
    g.add_edge("a", "c", 2.0);
    g.add_edge("b", "c", 3.3);
    g.add_edge("c", "d", 1.1);
    g
}

fn node_set(nodes: Vec<String>) -> HashSet<String> {
    nodes.into_iter().collect()
}

fn set_of(names: &[&str]) -> HashSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Every forward entry has a mirrored inverse entry and vice versa.
fn assert_inverse_consistent(dg: &DirectedGraph) {
    for (src, tgt, w) in dg.out_adjacency().iter() {
        assert_eq!(dg.in_adjacency().get_edge_weight(tgt, src), Some(w));
    }
    for (tgt, src, w) in dg.in_adjacency().iter() {
        assert_eq!(dg.out_adjacency().get_edge_weight(src, tgt), Some(w));
    }
}

fn assert_symmetric(g: &UndirectedGraph) {
    for (a, b, w) in g.adjacency().iter() {
        assert_eq!(g.get_edge_weight(b, a), Some(w));
    }
}

// ==================== WeightedAdjacency Tests ====================

#[test]
fn test_adjacency_add_and_query() {
    let mut adj = WeightedAdjacency::new();
    assert!(adj.is_empty());

    adj.add_edge("x", "y", 2.5);
    assert!(adj.has_edge("x", "y"));
    assert!(!adj.has_edge("y", "x"));
    assert_eq!(adj.get_edge_weight("x", "y"), Some(2.5));
    assert_eq!(adj.get_edge_weight("x", "z"), None);
    assert_eq!(adj.get_edge_weight("q", "y"), None);

    let nbrs = adj.get_neighbors("x").unwrap();
    assert_eq!(nbrs.len(), 1);
    assert!(adj.get_neighbors("y").is_none());
}

#[test]
fn test_adjacency_upsert() {
    let mut adj = WeightedAdjacency::new();
    adj.add_edge("x", "y", 1.0);
    adj.add_edge("x", "y", 4.0);
    assert_eq!(adj.entry_count(), 1);
    assert_eq!(adj.get_edge_weight("x", "y"), Some(4.0));
}

#[test]
fn test_adjacency_out_degree() {
    let mut adj = WeightedAdjacency::new();
    adj.add_edge("x", "y", 1.5);
    adj.add_edge("x", "z", 2.0);
    assert_eq!(adj.get_out_degree("x"), Some(3.5));
    assert_eq!(adj.get_out_degree("y"), None);
}

#[test]
fn test_adjacency_remove_drops_empty_source() {
    let mut adj = WeightedAdjacency::new();
    adj.add_edge("x", "y", 1.0);
    adj.add_edge("x", "z", 1.0);

    adj.remove_edge("x", "y");
    assert!(adj.contains_source("x"));
    adj.remove_edge("x", "z");
    assert!(!adj.contains_source("x"));
    assert!(adj.get_neighbors("x").is_none());
    assert!(adj.is_empty());
}

#[test]
fn test_adjacency_remove_missing_is_noop() {
    let mut adj = WeightedAdjacency::new();
    adj.add_edge("x", "y", 1.0);
    let before = adj.clone();

    adj.remove_edge("q", "y");
    adj.remove_edge("x", "q");
    assert_eq!(adj, before);
}

#[test]
fn test_adjacency_source_nodes() {
    let mut adj = WeightedAdjacency::new();
    adj.add_edge("x", "y", 1.0);
    adj.add_edge("z", "y", 1.0);
    let sources = adj.get_source_nodes();
    assert_eq!(sources.len(), 2);
    assert!(sources.contains("x"));
    assert!(sources.contains("z"));
    assert!(!sources.contains("y"));
}

// ==================== DirectedGraph Tests ====================

#[test]
fn test_directed_new_is_empty() {
    let dg = DirectedGraph::new();
    assert!(dg.is_empty());
    assert!(dg.get_nodes().is_empty());
    assert_eq!(dg.edge_count(), 0);
}

#[test]
fn test_directed_from_edges() {
    let dg = DirectedGraph::from_edges(vec![
        Edge::new("a", "b", 1.5),
        Edge::unweighted("a", "c"),
        Edge::new("c", "b", 2.3),
    ]);
    assert_eq!(dg.get_edge_weight("a", "b"), Some(1.5));
    assert_eq!(dg.get_edge_weight("a", "c"), Some(DEFAULT_WEIGHT));
    assert_eq!(dg.get_edge_weight("c", "b"), Some(2.3));
    assert_eq!(dg.edge_count(), 3);
    assert_inverse_consistent(&dg);
}

#[test]
fn test_directed_add_edge() {
    let mut dg = DirectedGraph::new();

    dg.add_unweighted_edge("x", "y");
    assert!(dg.has_edge("x", "y"));
    assert!(!dg.has_edge("y", "x"));
    assert!(dg.get_neighbors("x").unwrap().contains_key("y"));
    assert!(dg.get_in_neighbors("y").unwrap().contains_key("x"));
    assert_eq!(dg.get_edge_weight("x", "y"), Some(1.0));

    dg.add_edge("x", "y", 3.67);
    assert!(dg.has_edge("x", "y"));
    assert!(!dg.has_edge("y", "x"));
    assert_eq!(dg.get_edge_weight("x", "y"), Some(3.67));
    assert_eq!(dg.edge_count(), 1);
    assert_eq!(dg.in_adjacency().get_edge_weight("y", "x"), Some(3.67));
}

#[test]
fn test_directed_nodes() {
    let dg = sample_directed();
    assert_eq!(node_set(dg.get_nodes()), set_of(&["a", "b", "c", "d"]));
    assert_eq!(dg.node_count(), 4);
    // d only has an incoming edge
    assert!(dg.has_node("d"));
    assert!(dg.get_out_neighbors("d").is_none());
    assert!(!dg.has_node("z"));
}

#[test]
fn test_directed_remove_edge() {
    let mut dg = sample_directed();

    assert!(!dg.has_edge("b", "a"));
    let before = dg.clone();
    dg.remove_edge("b", "a");
    assert_eq!(dg, before);

    dg.remove_edge("a", "b");
    assert!(!dg.has_edge("a", "b"));
    assert_inverse_consistent(&dg);

    dg.remove_edge("a", "c");
    assert!(dg.get_nodes().contains(&"a".to_string()));
    dg.remove_edge("c", "a");
    assert!(!dg.get_nodes().contains(&"a".to_string()));
    assert!(!dg.has_node("a"));
    assert_inverse_consistent(&dg);
}

#[test]
fn test_directed_remove_node() {
    let mut dg = sample_directed();
    dg.remove_node("a");

    assert!(!dg.has_node("a"));
    assert!(!dg.has_edge("a", "b"));
    assert!(!dg.has_edge("a", "c"));
    assert!(!dg.has_edge("c", "a"));
    assert!(dg.has_edge("b", "c"));
    assert!(dg.has_edge("c", "d"));
    assert_eq!(node_set(dg.get_nodes()), set_of(&["b", "c", "d"]));
    assert_inverse_consistent(&dg);
}

#[test]
fn test_directed_remove_node_with_self_loop() {
    let mut dg = sample_directed();
    dg.add_edge("a", "a", 0.5);
    dg.remove_node("a");
    assert!(!dg.has_node("a"));
    assert!(dg.out_adjacency().get_neighbors("a").is_none());
    assert!(dg.in_adjacency().get_neighbors("a").is_none());
    assert_inverse_consistent(&dg);
}

#[test]
fn test_directed_remove_missing_node_is_noop() {
    let mut dg = sample_directed();
    let before = dg.clone();
    dg.remove_node("zz");
    assert_eq!(dg, before);
}

#[test]
fn test_directed_degrees() {
    let dg = sample_directed();

    assert_eq!(dg.get_out_degree("a"), Some(3.5));
    assert_eq!(dg.get_in_degree("a"), Some(7.0));
    assert_eq!(dg.get_total_degree("a"), Some(10.5));

    assert_eq!(dg.get_out_degree("d"), None);
    assert_eq!(dg.get_in_degree("d"), Some(1.1));
    assert_eq!(dg.get_total_degree("d"), Some(1.1));

    assert_eq!(dg.get_total_degree("z"), None);
}

#[test]
fn test_directed_total_degree_counts_self_loop_once() {
    let mut dg = sample_directed();
    dg.add_edge("a", "a", 4.0);

    let out_deg = dg.get_out_degree("a").unwrap();
    let in_deg = dg.get_in_degree("a").unwrap();
    assert_eq!(out_deg, 7.5);
    assert_eq!(in_deg, 11.0);
    assert_eq!(dg.get_total_degree("a"), Some(out_deg + in_deg - 4.0));
    assert_eq!(dg.get_total_degree("a"), Some(14.5));
}

#[test]
fn test_directed_edges_enumeration() {
    let dg = sample_directed();
    let mut edges = dg.edges();
    edges.sort_by(|a, b| a.source.cmp(&b.source).then(a.target.cmp(&b.target)));
    assert_eq!(edges.len(), 5);
    assert_eq!(edges[0], Edge::new("a", "b", 1.5));
    assert_eq!(edges[4], Edge::new("c", "d", 1.1));
}

// ==================== UndirectedGraph Tests ====================

#[test]
fn test_undirected_add_edge_is_symmetric() {
    let mut g = UndirectedGraph::new();
    g.add_unweighted_edge("x", "y");
    assert!(g.has_edge("x", "y"));
    assert!(g.has_edge("y", "x"));
    assert_eq!(g.get_edge_weight("x", "y"), Some(1.0));
    assert_eq!(g.get_edge_weight("y", "x"), Some(1.0));

    g.add_edge("y", "x", 2.25);
    assert_eq!(g.get_edge_weight("x", "y"), Some(2.25));
    assert_eq!(g.get_edge_weight("y", "x"), Some(2.25));
    assert_eq!(g.edge_count(), 1);
    assert_symmetric(&g);
}

#[test]
fn test_undirected_nodes_and_neighbors() {
    let g = sample_undirected();
    assert_eq!(node_set(g.get_nodes()), set_of(&["a", "b", "c", "d"]));
    let d_nbrs = g.get_neighbors("d").unwrap();
    assert_eq!(d_nbrs.len(), 1);
    assert_eq!(d_nbrs.get("c"), Some(&1.1));
    assert!(g.get_neighbors("z").is_none());
    assert!(!g.has_node("z"));
    assert_eq!(g.edge_count(), 4);
}

#[test]
fn test_undirected_remove_edge() {
    let mut g = sample_undirected();
    let before = g.clone();
    g.remove_edge("a", "d");
    assert_eq!(g, before);

    g.remove_edge("b", "a");
    assert!(!g.has_edge("a", "b"));
    assert!(!g.has_edge("b", "a"));
    assert_symmetric(&g);

    g.remove_edge("c", "d");
    assert!(!g.has_node("d"));
}

#[test]
fn test_undirected_remove_node() {
    let mut g = sample_undirected();
    g.add_edge("c", "c", 9.0);
    g.remove_node("c");
    assert!(!g.has_node("c"));
    assert!(!g.has_node("d"));
    assert!(g.has_edge("a", "b"));
    assert_eq!(node_set(g.get_nodes()), set_of(&["a", "b"]));
    assert_symmetric(&g);
}

#[test]
fn test_undirected_degree() {
    let g = sample_undirected();
    assert_eq!(g.get_degree("a"), Some(3.5));
    assert!((g.get_degree("c").unwrap() - 6.4).abs() < 1e-9);
    assert_eq!(g.get_degree("z"), None);
}

#[test]
fn test_undirected_self_loop_counted_once() {
    let mut g = UndirectedGraph::new();
    g.add_edge("a", "a", 2.0);
    g.add_edge("a", "b", 1.0);
    assert_eq!(g.adjacency().get_neighbors("a").unwrap().len(), 2);
    assert_eq!(g.get_degree("a"), Some(3.0));
    assert_eq!(g.edge_count(), 2);
    assert_symmetric(&g);
}

#[test]
fn test_undirected_edges_listed_once() {
    let g = sample_undirected();
    let edges = g.edges();
    assert_eq!(edges.len(), 4);
    assert!(edges.iter().all(|e| e.source <= e.target));
    assert!(edges.contains(&Edge::new("a", "b", 1.5)));
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_both_variants() {
    let mut builder = GraphBuilder::new();
    builder
        .link("a", "b", 1.5)
        .link_unweighted("a", "c")
        .link("c", "b", 2.3);
    assert_eq!(builder.edges().len(), 3);

    let dg = builder.build_directed();
    assert!(dg.has_edge("c", "b"));
    assert!(!dg.has_edge("b", "c"));

    let g = builder.build_undirected();
    assert!(g.has_edge("b", "c"));
    assert_eq!(g.get_edge_weight("c", "a"), Some(DEFAULT_WEIGHT));
}

#[test]
fn test_collect_into_graph() {
    let edges = vec![Edge::new("a", "b", 1.0), Edge::new("a", "b", 5.0)];
    let dg: DirectedGraph = edges.iter().cloned().collect();
    assert_eq!(dg.get_edge_weight("a", "b"), Some(5.0));
    let g: UndirectedGraph = edges.into_iter().collect();
    assert_eq!(g.get_edge_weight("b", "a"), Some(5.0));
}
