//! Criterion benchmarks for the weighted graph library.

use std::io::Cursor;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use weighted_graph::format::{EdgeListReader, EdgeListWriter};
use weighted_graph::graph::{bfs, dfs, DirectedGraph, UndirectedGraph};
use weighted_graph::types::Edge;

/// Random edges over `node_count` nodes named `n0..nN`.
fn random_edges(node_count: usize, edges_per_node: usize) -> Vec<Edge> {
    let mut rng = rand::thread_rng();
    let mut edges = Vec::with_capacity(node_count * edges_per_node);
    for i in 0..node_count {
        for _ in 0..edges_per_node {
            let target = rng.gen_range(0..node_count);
            edges.push(Edge::new(
                format!("n{}", i),
                format!("n{}", target),
                rng.gen_range(0.1..10.0),
            ));
        }
    }
    edges
}

fn bench_add_edge(c: &mut Criterion) {
    let mut graph = DirectedGraph::from_edges(random_edges(10_000, 3));

    c.bench_function("add_edge_to_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let src = format!("n{}", rng.gen_range(0..10_000));
            let tgt = format!("n{}", rng.gen_range(0..10_000));
            graph.add_edge(&src, &tgt, 0.5);
        })
    });
}

fn bench_remove_node(c: &mut Criterion) {
    let base = DirectedGraph::from_edges(random_edges(10_000, 3));

    c.bench_function("remove_node_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter_batched(
            || base.clone(),
            |mut graph| {
                let node = format!("n{}", rng.gen_range(0..10_000));
                graph.remove_node(&node);
                graph
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

fn bench_dfs_directed(c: &mut Criterion) {
    let graph = DirectedGraph::from_edges(random_edges(100_000, 3));

    c.bench_function("dfs_directed_100k", |b| {
        b.iter(|| {
            let _ = dfs(&graph, "n50000");
        })
    });
}

fn bench_bfs_directed(c: &mut Criterion) {
    let graph = DirectedGraph::from_edges(random_edges(100_000, 3));

    c.bench_function("bfs_directed_100k", |b| {
        b.iter(|| {
            let _ = bfs(&graph, "n50000");
        })
    });
}

fn bench_bfs_undirected(c: &mut Criterion) {
    let graph = UndirectedGraph::from_edges(random_edges(100_000, 2));

    c.bench_function("bfs_undirected_100k", |b| {
        b.iter(|| {
            let _ = bfs(&graph, "n50000");
        })
    });
}

fn bench_read_edge_list_10k(c: &mut Criterion) {
    let mut text = Vec::new();
    EdgeListWriter::write_to(&random_edges(10_000, 3), &mut text).unwrap();

    c.bench_function("read_edge_list_10k", |b| {
        b.iter(|| {
            let mut graph = DirectedGraph::new();
            let _ = EdgeListReader::new().read_into(Cursor::new(&text), &mut graph);
        })
    });
}

criterion_group!(
    benches,
    bench_add_edge,
    bench_remove_node,
    bench_dfs_directed,
    bench_bfs_directed,
    bench_bfs_undirected,
    bench_read_edge_list_10k,
);
criterion_main!(benches);
