//! Criterion benchmarks for keygraph.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use keygraph::graph::{bfs, build_path, DiGraph};
use keygraph::types::Owner;

/// Sequential payload values, one per node.
fn make_values(node_count: usize) -> Vec<u64> {
    (0..node_count as u64).collect()
}

/// Build a graph with a chain 0->1->...->n-1 (so every node is reachable
/// from 0 and the longest path spans the whole graph) plus random extra
/// edges.
fn make_graph(values: &[u64], extra_edges_per_node: usize) -> DiGraph<'_, u64> {
    let mut rng = rand::thread_rng();
    let n = values.len();

    let mut graph = DiGraph::with_capacity(n);
    for (i, value) in values.iter().enumerate() {
        let owner = if i % 2 == 0 { Owner::Local } else { Owner::Remote };
        graph.add_node(i as u64, value, owner);
    }
    for src in 0..n as u64 - 1 {
        graph.add_edge(src, src + 1);
    }
    for src in 0..n as u64 {
        for _ in 0..extra_edges_per_node {
            let dst = rng.gen_range(0..n as u64);
            graph.add_edge(src, dst);
        }
    }
    graph
}

fn bench_construction(c: &mut Criterion) {
    let values = make_values(1_000);

    c.bench_function("build_1k_nodes_4_edges", |b| {
        b.iter(|| {
            let graph = make_graph(black_box(&values), 4);
            black_box(graph.node_count())
        })
    });
}

fn bench_bfs(c: &mut Criterion) {
    let values = make_values(10_000);
    let graph = make_graph(&values, 4);

    c.bench_function("bfs_10k_nodes", |b| {
        b.iter(|| black_box(bfs(&graph, black_box(0))))
    });
}

fn bench_build_path(c: &mut Criterion) {
    let values = make_values(10_000);
    let graph = make_graph(&values, 0);
    let tree = bfs(&graph, 0);
    let far = values.len() as u64 - 1;

    c.bench_function("build_path_10k_chain", |b| {
        b.iter(|| black_box(build_path(&graph, 0, black_box(far), &tree)))
    });
}

criterion_group!(benches, bench_construction, bench_bfs, bench_build_path);
criterion_main!(benches);
