//! Shortest-path benchmarks.
//!
//! Measures full single-source runs and route reconstruction on random
//! sparse networks of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;

use netroute_graph::{compute_paths, compute_paths_into, Network, NodeId, ShortestPaths};

/// Random network with `degree` outgoing links per node.
fn sparse_network(n: usize, degree: usize, seed: u64) -> Network {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut net = Network::with_nodes((0..n).map(|i| format!("r{}", i))).unwrap();
    for u in 0..n {
        for _ in 0..degree {
            let v = rng.gen_range(0..n);
            let w: f64 = rng.gen_range(0.5..100.0);
            net.add_edge(NodeId::from(u), NodeId::from(v), w).unwrap();
        }
    }
    net
}

/// Benchmark fresh-state runs
fn bench_compute_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra/compute_paths");

    for &n in &[100usize, 1_000, 10_000] {
        let net = sparse_network(n, 4, 1);
        group.throughput(Throughput::Elements(net.num_edges() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &net, |b, net| {
            b.iter(|| {
                let paths = compute_paths(net, NodeId(0)).unwrap();
                black_box(paths);
            });
        });
    }

    group.finish();
}

/// Benchmark reusing one state with a reset between runs
fn bench_reused_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra/reused_state");

    let net = sparse_network(1_000, 4, 2);
    let mut state = ShortestPaths::new(net.num_nodes());

    group.bench_function("reset_all+run", |b| {
        b.iter(|| {
            state.reset_all();
            compute_paths_into(&net, NodeId(0), &mut state).unwrap();
            black_box(state.settled_count());
        });
    });

    group.finish();
}

/// Benchmark route reconstruction
fn bench_path_to(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra/path_to");

    let net = sparse_network(10_000, 4, 3);
    let paths = compute_paths(&net, NodeId(0)).unwrap();

    group.bench_function("all_targets", |b| {
        b.iter(|| {
            for (node, _) in net.nodes() {
                black_box(paths.path_to(node));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_compute_paths, bench_reused_state, bench_path_to);
criterion_main!(benches);
