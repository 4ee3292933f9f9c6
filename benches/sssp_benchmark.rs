use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use frontier_sssp::dijkstra::dijkstra;
use frontier_sssp::{Graph, Solver};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

/// Ring backbone plus random chords, so every vertex is reachable and the
/// average out-degree stays near `avg_degree`.
fn ring_with_chords(n: usize, avg_degree: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges: Vec<(usize, usize, f64)> = Vec::with_capacity(n * avg_degree);

    for i in 0..n {
        edges.push((i, (i + 1) % n, rng.gen_range(0.5..4.5)));
    }
    for _ in 0..n * (avg_degree - 1) {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        if from != to {
            edges.push((from, to, rng.gen_range(0.5..4.5)));
        }
    }

    Graph::from_edges(n, &edges).expect("generated edges are valid")
}

fn coin_flip_dense(n: usize, edge_probability: f64, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new(n);

    for from in 0..n {
        for to in 0..n {
            if from != to && rng.gen_bool(edge_probability) {
                graph.add_edge(from, to, rng.gen_range(0.5..12.0));
            }
        }
    }

    graph
}

fn bench_dijkstra_vs_frontier(c: &mut Criterion) {
    let mut group = c.benchmark_group("SSSP Algorithms");

    for &n in &[128, 512, 2048, 8192] {
        let sparse_graph = ring_with_chords(n, 4, 0xD1CE);

        group.bench_with_input(BenchmarkId::new("Dijkstra_Sparse", n), &n, |b, &_| {
            b.iter(|| black_box(dijkstra(&sparse_graph, 0)))
        });

        group.bench_with_input(BenchmarkId::new("Frontier_Sparse", n), &n, |b, &_| {
            b.iter(|| {
                let mut solver = Solver::new(sparse_graph.clone());
                black_box(solver.solve(0))
            })
        });
    }

    for &n in &[64, 128, 256] {
        let dense_graph = coin_flip_dense(n, 0.4, 0xD1CE);

        group.bench_with_input(BenchmarkId::new("Dijkstra_Dense", n), &n, |b, &_| {
            b.iter(|| black_box(dijkstra(&dense_graph, 0)))
        });

        group.bench_with_input(BenchmarkId::new("Frontier_Dense", n), &n, |b, &_| {
            b.iter(|| {
                let mut solver = Solver::new(dense_graph.clone());
                black_box(solver.solve(0))
            })
        });
    }

    group.finish();
}

fn bench_scaling_behavior(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scaling Behavior");

    let mut n = 256;
    while n <= 16384 {
        let graph = ring_with_chords(n, 3, 0xBEEF);

        group.bench_with_input(BenchmarkId::new("Frontier_Scaling", n), &n, |b, &_| {
            b.iter(|| {
                let mut solver = Solver::new(graph.clone());
                black_box(solver.solve(0))
            })
        });

        n *= 4;
    }

    group.finish();
}

criterion_group!(benches, bench_dijkstra_vs_frontier, bench_scaling_behavior);
criterion_main!(benches);
