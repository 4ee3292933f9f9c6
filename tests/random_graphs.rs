use frontier_sssp::dijkstra::dijkstra;
use frontier_sssp::{Graph, Solver};
use petgraph::graph::DiGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_sparse(n: usize, edges_per_vertex: f64, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new(n);

    // Spanning tree first so most of the graph is reachable.
    for i in 1..n {
        let parent = rng.gen_range(0..i);
        graph.add_edge(parent, i, rng.gen_range(0.1..10.0));
    }

    let extra = ((n as f64) * edges_per_vertex) as usize;
    for _ in 0..extra {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        if from != to {
            graph.add_edge(from, to, rng.gen_range(0.1..10.0));
        }
    }

    graph
}

fn random_dense(n: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new(n);

    for from in 0..n {
        for to in 0..n {
            if from != to && rng.gen_bool(0.5) {
                graph.add_edge(from, to, rng.gen_range(0.1..20.0));
            }
        }
    }

    graph
}

fn assert_distances_match(graph: &Graph, source: usize) {
    let expected = dijkstra(graph, source);
    let mut solver = Solver::new(graph.clone());
    let got = solver.solve(source);

    assert_eq!(got.len(), expected.len());
    for (v, (g, e)) in got.iter().zip(expected.iter()).enumerate() {
        if e.is_infinite() {
            assert!(g.is_infinite(), "vertex {v}: expected unreachable, got {g}");
        } else {
            assert!(
                (g - e).abs() < 1e-9,
                "vertex {v}: got {g}, expected {e}"
            );
        }
    }
}

#[test]
fn sparse_graphs_match_dijkstra() {
    for (n, seed) in [(50, 1u64), (200, 2), (500, 3), (2000, 4)] {
        let graph = random_sparse(n, 3.0, seed);
        assert_distances_match(&graph, 0);
    }
}

#[test]
fn dense_graphs_match_dijkstra() {
    for (n, seed) in [(40, 10u64), (80, 11), (150, 12)] {
        let graph = random_dense(n, seed);
        assert_distances_match(&graph, 0);
    }
}

#[test]
fn repeated_sources_match_dijkstra() {
    let graph = random_sparse(300, 3.0, 99);
    let mut solver = Solver::new(graph.clone());
    for source in [0, 7, 123, 299] {
        let expected = dijkstra(&graph, source);
        let got = solver.solve(source);
        for (g, e) in got.iter().zip(expected.iter()) {
            if e.is_infinite() {
                assert!(g.is_infinite());
            } else {
                assert!((g - e).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn integer_weights_with_many_ties_match_dijkstra() {
    // Unit and small integer weights force large groups of equal distances,
    // exercising the tie handling in the queue and the base case.
    let mut rng = StdRng::seed_from_u64(42);
    let n = 400;
    let mut graph = Graph::new(n);
    for i in 1..n {
        let parent = rng.gen_range(0..i);
        graph.add_edge(parent, i, rng.gen_range(1..4) as f64);
    }
    for _ in 0..3 * n {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        if from != to {
            graph.add_edge(from, to, rng.gen_range(1..4) as f64);
        }
    }
    assert_distances_match(&graph, 0);
}

#[test]
fn agrees_with_petgraph_dijkstra() {
    let graph = random_sparse(250, 3.0, 2024);

    let mut pg: DiGraph<(), f64> = DiGraph::new();
    let nodes: Vec<_> = (0..graph.vertices).map(|_| pg.add_node(())).collect();
    for (from, adjacency) in graph.edges.iter().enumerate() {
        for edge in adjacency {
            pg.add_edge(nodes[from], nodes[edge.to], edge.weight);
        }
    }

    let reference = petgraph::algo::dijkstra(&pg, nodes[0], None, |e| *e.weight());
    let mut solver = Solver::new(graph.clone());
    let got = solver.solve(0);

    for (v, node) in nodes.iter().enumerate() {
        match reference.get(node) {
            Some(d) => assert!((got[v] - d).abs() < 1e-9, "vertex {v}"),
            None => assert!(got[v].is_infinite(), "vertex {v} should be unreachable"),
        }
    }
}
