use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use crate::graph::Graph;

/// Textbook binary-heap Dijkstra. Serves the test harness and benchmarks as
/// the reference oracle; the engine itself never calls it.
///
/// The heap is keyed `(cost, vertex)` through [`OrderedFloat`], the same
/// total order the frontier queue uses for its value buckets.
pub fn dijkstra(graph: &Graph, source: usize) -> Vec<f64> {
    let mut dist = vec![f64::INFINITY; graph.vertices];
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, usize)>> = BinaryHeap::new();

    dist[source] = 0.0;
    heap.push(Reverse((OrderedFloat(0.0), source)));

    while let Some(Reverse((cost, u))) = heap.pop() {
        let cost = cost.into_inner();
        if cost > dist[u] {
            continue;
        }

        for edge in &graph.edges[u] {
            let next = cost + edge.weight;
            if next < dist[edge.to] {
                dist[edge.to] = next;
                heap.push(Reverse((OrderedFloat(next), edge.to)));
            }
        }
    }

    dist
}
