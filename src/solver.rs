use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[cfg(feature = "hashbrown")]
use hashbrown::{HashMap, HashSet};
#[cfg(not(feature = "hashbrown"))]
use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use crate::frontier_queue::FrontierQueue;
use crate::graph::Graph;
use crate::state::{DistanceState, INFINITY};

/// Implements the SSSP algorithm from "Breaking the Sorting Barrier for
/// Directed Single-Source Shortest Paths" by Duan, Mao, Mao, Shu, and Yin
/// (2025).
///
/// The solver owns the graph and one [`DistanceState`] per run. Each call to
/// [`Solver::solve`] resets the state, so a solver can be reused across
/// sources and always produces the same output for the same input.
pub struct Solver {
    graph: Graph,
    state: DistanceState,
    /// Parameter `k`, approximately log^(1/3)(n): relaxation depth in pivot
    /// selection and the settle budget of the base case.
    k: usize,
    /// Parameter `t`, approximately log^(2/3)(n): block-size exponent per
    /// recursion level.
    t: usize,
    /// Top recursion level, ceil(log2(n) / t).
    max_level: usize,
}

/// Priority key of the bounded mini-Dijkstra: distance, then recorded path
/// length, then vertex id.
#[derive(Debug, Clone, Copy, PartialEq)]
struct HeapKey {
    dist: f64,
    hops: usize,
    vertex: usize,
}

impl Eq for HeapKey {}

impl Ord for HeapKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .partial_cmp(&other.dist)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.hops.cmp(&other.hops))
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for HeapKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn pow2_saturating(exp: usize) -> usize {
    if exp >= usize::BITS as usize - 1 {
        usize::MAX
    } else {
        1 << exp
    }
}

impl Solver {
    pub fn new(graph: Graph) -> Self {
        let n = graph.vertices;
        let logn = (n as f64).log2().max(1.0);
        let k = (logn.powf(1.0 / 3.0).floor() as usize).max(2);
        let t = (logn.powf(2.0 / 3.0).floor() as usize).max(1);
        let max_level = (logn / t as f64).ceil() as usize;

        Solver {
            state: DistanceState::new(n),
            graph,
            k,
            t,
            max_level,
        }
    }

    /// Computes shortest-path distances from `source` to every vertex.
    /// Unreachable vertices stay at `INFINITY`.
    pub fn solve(&mut self, source: usize) -> Vec<f64> {
        debug_assert!(source < self.graph.vertices);
        debug!(
            "sssp run: n={} m={} k={} t={} levels={}",
            self.graph.vertices,
            self.graph.edge_count(),
            self.k,
            self.t,
            self.max_level
        );

        self.state.reset();
        self.state.set_source(source);
        self.bmssp(self.max_level, INFINITY, vec![source]);
        self.state.dist.clone()
    }

    /// Bounded multi-source shortest paths, the recursive driver.
    ///
    /// Given a frontier whose members all have `dist < bound`, returns
    /// `(boundary, completed)` where `boundary <= bound`, every vertex in
    /// `completed` now carries its true distance below `boundary`, and every
    /// vertex whose true distance falls below `boundary` has been completed
    /// by this call or an earlier one.
    fn bmssp(&mut self, level: usize, bound: f64, frontier: Vec<usize>) -> (f64, Vec<usize>) {
        if level == 0 {
            return self.base_case(bound, frontier);
        }
        trace!(
            "bmssp: level={} bound={} frontier={}",
            level,
            bound,
            frontier.len()
        );

        let (pivots, working) = self.find_pivots(bound, &frontier);

        let block_size = pow2_saturating((level - 1) * self.t);
        let cap = self.k.saturating_mul(pow2_saturating(level * self.t));
        let mut queue = FrontierQueue::new(block_size, bound);

        let mut boundary = bound;
        for &x in &pivots {
            if self.state.dist[x] < bound {
                queue.insert(x, self.state.dist[x]);
                boundary = boundary.min(self.state.dist[x]);
            }
        }

        let mut completed: Vec<usize> = Vec::new();
        let mut members: HashSet<usize> = HashSet::new();

        while completed.len() < cap && !queue.is_empty() {
            let (batch_bound, batch) = queue.pull();
            if batch.is_empty() {
                break;
            }

            let (sub_boundary, sub_completed) = self.bmssp(level - 1, batch_bound, batch.clone());
            boundary = sub_boundary;

            // Relax out of every newly completed vertex. A tree edge whose
            // head lands back inside this level's window is requeued: into
            // the ordered part if it belongs to [batch_bound, bound), or
            // into the prepend batch if it undercuts the pulled block.
            let mut carried: Vec<(usize, f64)> = Vec::new();
            for &u in &sub_completed {
                if members.insert(u) {
                    completed.push(u);
                }
                for edge in &self.graph.edges[u] {
                    self.state.relax(u, edge.to, edge.weight);
                    if self.state.is_tree_edge(u, edge.to, edge.weight) {
                        let next = self.state.dist[edge.to];
                        if next >= batch_bound && next < bound {
                            queue.insert(edge.to, next);
                        } else if next >= sub_boundary && next < batch_bound {
                            carried.push((edge.to, next));
                        }
                    }
                }
            }

            // Pulled vertices the sub-call left unfinished go back in front.
            for &x in &batch {
                let dx = self.state.dist[x];
                if dx >= sub_boundary && dx < batch_bound {
                    carried.push((x, dx));
                }
            }
            queue.batch_prepend(carried);
        }

        // Stopping on the workload cap keeps the last sub-boundary; draining
        // the queue means everything below the full bound is done.
        let final_boundary = if queue.is_empty() { bound } else { boundary };
        for &x in &working {
            if self.state.dist[x] < final_boundary && members.insert(x) {
                completed.push(x);
            }
        }
        (final_boundary, completed)
    }

    /// Level zero: a mini-Dijkstra seeded from the whole frontier, capped at
    /// `k + 1` settled vertices.
    ///
    /// The cap is soft at equal distances: settling continues through a tie
    /// group so the returned boundary is strictly above every settled
    /// distance. All settled vertices are handed back as completed.
    fn base_case(&mut self, bound: f64, frontier: Vec<usize>) -> (f64, Vec<usize>) {
        let mut heap: BinaryHeap<Reverse<HeapKey>> = BinaryHeap::new();
        for &x in &frontier {
            if self.state.dist[x] < bound {
                heap.push(Reverse(HeapKey {
                    dist: self.state.dist[x],
                    hops: self.state.path_len[x],
                    vertex: x,
                }));
            }
        }

        let mut settled: Vec<usize> = Vec::new();
        let mut done: HashSet<usize> = HashSet::new();
        let mut next_boundary = bound;

        while let Some(Reverse(key)) = heap.pop() {
            if key.dist >= bound {
                continue;
            }
            if done.contains(&key.vertex) {
                continue;
            }
            if key.dist != self.state.dist[key.vertex]
                || key.hops != self.state.path_len[key.vertex]
            {
                continue; // superseded by a better label
            }
            if settled.len() > self.k {
                let settled_max = self.state.dist[*settled.last().expect("settled is non-empty")];
                if key.dist > settled_max {
                    next_boundary = key.dist;
                    break;
                }
            }

            let u = key.vertex;
            done.insert(u);
            settled.push(u);

            for edge in &self.graph.edges[u] {
                if self.state.dist[u] + edge.weight < bound {
                    self.state.relax(u, edge.to, edge.weight);
                    if self.state.is_tree_edge(u, edge.to, edge.weight)
                        && !done.contains(&edge.to)
                    {
                        heap.push(Reverse(HeapKey {
                            dist: self.state.dist[edge.to],
                            hops: self.state.path_len[edge.to],
                            vertex: edge.to,
                        }));
                    }
                }
            }
        }

        (next_boundary, settled)
    }

    /// Shrinks the frontier to a pivot set by running `k` layers of bounded
    /// relaxation and keeping the frontier members whose shortest-path
    /// subtree within the explored region has at least `k` vertices.
    ///
    /// Returns `(pivots, working)` with `pivots ⊆ frontier ⊆ working` and
    /// `dist < bound` across `working`. Bails out with the whole frontier as
    /// pivots once the explored region exceeds `k · |frontier|` vertices.
    fn find_pivots(&mut self, bound: f64, frontier: &[usize]) -> (Vec<usize>, Vec<usize>) {
        let mut working: Vec<usize> = frontier.to_vec();
        let mut in_working: HashSet<usize> = frontier.iter().copied().collect();
        let mut layer: Vec<usize> = frontier.to_vec();
        let limit = self.k.saturating_mul(frontier.len());

        for _ in 0..self.k {
            let mut next_layer: Vec<usize> = Vec::new();
            for &u in &layer {
                for edge in &self.graph.edges[u] {
                    self.state.relax(u, edge.to, edge.weight);
                    if self.state.is_tree_edge(u, edge.to, edge.weight)
                        && self.state.dist[edge.to] < bound
                        && in_working.insert(edge.to)
                    {
                        working.push(edge.to);
                        next_layer.push(edge.to);
                    }
                }
            }
            if working.len() > limit {
                return (frontier.to_vec(), working);
            }
            if next_layer.is_empty() {
                break;
            }
            layer = next_layer;
        }

        // The recorded predecessors restricted to the explored region form a
        // forest; path lengths strictly decrease along parent pointers, so
        // accumulating in decreasing path-length order sums whole subtrees.
        let position: HashMap<usize, usize> = working
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, i))
            .collect();
        let mut parent: Vec<usize> = vec![usize::MAX; working.len()];
        for (i, &v) in working.iter().enumerate() {
            if let Some(p) = self.state.pred[v] {
                if p != v {
                    if let Some(&pi) = position.get(&p) {
                        parent[i] = pi;
                    }
                }
            }
        }

        let mut order: Vec<usize> = (0..working.len()).collect();
        order.sort_by(|&a, &b| {
            self.state.path_len[working[b]].cmp(&self.state.path_len[working[a]])
        });
        let mut subtree: Vec<usize> = vec![1; working.len()];
        for &i in &order {
            if parent[i] != usize::MAX {
                subtree[parent[i]] += subtree[i];
            }
        }

        let mut pivots: Vec<usize> = Vec::new();
        for &x in frontier {
            let i = position[&x];
            if parent[i] == usize::MAX && subtree[i] >= self.k {
                pivots.push(x);
            }
        }
        if pivots.is_empty() {
            pivots = frontier.to_vec();
        }
        (pivots, working)
    }
}
