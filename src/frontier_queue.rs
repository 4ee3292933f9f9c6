//! Partial-sorting container driving the bounded multi-source recursion.
//!
//! Holds `(vertex, value)` pairs under a fixed upper bound `B`, at most one
//! live value per vertex. `insert` files pairs into value-ordered buckets
//! (D1); `batch_prepend` files whole blocks in front of them (D0), relying on
//! the caller's promise that the new values undercut everything currently
//! stored; `pull` extracts a block of smallest-value vertices together with a
//! bound separating them from whatever remains.

use std::collections::{BTreeMap, VecDeque};

use ordered_float::OrderedFloat;

#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Where the current minimum lives, as found by `peek_min`.
enum Slot {
    /// Index of a D0 block; the entry sits at the block's tail.
    Prepend(usize),
    /// Key of the leading D1 bucket.
    Bucket(OrderedFloat<f64>),
}

pub struct FrontierQueue {
    /// Pull granularity M.
    block_size: usize,
    /// Upper bound B; every live value is strictly below it.
    bound: f64,
    /// D0: prepended blocks, each sorted descending so the block minimum is
    /// at the tail. Entries may be stale; `index` is authoritative.
    prepend: VecDeque<Vec<(usize, f64)>>,
    /// D1: value buckets in ascending key order. Vertex lists may contain
    /// stale entries; `index` is authoritative.
    ordered: BTreeMap<OrderedFloat<f64>, Vec<usize>>,
    /// Live value per vertex.
    index: HashMap<usize, f64>,
}

impl FrontierQueue {
    pub fn new(block_size: usize, bound: f64) -> Self {
        FrontierQueue {
            block_size: block_size.max(1),
            bound,
            prepend: VecDeque::new(),
            ordered: BTreeMap::new(),
            index: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Stores `(vertex, value)`. Values at or above the bound are rejected;
    /// a value no better than the vertex's current one is ignored.
    pub fn insert(&mut self, vertex: usize, value: f64) {
        if !(value < self.bound) {
            return;
        }
        if let Some(&old) = self.index.get(&vertex) {
            if old <= value {
                return;
            }
        }
        self.index.insert(vertex, value);
        self.ordered
            .entry(OrderedFloat(value))
            .or_default()
            .push(vertex);
    }

    /// Files `items` as new front blocks. The caller guarantees every value
    /// is strictly below the current minimum; if the batch violates that, it
    /// degrades to plain insert semantics and stays correct.
    pub fn batch_prepend(&mut self, items: Vec<(usize, f64)>) {
        if items.is_empty() {
            return;
        }
        let floor = self.peek_min().map(|(value, _, _)| value);

        let mut fresh: Vec<(usize, f64)> = Vec::with_capacity(items.len());
        for (vertex, value) in items {
            if !(value < self.bound) {
                continue;
            }
            if let Some(&old) = self.index.get(&vertex) {
                if old <= value {
                    continue;
                }
            }
            self.index.insert(vertex, value);
            fresh.push((vertex, value));
        }
        if fresh.is_empty() {
            return;
        }

        if let Some(floor) = floor {
            if fresh.iter().any(|&(_, value)| value >= floor) {
                // Precondition violated: route through the ordered buckets.
                for (vertex, value) in fresh {
                    self.ordered
                        .entry(OrderedFloat(value))
                        .or_default()
                        .push(vertex);
                }
                return;
            }
        }

        // Descending sort puts each block's minimum at its tail. Chunks are
        // prepended largest-first so the smallest block ends up in front.
        fresh.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .expect("queue values are finite")
                .then(b.0.cmp(&a.0))
        });
        for chunk in fresh.chunks(self.block_size) {
            self.prepend.push_front(chunk.to_vec());
        }
    }

    /// Extracts a block of distinct vertices with the smallest stored values
    /// and returns it with the smallest remaining value, or the bound `B` if
    /// the queue is now empty.
    ///
    /// Normally the block holds at most M vertices, but it is extended while
    /// the smallest remaining value ties the largest extracted one, so the
    /// returned bound is strictly above every extracted value. Callers pass
    /// that bound down a recursion level, where `dist < bound` must hold for
    /// every handed-over vertex.
    pub fn pull(&mut self) -> (f64, Vec<usize>) {
        let mut pulled = Vec::new();
        let mut last = f64::NEG_INFINITY;
        while let Some((value, _, slot)) = self.peek_min() {
            if pulled.len() >= self.block_size && value > last {
                break;
            }
            pulled.push(self.take(slot));
            last = value;
        }
        let boundary = self.peek_min().map_or(self.bound, |(value, _, _)| value);
        (boundary, pulled)
    }

    fn is_live(&self, vertex: usize, value: f64) -> bool {
        self.index.get(&vertex).copied() == Some(value)
    }

    /// Locates the live minimum across D0 block tails and the leading D1
    /// bucket, discarding stale entries and exhausted blocks on the way.
    fn peek_min(&mut self) -> Option<(f64, usize, Slot)> {
        let mut best: Option<(f64, usize, Slot)> = None;

        let mut i = 0;
        while i < self.prepend.len() {
            while let Some(&(vertex, value)) = self.prepend[i].last() {
                if self.is_live(vertex, value) {
                    break;
                }
                self.prepend[i].pop();
            }
            match self.prepend[i].last() {
                None => {
                    self.prepend.remove(i);
                }
                Some(&(vertex, value)) => {
                    let better = match best {
                        None => true,
                        Some((bv, bx, _)) => (value, vertex) < (bv, bx),
                    };
                    if better {
                        best = Some((value, vertex, Slot::Prepend(i)));
                    }
                    i += 1;
                }
            }
        }

        loop {
            let Some(&key) = self.ordered.keys().next() else {
                break;
            };
            let value = key.into_inner();
            let tail = self
                .ordered
                .get(&key)
                .and_then(|bucket| bucket.last())
                .copied();
            match tail {
                None => {
                    self.ordered.remove(&key);
                }
                Some(vertex) if self.is_live(vertex, value) => {
                    let better = match best {
                        None => true,
                        Some((bv, _, _)) => value < bv,
                    };
                    if better {
                        best = Some((value, vertex, Slot::Bucket(key)));
                    }
                    break;
                }
                Some(_) => {
                    self.ordered.get_mut(&key).expect("key observed above").pop();
                }
            }
        }

        best
    }

    /// Removes the entry found by the immediately preceding `peek_min`.
    fn take(&mut self, slot: Slot) -> usize {
        let vertex = match slot {
            Slot::Prepend(i) => {
                let (vertex, _) = self.prepend[i].pop().expect("peeked block tail");
                if self.prepend[i].is_empty() {
                    self.prepend.remove(i);
                }
                vertex
            }
            Slot::Bucket(key) => {
                let bucket = self.ordered.get_mut(&key).expect("peeked bucket");
                let vertex = bucket.pop().expect("peeked bucket tail");
                if bucket.is_empty() {
                    self.ordered.remove(&key);
                }
                vertex
            }
        };
        self.index.remove(&vertex);
        vertex
    }
}
