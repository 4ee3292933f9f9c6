#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// A weighted directed edge stored in a vertex's outgoing adjacency list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    pub to: usize,
    pub weight: f64,
}

/// Immutable forward adjacency indexed by vertex id. Vertex ids are dense
/// integers in `[0, vertices)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Graph {
    pub vertices: usize,
    pub edges: Vec<Vec<Edge>>,
}

impl Graph {
    pub fn new(vertices: usize) -> Self {
        Graph {
            vertices,
            edges: vec![Vec::new(); vertices],
        }
    }

    /// Adds a directed edge. The caller is responsible for keeping `from` and
    /// `to` in range; use [`Graph::from_edges`] for validated construction.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) {
        self.edges[from].push(Edge { to, weight });
    }

    /// Builds a graph from an edge list, rejecting edges that reference a
    /// vertex outside `[0, vertices)` or carry a negative or non-finite
    /// weight. Multi-edges and self-loops are accepted.
    pub fn from_edges(vertices: usize, edges: &[(usize, usize, f64)]) -> Result<Self, Error> {
        let mut graph = Graph::new(vertices);
        for &(from, to, weight) in edges {
            if from >= vertices || to >= vertices {
                return Err(Error::EdgeOutOfRange { from, to, vertices });
            }
            if !weight.is_finite() {
                return Err(Error::NonFiniteWeight { from, to });
            }
            if weight < 0.0 {
                return Err(Error::NegativeWeight { from, to, weight });
            }
            graph.add_edge(from, to, weight);
        }
        Ok(graph)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|adj| adj.len()).sum()
    }
}
