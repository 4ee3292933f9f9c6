//! Single-source shortest paths for directed graphs with non-negative real
//! edge weights, via the recursive frontier-reduction algorithm of Duan, Mao,
//! Mao, Shu, and Yin (2025): O(m log^(2/3) n) in the comparison-addition
//! model.

pub mod dijkstra;
pub mod frontier_queue;
pub mod graph;
pub mod solver;
pub mod state;

pub use graph::{Edge, Graph};
pub use solver::Solver;
pub use state::{DistanceState, INFINITY};

/// Error kinds surfaced by [`shortest_paths`]. Each rejects the call before
/// any computation state exists.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    InvalidVertexCount,

    SourceOutOfRange { source: usize, vertices: usize },

    EdgeOutOfRange {
        from: usize,
        to: usize,
        vertices: usize,
    },

    NegativeWeight { from: usize, to: usize, weight: f64 },

    NonFiniteWeight { from: usize, to: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidVertexCount => write!(f, "vertex count must be positive"),
            Error::SourceOutOfRange { source, vertices } => write!(
                f,
                "source vertex {source} out of range for {vertices} vertices"
            ),
            Error::EdgeOutOfRange { from, to, vertices } => write!(
                f,
                "edge ({from}, {to}) references a vertex outside 0..{vertices}"
            ),
            Error::NegativeWeight { from, to, weight } => {
                write!(f, "negative weight {weight} on edge ({from}, {to})")
            }
            Error::NonFiniteWeight { from, to } => {
                write!(f, "non-finite weight on edge ({from}, {to})")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// Computes shortest-path distances from `source` to every vertex of the
/// graph given as `vertices` and an edge list.
///
/// Returns a vector of length `vertices` with `distances[source] == 0.0` and
/// [`INFINITY`] for unreachable vertices. Multi-edges and self-loops are
/// allowed; edges out of range and negative or non-finite weights are
/// rejected up front.
pub fn shortest_paths(
    vertices: usize,
    edges: &[(usize, usize, f64)],
    source: usize,
) -> Result<Vec<f64>> {
    if vertices == 0 {
        return Err(Error::InvalidVertexCount);
    }
    if source >= vertices {
        return Err(Error::SourceOutOfRange { source, vertices });
    }
    let graph = Graph::from_edges(vertices, edges)?;
    let mut solver = Solver::new(graph);
    Ok(solver.solve(source))
}
