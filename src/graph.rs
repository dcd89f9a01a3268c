//! Immutable undirected simple graph over `{0, …, n - 1}`, backed by one
//! [`Bitset`] per vertex.

use thiserror::Error;

use crate::bitset::{Bitset, WIDTH};

/// Errors constructing a [`Graph`] directly (not via graph6 decoding — see
/// [`crate::graph6::Graph6Error`] for that path).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("graph has {n} vertices, but this build only supports up to {WIDTH}")]
    TooManyVertices { n: usize },
    #[error("edge ({0}, {1}) references a vertex outside 0..{2}")]
    VertexOutOfRange(usize, usize, usize),
    #[error("self-loop at vertex {0} is not allowed")]
    SelfLoop(usize),
}

/// An undirected simple graph on vertices `0..n`.
///
/// `adj[v]` never contains `v` itself, and `u ∈ adj[v]` iff `v ∈ adj[u]`.
#[derive(Clone)]
pub struct Graph {
    n: usize,
    adj: Box<[Bitset]>,
}

impl Graph {
    /// Builds a graph from its vertex count and an edge list. Rejects
    /// `n > WIDTH`, out-of-range endpoints and self-loops; duplicate edges
    /// are silently idempotent (the adjacency bitset just gets the same bit
    /// set twice).
    pub fn from_edges(
        n: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GraphError> {
        if n > WIDTH {
            return Err(GraphError::TooManyVertices { n });
        }
        let mut adj = vec![Bitset::empty(); n].into_boxed_slice();
        for (a, b) in edges {
            if a >= n || b >= n {
                return Err(GraphError::VertexOutOfRange(a, b, n));
            }
            if a == b {
                return Err(GraphError::SelfLoop(a));
            }
            adj[a].add(b);
            adj[b].add(a);
        }
        Ok(Graph { n, adj })
    }

    /// Number of vertices.
    #[inline]
    pub fn order(&self) -> usize {
        self.n
    }

    /// Neighbour set of `v`.
    #[inline]
    pub fn neighbors(&self, v: usize) -> Bitset {
        self.adj[v]
    }

    /// Total edge count.
    pub fn size(&self) -> usize {
        self.adj.iter().map(|s| s.size()).sum::<usize>() / 2
    }
}
