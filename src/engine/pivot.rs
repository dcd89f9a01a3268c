use crate::bitset::Bitset;
use crate::graph::Graph;

/// Vertex of lowest degree in the subgraph induced by `included`, ties broken
/// by smallest index.
///
/// # Panics
/// Panics (in debug builds) if `included` is empty — callers must check
/// emptiness first, since "lowest degree of nothing" has no answer.
pub(super) fn lowest_degree_vertex(g: &Graph, included: Bitset) -> usize {
    debug_assert!(!included.is_empty());
    let mut best = None;
    let mut best_degree = usize::MAX;
    for v in included.iter() {
        let degree = (g.neighbors(v) & included).size();
        if degree < best_degree {
            best_degree = degree;
            best = Some(v);
        }
    }
    best.expect("included is non-empty")
}
