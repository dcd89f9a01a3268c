use crate::bitset::Bitset;
use crate::graph::Graph;

use super::pivot::lowest_degree_vertex;

/// Length (vertex count) of a longest cycle in the subgraph induced by
/// `V \ excluded`. `0` if that subgraph is acyclic.
///
/// Callers computing the whole-graph measure pass `excluded = Bitset::empty()`.
pub fn circumference(g: &Graph, excluded: Bitset) -> usize {
    let n = g.order();
    let excluded_count = excluded.size();

    for i in (3..=n).rev() {
        let mut forbidden = excluded;
        for _ in 0..=(n - i) {
            let included = forbidden.complement_n(n);
            if included.is_empty() {
                // The induced subgraph has run out of vertices entirely;
                // no smaller target length can do better either.
                return 0;
            }
            let v = lowest_degree_vertex(g, included);
            let nbrs = g.neighbors(v) & included;
            for w in nbrs.iter() {
                for u in nbrs.iter_after(w) {
                    let mut remaining = included;
                    remaining.remove(v);
                    remaining.remove(w);
                    remaining.remove(u);
                    if can_close_cycle(g, remaining, u, w, i - excluded_count, 3) {
                        return i;
                    }
                }
            }
            forbidden.add(v);
        }
    }
    0
}

/// Decides whether the path `first … last` (currently of length `k`, with
/// `remaining` candidates still free) can be extended into a cycle of
/// exactly `target` vertices. `remaining` never contains a vertex already on
/// the path, including `last`.
fn can_close_cycle(g: &Graph, mut remaining: Bitset, last: usize, first: usize, target: usize, k: usize) -> bool {
    if k == target {
        return g.neighbors(last).contains(first);
    }
    if (g.neighbors(first) & remaining).is_empty() {
        return false;
    }
    let candidates = g.neighbors(last) & remaining;
    for nbr in candidates.iter() {
        remaining.remove(nbr);
        if can_close_cycle(g, remaining, nbr, first, target, k + 1) {
            return true;
        }
        remaining.add(nbr);
    }
    false
}
