use crate::bitset::Bitset;
use crate::graph::Graph;

/// Vertex count of a largest chordless cycle. Simultaneously increments
/// `freq[l]` for every induced cycle length `l >= 3` the walker visits (this
/// is a walker-multiplicity, not a count of distinct cycles — the same cycle
/// is discovered once per starting vertex and per ordered neighbour pair).
pub fn longest_induced_cycle_length(g: &Graph, freq: &mut [u64]) -> usize {
    let n = g.order();
    let mut max_len = 0usize;

    for v in 0..n {
        let nbrs_v = g.neighbors(v);
        let remaining = Bitset::full_n(n).difference(nbrs_v.union(Bitset::singleton(v)));
        for w in nbrs_v.iter() {
            for u in nbrs_v.iter_after(w) {
                extend(g, remaining, u, w, &mut max_len, freq, 3);
            }
        }
    }

    max_len
}

/// `remaining` never contains a vertex already on the path, including `last`.
fn extend(
    g: &Graph,
    mut remaining: Bitset,
    last: usize,
    first: usize,
    max_len: &mut usize,
    freq: &mut [u64],
    k: usize,
) {
    if g.neighbors(last).contains(first) {
        if k > *max_len {
            *max_len = k;
        }
        freq[k] += 1;
        return;
    }
    if (g.neighbors(first) & remaining).is_empty() {
        return;
    }
    let old_last_nbrs = g.neighbors(last);
    let candidates = old_last_nbrs & remaining;
    for nbr in candidates.iter() {
        let removed = remaining & old_last_nbrs;
        remaining = remaining.difference(old_last_nbrs);
        extend(g, remaining, nbr, first, max_len, freq, k + 1);
        remaining = remaining.union(removed);
    }
}
