use crate::bitset::Bitset;
use crate::graph::Graph;

/// Number of edges in a longest chordless (induced) path. Simultaneously
/// increments `freq[l]` for every induced path edge-count `l >= 1` visited.
pub fn longest_induced_path_length(g: &Graph, freq: &mut [u64]) -> usize {
    let n = g.order();
    let mut max_len = 0usize;

    for v in 0..n {
        let nbrs_v = g.neighbors(v);
        let remaining = Bitset::full_n(n).difference(nbrs_v.union(Bitset::singleton(v)));
        for w in nbrs_v.iter() {
            extend(g, remaining, w, &mut max_len, freq, 2);
        }
    }

    max_len.saturating_sub(1)
}

/// `remaining` never contains a vertex already on the path, including `last`.
/// Unlike the cycle walker, there is no closure condition: every node of the
/// recursion tree is itself a valid induced path and gets recorded.
fn extend(g: &Graph, mut remaining: Bitset, last: usize, max_len: &mut usize, freq: &mut [u64], k: usize) {
    if k > *max_len {
        *max_len = k;
    }
    freq[k - 1] += 1;

    let old_last_nbrs = g.neighbors(last);
    let candidates = old_last_nbrs & remaining;
    for nbr in candidates.iter() {
        let removed = remaining & old_last_nbrs;
        remaining = remaining.difference(old_last_nbrs);
        extend(g, remaining, nbr, max_len, freq, k + 1);
        remaining = remaining.union(removed);
    }
}
