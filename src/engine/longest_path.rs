use crate::bitset::Bitset;
use crate::graph::Graph;

/// Number of edges in a longest simple path. `0` on an edgeless graph.
pub fn longest_path_length(g: &Graph) -> usize {
    let n = g.order();
    let mut best = 0usize;

    'outer: for v in 0..n {
        for w in g.neighbors(v).iter() {
            let mut remaining = Bitset::full_n(n);
            remaining.remove(v);
            remaining.remove(w);
            extend(g, remaining, w, &mut best, 2);
            if best == n {
                break 'outer;
            }
        }
    }

    best.saturating_sub(1)
}

/// `remaining` never contains a vertex already on the path, including `last`.
fn extend(g: &Graph, mut remaining: Bitset, last: usize, best: &mut usize, k: usize) {
    if k > *best {
        *best = k;
    }
    let candidates = g.neighbors(last) & remaining;
    for nbr in candidates.iter() {
        remaining.remove(nbr);
        extend(g, remaining, nbr, best, k + 1);
        remaining.add(nbr);
    }
}
