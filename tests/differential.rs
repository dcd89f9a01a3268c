//! Differential testing against from-scratch brute-force oracles.
//!
//! Exhaustively enumerates every labeled graph on `n <= 7` vertices and
//! checks all four engine measures against independent implementations
//! built without reusing any engine code. This is the kind of check that
//! catches a backtracking restore bug that wouldn't crash, just silently
//! mis-count.
//!
//! `n = 8` (2^28 labeled graphs) is left out of this exhaustive sweep: at
//! `n = 7` there are already 2^21 graphs, each checked against four
//! brute-force oracles, which is the practical ceiling for a test that runs
//! on every build; `n = 8` is instead covered non-exhaustively by the
//! `proptest`-generated random graphs in `tests/properties.rs`, which sample
//! up to `n = 8` without enumerating every labeled graph at that size.

use circumference::bitset::{Bitset, WIDTH};
use circumference::engine::{
    circumference, longest_induced_cycle_length, longest_induced_path_length, longest_path_length,
};
use circumference::graph::Graph;

fn adjacency_matrix(n: usize, mask: u32) -> Vec<Vec<bool>> {
    let mut m = vec![vec![false; n]; n];
    let mut idx = 0;
    for b in 1..n {
        for a in 0..b {
            if mask & (1 << idx) != 0 {
                m[a][b] = true;
                m[b][a] = true;
            }
            idx += 1;
        }
    }
    m
}

fn brute_longest_path(m: &[Vec<bool>], n: usize) -> usize {
    fn dfs(m: &[Vec<bool>], visited: &mut [bool], cur: usize, len: usize, best: &mut usize) {
        if len > *best {
            *best = len;
        }
        for nb in 0..visited.len() {
            if m[cur][nb] && !visited[nb] {
                visited[nb] = true;
                dfs(m, visited, nb, len + 1, best);
                visited[nb] = false;
            }
        }
    }
    let mut best = 0;
    let mut visited = vec![false; n];
    for start in 0..n {
        visited[start] = true;
        dfs(m, &mut visited, start, 0, &mut best);
        visited[start] = false;
    }
    best
}

fn brute_circumference(m: &[Vec<bool>], n: usize) -> usize {
    fn dfs(m: &[Vec<bool>], visited: &mut [bool], start: usize, cur: usize, len: usize, best: &mut usize) {
        for nb in 0..visited.len() {
            if !m[cur][nb] {
                continue;
            }
            if nb == start && len >= 3 {
                if len > *best {
                    *best = len;
                }
                continue;
            }
            if !visited[nb] {
                visited[nb] = true;
                dfs(m, visited, start, nb, len + 1, best);
                visited[nb] = false;
            }
        }
    }
    let mut best = 0;
    let mut visited = vec![false; n];
    for start in 0..n {
        visited[start] = true;
        dfs(m, &mut visited, start, start, 1, &mut best);
        visited[start] = false;
    }
    best
}

/// `true` iff the subgraph induced by `verts` is connected and every vertex
/// in it has degree exactly 2 (i.e. it's a disjoint union of cycles that
/// happens to be connected — a single cycle).
fn induces_a_cycle(m: &[Vec<bool>], verts: &[usize]) -> bool {
    if verts.len() < 3 {
        return false;
    }
    for &v in verts {
        let deg = verts.iter().filter(|&&u| u != v && m[v][u]).count();
        if deg != 2 {
            return false;
        }
    }
    is_connected(m, verts)
}

/// `true` iff the subgraph induced by `verts` is connected and its degree
/// sequence is that of a simple path (two degree-1 endpoints, rest
/// degree-2; or a single isolated vertex).
fn induces_a_path(m: &[Vec<bool>], verts: &[usize]) -> bool {
    if verts.len() == 1 {
        return true;
    }
    let mut ones = 0;
    for &v in verts {
        let deg = verts.iter().filter(|&&u| u != v && m[v][u]).count();
        match deg {
            1 => ones += 1,
            2 => {}
            _ => return false,
        }
    }
    ones == 2 && is_connected(m, verts)
}

fn is_connected(m: &[Vec<bool>], verts: &[usize]) -> bool {
    let mut visited = vec![false; m.len()];
    let mut stack = vec![verts[0]];
    visited[verts[0]] = true;
    let mut count = 1;
    while let Some(cur) = stack.pop() {
        for &v in verts {
            if m[cur][v] && !visited[v] {
                visited[v] = true;
                count += 1;
                stack.push(v);
            }
        }
    }
    count == verts.len()
}

fn subsets(n: usize) -> impl Iterator<Item = Vec<usize>> {
    (0u32..(1 << n)).map(move |mask| (0..n).filter(|&v| mask & (1 << v) != 0).collect())
}

fn brute_longest_induced_cycle(m: &[Vec<bool>], n: usize) -> usize {
    subsets(n)
        .filter(|verts| induces_a_cycle(m, verts))
        .map(|verts| verts.len())
        .max()
        .unwrap_or(0)
}

fn brute_longest_induced_path(m: &[Vec<bool>], n: usize) -> usize {
    subsets(n)
        .filter(|verts| induces_a_path(m, verts))
        .map(|verts| verts.len().saturating_sub(1))
        .max()
        .unwrap_or(0)
}

#[test]
fn exhaustive_small_graphs_match_brute_force() {
    for n in 1..=7 {
        let edge_count = n * n.saturating_sub(1) / 2;
        for mask in 0u32..(1u32 << edge_count) {
            let m = adjacency_matrix(n, mask);
            let edges: Vec<(usize, usize)> = (0..n)
                .flat_map(|a| (a + 1..n).map(move |b| (a, b)))
                .filter(|&(a, b)| m[a][b])
                .collect();
            let g = Graph::from_edges(n, edges).unwrap();

            assert_eq!(
                circumference(&g, Bitset::empty()),
                brute_circumference(&m, n),
                "circumference mismatch n={n} mask={mask:b}"
            );
            assert_eq!(
                longest_path_length(&g),
                brute_longest_path(&m, n),
                "longest path mismatch n={n} mask={mask:b}"
            );

            let mut freq = vec![0u64; WIDTH + 1];
            assert_eq!(
                longest_induced_cycle_length(&g, &mut freq),
                brute_longest_induced_cycle(&m, n),
                "induced cycle mismatch n={n} mask={mask:b}"
            );

            let mut freq = vec![0u64; WIDTH + 1];
            assert_eq!(
                longest_induced_path_length(&g, &mut freq),
                brute_longest_induced_path(&m, n),
                "induced path mismatch n={n} mask={mask:b}"
            );
        }
    }
}
