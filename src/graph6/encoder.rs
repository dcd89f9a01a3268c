use crate::graph::Graph;

use super::{ESCAPE, N};

/// Encodes `g` as one graph6 line, including the trailing `\n`.
///
/// Only the single-byte (`n < 63`) and 18-bit (`n < 258048`) order forms are
/// emitted; the 36-bit form is unreachable since `Graph::order()` is bounded
/// by the build's `WIDTH`, which never exceeds 256.
pub fn encode(g: &Graph) -> String {
    let n = g.order();
    let mut out = String::with_capacity(n + g.size());
    write_order(n, &mut out);

    let required_bits = n * n.saturating_sub(1) / 2;
    let mut bits = Vec::with_capacity(required_bits.next_multiple_of(6));
    for col in 1..n {
        for lin in 0..col {
            bits.push(g.neighbors(col).contains(lin));
        }
    }
    while bits.len() % 6 != 0 {
        bits.push(false);
    }

    for chunk in bits.chunks(6) {
        let mut six = 0u8;
        for &bit in chunk {
            six = (six << 1) | bit as u8;
        }
        out.push((six + N) as char);
    }

    out.push('\n');
    out
}

fn write_order(n: usize, out: &mut String) {
    if n < ESCAPE as usize - N as usize {
        out.push((n as u8 + N) as char);
        return;
    }
    out.push(ESCAPE as char);
    for shift in [2, 1, 0] {
        let part = ((n >> (shift * 6)) & 0x3f) as u8 + N;
        out.push(part as char);
    }
}
