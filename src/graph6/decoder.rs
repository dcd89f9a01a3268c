use thiserror::Error;

use super::{ESCAPE, HEADER, N};
use crate::bitset::WIDTH;
use crate::graph::{Graph, GraphError};

/// Everything that can go wrong decoding one line of a graph6 stream.
///
/// Every variant here is a *per-graph* failure: the harness logs it and
/// moves on to the next line rather than aborting the whole run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Graph6Error {
    #[error("line is empty")]
    EmptyLine,
    #[error("line is missing its terminating newline")]
    MissingNewline,
    #[error("line is truncated")]
    Truncated,
    #[error("byte {0:#04x} is outside the graph6 printable range 63..=126")]
    InvalidByte(u8),
    #[error("graph has {n} vertices, but this build only supports up to {WIDTH}")]
    TooManyVertices { n: usize },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Decodes one line of graph6 (including its trailing `\n`) into a [`Graph`].
///
/// A leading `>>graph6<<` header is accepted and skipped wherever it occurs,
/// though well-formed streams only ever carry it on the first line.
pub fn decode(line: &str) -> Result<Graph, Graph6Error> {
    let bytes = line.as_bytes();
    if bytes.is_empty() {
        return Err(Graph6Error::EmptyLine);
    }
    if *bytes.last().unwrap() != b'\n' {
        return Err(Graph6Error::MissingNewline);
    }
    let body = &bytes[..bytes.len() - 1];
    if body.is_empty() {
        return Err(Graph6Error::EmptyLine);
    }

    let mut idx = if body.starts_with(HEADER) { 10 } else { 0 };

    let (n, after_n) = read_order(body, idx)?;
    idx = after_n;

    if n > WIDTH {
        return Err(Graph6Error::TooManyVertices { n });
    }

    let required_bits = n * n.saturating_sub(1) / 2;
    let required_bytes = required_bits.div_ceil(6);
    if body.len() - idx < required_bytes {
        return Err(Graph6Error::Truncated);
    }

    let mut bits = BitReader {
        bytes: &body[idx..idx + required_bytes],
        byte: 0,
        bit: 0,
    };

    let mut edges = Vec::with_capacity(required_bits);
    for col in 1..n {
        for lin in 0..col {
            if bits.next_bit()? {
                edges.push((lin, col));
            }
        }
    }

    Graph::from_edges(n, edges).map_err(Graph6Error::from)
}

/// Reads the vertex count starting at `idx`, returning `(n, index after it)`.
fn read_order(body: &[u8], idx: usize) -> Result<(usize, usize), Graph6Error> {
    let first = byte_at(body, idx)?;
    if first != ESCAPE {
        return Ok((value(first)? as usize, idx + 1));
    }

    let second = byte_at(body, idx + 1)?;
    if second != ESCAPE {
        let n = read_be_6bit_groups(body, idx + 1, 3)?;
        return Ok((n, idx + 4));
    }

    let n = read_be_6bit_groups(body, idx + 2, 6)?;
    Ok((n, idx + 8))
}

fn read_be_6bit_groups(body: &[u8], start: usize, count: usize) -> Result<usize, Graph6Error> {
    let mut n = 0usize;
    for i in 0..count {
        let b = byte_at(body, start + i)?;
        n = (n << 6) | value(b)? as usize;
    }
    Ok(n)
}

fn byte_at(body: &[u8], idx: usize) -> Result<u8, Graph6Error> {
    body.get(idx).copied().ok_or(Graph6Error::Truncated)
}

fn value(b: u8) -> Result<u8, Graph6Error> {
    if (N..=ESCAPE).contains(&b) {
        Ok(b - N)
    } else {
        Err(Graph6Error::InvalidByte(b))
    }
}

struct BitReader<'a> {
    bytes: &'a [u8],
    byte: usize,
    bit: u8,
}

impl BitReader<'_> {
    /// Reads the next bit, MSB first within each byte.
    fn next_bit(&mut self) -> Result<bool, Graph6Error> {
        let raw = *self.bytes.get(self.byte).ok_or(Graph6Error::Truncated)?;
        let six = value(raw)?;
        let bit = (six >> (5 - self.bit)) & 1 != 0;
        self.bit += 1;
        if self.bit == 6 {
            self.bit = 0;
            self.byte += 1;
        }
        Ok(bit)
    }
}
