//! Bitset-parallel backtracking engine for four structural path/cycle
//! measures (circumference, longest path, longest induced cycle, longest
//! induced path) over undirected simple graphs read from a graph6 stream.
//!
//! See [`engine`] for the measures themselves, [`graph6`] for the wire
//! format, and [`harness`] for the per-graph frequency/filter/output logic
//! that the binary's `main` wires up via [`cli`].

pub mod bitset;
pub mod cli;
pub mod engine;
pub mod graph;
pub mod graph6;
pub mod harness;
