//! The bitset-parallel backtracking engine: four pure measures over a
//! [`Graph`](crate::graph::Graph), each driven by its own recursive walker.
//!
//! The four walkers (circumference, longest path, longest induced cycle,
//! longest induced path) share a family resemblance — seed a short path,
//! extend candidate-by-candidate through `remaining`, restore on backtrack —
//! but are kept as four separate functions rather than one walker generalised
//! over closures. The closure-check and chord-pruning differences between
//! them are subtle enough that a shared abstraction would hide more than it
//! would save.

mod circumference;
mod induced_cycle;
mod induced_path;
mod longest_path;
mod pivot;

pub use circumference::circumference;
pub use induced_cycle::longest_induced_cycle_length;
pub use induced_path::longest_induced_path_length;
pub use longest_path::longest_path_length;
