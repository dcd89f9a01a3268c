//! [graph6 format](https://users.cecs.anu.edu.au/~bdm/data/formats.txt)
//! decoder and encoder for undirected, loop-free simple graphs.

mod decoder;
mod encoder;

pub use decoder::{decode, Graph6Error};
pub use encoder::encode;

pub(crate) const HEADER: &[u8] = b">>graph6<<";
pub(crate) const N: u8 = 63;
pub(crate) const ESCAPE: u8 = 126;
