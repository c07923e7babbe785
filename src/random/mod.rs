//! Seeded randomness
//!
//! Every randomized choice in puzzle generation and scrambling draws from a
//! `Mulberry32` stream, so equal seeds give byte-identical puzzles.

mod mulberry;
mod shuffle;

pub use mulberry::Mulberry32;
pub use shuffle::shuffle;
