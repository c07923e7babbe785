//! Initial grid scrambling
//!
//! Turns a solution into the grid a player starts from: a few cells left in place
//! (green), the rest permuted so none of them lands on its own solution letter.

mod derangement;
mod distribution;
mod engine;

pub use derangement::derange;
pub use distribution::{GreenCountDistribution, GreenWeight};
pub use engine::{ScrambleConfig, ScrambledGrid, scramble_initial_grid, scramble_with_greens};
