//! Core domain types for the waffle puzzle
//!
//! Words, grid geometry, cells and solutions. Everything here is a plain value type:
//! transforms return new grids instead of mutating shared state.

mod grid;
mod word;

pub use grid::{
    Cell, CellStatus, GRID_SIZE, Grid, Position, Solution, SolutionError, VALID_CELL_COUNT,
    WORD_LINES, WORDS_PER_AXIS, valid_positions,
};
pub use word::{WORD_LENGTH, Word, WordError};
