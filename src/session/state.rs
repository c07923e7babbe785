//! One player's attempt at one puzzle

use crate::core::{CellStatus, Grid, Position, Solution};
use crate::feedback::{is_won, recolor};
use std::fmt;
use thiserror::Error;
use tracing::info;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    Playing,
    Won,
    Lost,
}

impl SessionStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Rejected swap requests
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapError {
    #[error("cannot swap a cell with itself")]
    SameCell,
    #[error("cell {position} is outside the grid")]
    OutOfBounds { position: Position },
    #[error("cell {position} is a gap")]
    GapCell { position: Position },
    #[error("cell {position} is already correct")]
    LockedCell { position: Position },
    #[error("the game is over ({status})")]
    SessionOver { status: SessionStatus },
}

/// Current grid, remaining swaps and status for one puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    puzzle_id: u32,
    solution: Solution,
    grid: Grid,
    swaps_remaining: u32,
    status: SessionStatus,
}

impl GameSession {
    /// Start a session from an initial grid
    ///
    /// The grid is recolored against the solution; an already-solved grid starts `Won`
    /// and a zero budget starts `Lost`.
    #[must_use]
    pub fn new(puzzle_id: u32, solution: Solution, initial: &Grid, swap_budget: u32) -> Self {
        let grid = recolor(initial, &solution);
        let status = if is_won(&grid) {
            SessionStatus::Won
        } else if swap_budget == 0 {
            SessionStatus::Lost
        } else {
            SessionStatus::Playing
        };

        Self {
            puzzle_id,
            solution,
            grid,
            swaps_remaining: swap_budget,
            status,
        }
    }

    #[must_use]
    pub const fn puzzle_id(&self) -> u32 {
        self.puzzle_id
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn solution(&self) -> &Solution {
        &self.solution
    }

    #[must_use]
    pub const fn swaps_remaining(&self) -> u32 {
        self.swaps_remaining
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// Check a swap without applying it
    ///
    /// # Errors
    /// Returns `SwapError` for terminal sessions, identical cells, out-of-bounds or
    /// gap cells, and cells that are already correct.
    pub fn validate_swap(&self, a: Position, b: Position) -> Result<(), SwapError> {
        if self.status.is_terminal() {
            return Err(SwapError::SessionOver {
                status: self.status,
            });
        }
        if a == b {
            return Err(SwapError::SameCell);
        }
        self.validate_tile(a)?;
        self.validate_tile(b)
    }

    /// Check that one cell may take part in a swap
    ///
    /// # Errors
    /// Returns `SwapError` for terminal sessions, out-of-bounds or gap cells, and
    /// cells that are already correct.
    pub fn validate_tile(&self, position: Position) -> Result<(), SwapError> {
        if self.status.is_terminal() {
            return Err(SwapError::SessionOver {
                status: self.status,
            });
        }
        if !position.in_bounds() {
            return Err(SwapError::OutOfBounds { position });
        }
        if position.is_gap() {
            return Err(SwapError::GapCell { position });
        }
        if self.grid.status(position) == CellStatus::Correct {
            return Err(SwapError::LockedCell { position });
        }
        Ok(())
    }

    /// Swap two cells, recolor, spend one swap and update the status
    ///
    /// # Errors
    /// Returns `SwapError` if the swap is rejected by [`Self::validate_swap`]; the
    /// session is left unchanged.
    pub fn apply_swap(&mut self, a: Position, b: Position) -> Result<SessionStatus, SwapError> {
        self.validate_swap(a, b)?;

        self.grid = recolor(&self.grid.swapped(a, b), &self.solution);
        self.swaps_remaining = self.swaps_remaining.saturating_sub(1);

        if is_won(&self.grid) {
            self.status = SessionStatus::Won;
        } else if self.swaps_remaining == 0 {
            self.status = SessionStatus::Lost;
        }

        if self.status.is_terminal() {
            info!(
                puzzle = self.puzzle_id,
                status = %self.status,
                swaps_remaining = self.swaps_remaining,
                "session finished"
            );
        }

        Ok(self.status)
    }
}
