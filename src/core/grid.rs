//! The 5×5 waffle grid
//!
//! Geometry: a cell (row, col) is a gap iff both coordinates are odd. Every other
//! cell belongs to the horizontal word of its row (even rows) and/or the vertical
//! word of its column (even columns). Even/even cells are intersections.

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use thiserror::Error;

/// Side length of the grid
pub const GRID_SIZE: usize = WORD_LENGTH;

/// Number of words along each axis (rows 0/2/4, columns 0/2/4)
pub const WORDS_PER_AXIS: usize = 3;

/// Number of non-gap cells
pub const VALID_CELL_COUNT: usize = 21;

/// Even line indices that carry a word
pub const WORD_LINES: [usize; WORDS_PER_AXIS] = [0, 2, 4];

/// A grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Gap cells sit where an odd row meets an odd column
    #[must_use]
    pub const fn is_gap(self) -> bool {
        self.row % 2 == 1 && self.col % 2 == 1
    }

    /// In bounds and not a gap
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.in_bounds() && !self.is_gap()
    }

    /// Belongs to the horizontal word of its row
    #[must_use]
    pub const fn on_word_row(self) -> bool {
        self.row % 2 == 0
    }

    /// Belongs to the vertical word of its column
    #[must_use]
    pub const fn on_word_col(self) -> bool {
        self.col % 2 == 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}

/// All 21 valid positions in row-major order
#[must_use]
pub fn valid_positions() -> Vec<Position> {
    (0..GRID_SIZE)
        .flat_map(|row| (0..GRID_SIZE).map(move |col| Position::new(row, col)))
        .filter(|pos| !pos.is_gap())
        .collect()
}

/// Per-cell feedback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStatus {
    /// Green: letter matches the solution at this position
    Correct,
    /// Yellow: letter still needed elsewhere in this cell's row or column word
    Present,
    /// Gray: letter not needed, or its need was already claimed
    Wrong,
    /// Non-participating cell
    Gap,
}

/// One grid cell; gaps carry no letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    letter: Option<char>,
    status: CellStatus,
}

impl Cell {
    pub const GAP: Self = Self {
        letter: None,
        status: CellStatus::Gap,
    };

    #[must_use]
    pub const fn new(letter: char, status: CellStatus) -> Self {
        Self {
            letter: Some(letter),
            status,
        }
    }

    #[must_use]
    pub const fn letter(self) -> Option<char> {
        self.letter
    }

    #[must_use]
    pub const fn status(self) -> CellStatus {
        self.status
    }

    #[must_use]
    pub const fn is_gap(self) -> bool {
        matches!(self.status, CellStatus::Gap)
    }

    /// Same letter with a new status; gaps stay gaps
    #[must_use]
    pub const fn with_status(self, status: CellStatus) -> Self {
        if self.is_gap() {
            self
        } else {
            Self {
                letter: self.letter,
                status,
            }
        }
    }
}

/// Errors for grids and solutions that do not have the waffle shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolutionError {
    #[error("Expected 5 rows, got {0}")]
    RowCount(usize),
    #[error("Row {row} must have 5 characters, got {len}")]
    RowLength { row: usize, len: usize },
    #[error("Cell {position} must be a letter")]
    MissingLetter { position: Position },
    #[error("Gap cell {position} must be blank")]
    FilledGap { position: Position },
}

/// The solved letter layout for one puzzle
///
/// Immutable once built; gap positions hold `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    letters: [[Option<char>; GRID_SIZE]; GRID_SIZE],
}

impl Solution {
    /// Lay out three horizontal and three vertical words
    ///
    /// Rows 0/2/4 take the horizontal words; the odd letters of each vertical word
    /// fill rows 1 and 3 of columns 0/2/4. Crossing letters are taken from the
    /// horizontal words, so callers must pass words that agree at intersections.
    #[must_use]
    pub fn from_words(
        horizontal: [&Word; WORDS_PER_AXIS],
        vertical: [&Word; WORDS_PER_AXIS],
    ) -> Self {
        let mut letters = [[None; GRID_SIZE]; GRID_SIZE];

        for (word, &row) in horizontal.iter().zip(&WORD_LINES) {
            for (col, &letter) in word.letters().iter().enumerate() {
                letters[row][col] = Some(letter);
            }
        }

        for (word, &col) in vertical.iter().zip(&WORD_LINES) {
            for row in [1, 3] {
                letters[row][col] = Some(word.letter_at(row));
            }
        }

        Self { letters }
    }

    /// Parse five row strings, using a space for gaps
    ///
    /// # Errors
    /// Returns `SolutionError` when the shape is wrong or a gap/letter is misplaced.
    ///
    /// # Examples
    /// ```
    /// use waffle_daily::core::Solution;
    ///
    /// let solution = Solution::from_rows(&["ABCDE", "F H J", "KLMNO", "P R T", "UVWXY"]).unwrap();
    /// assert_eq!(solution.horizontal_words()[1], "KLMNO");
    /// assert_eq!(solution.vertical_words()[2], "EJOTY");
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, SolutionError> {
        if rows.len() != GRID_SIZE {
            return Err(SolutionError::RowCount(rows.len()));
        }

        let mut letters = [[None; GRID_SIZE]; GRID_SIZE];
        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text.chars().flat_map(char::to_uppercase).collect();
            if chars.len() != GRID_SIZE {
                return Err(SolutionError::RowLength {
                    row,
                    len: chars.len(),
                });
            }

            for (col, ch) in chars.into_iter().enumerate() {
                let position = Position::new(row, col);
                match (position.is_gap(), ch.is_alphabetic()) {
                    (true, false) => {}
                    (true, true) => return Err(SolutionError::FilledGap { position }),
                    (false, true) => letters[row][col] = Some(ch),
                    (false, false) => return Err(SolutionError::MissingLetter { position }),
                }
            }
        }

        Ok(Self { letters })
    }

    /// Letter at a position; `None` for gaps and out-of-bounds
    #[must_use]
    pub fn letter(&self, position: Position) -> Option<char> {
        if position.in_bounds() {
            self.letters[position.row][position.col]
        } else {
            None
        }
    }

    /// Words of rows 0/2/4
    #[must_use]
    pub fn horizontal_words(&self) -> [String; WORDS_PER_AXIS] {
        WORD_LINES.map(|row| {
            (0..GRID_SIZE)
                .filter_map(|col| self.letters[row][col])
                .collect()
        })
    }

    /// Words of columns 0/2/4
    #[must_use]
    pub fn vertical_words(&self) -> [String; WORDS_PER_AXIS] {
        WORD_LINES.map(|col| {
            (0..GRID_SIZE)
                .filter_map(|row| self.letters[row][col])
                .collect()
        })
    }

    /// The solved grid: every valid cell `Correct`
    #[must_use]
    pub fn solved_grid(&self) -> Grid {
        let mut grid = Grid::empty();
        for position in valid_positions() {
            if let Some(letter) = self.letter(position) {
                grid.cells[position.row][position.col] = Cell::new(letter, CellStatus::Correct);
            }
        }
        grid
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, letters) in self.letters.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for letter in letters {
                write!(f, "{}", letter.unwrap_or(' '))?;
            }
        }
        Ok(())
    }
}

/// Player-facing grid: letters plus their current statuses
///
/// Values are immutable snapshots; every transform returns a new grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// All-gap grid used as a blank canvas
    fn empty() -> Self {
        Self {
            cells: [[Cell::GAP; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Build a grid from a letter for each valid position, all marked `Wrong`
    ///
    /// Statuses are provisional until the grid is recolored.
    #[must_use]
    pub fn from_letters(letter_at: impl Fn(Position) -> char) -> Self {
        let mut grid = Self::empty();
        for position in valid_positions() {
            grid.cells[position.row][position.col] =
                Cell::new(letter_at(position), CellStatus::Wrong);
        }
        grid
    }

    /// Cell at a position
    ///
    /// # Panics
    /// Panics if the position is out of bounds
    #[must_use]
    pub const fn cell(&self, position: Position) -> Cell {
        self.cells[position.row][position.col]
    }

    #[must_use]
    pub const fn letter(&self, position: Position) -> Option<char> {
        self.cell(position).letter()
    }

    #[must_use]
    pub const fn status(&self, position: Position) -> CellStatus {
        self.cell(position).status()
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; GRID_SIZE]> {
        self.cells.iter()
    }

    /// Copy of this grid with new statuses; letters and gaps are untouched
    #[must_use]
    pub fn with_statuses(&self, status_at: impl Fn(Position) -> CellStatus) -> Self {
        let mut grid = self.clone();
        for position in valid_positions() {
            let cell = &mut grid.cells[position.row][position.col];
            *cell = cell.with_status(status_at(position));
        }
        grid
    }

    /// Copy of this grid with the letters of two cells exchanged
    ///
    /// Statuses travel with nothing: both cells come back `Wrong` until recolored.
    ///
    /// # Panics
    /// Panics if either position is out of bounds or a gap
    #[must_use]
    pub fn swapped(&self, a: Position, b: Position) -> Self {
        assert!(a.is_valid() && b.is_valid(), "cannot swap {a} and {b}");
        let mut grid = self.clone();
        let first = self.cell(a);
        let second = self.cell(b);
        grid.cells[a.row][a.col] = second.with_status(CellStatus::Wrong);
        grid.cells[b.row][b.col] = first.with_status(CellStatus::Wrong);
        grid
    }

    /// Number of cells with the given status
    #[must_use]
    pub fn count(&self, status: CellStatus) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.status() == status)
            .count()
    }

    /// Letters of the valid cells in row-major order
    #[must_use]
    pub fn letters(&self) -> Vec<char> {
        valid_positions()
            .into_iter()
            .filter_map(|position| self.letter(position))
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                write!(f, "{}", cell.letter().unwrap_or(' '))?;
            }
        }
        Ok(())
    }
}
