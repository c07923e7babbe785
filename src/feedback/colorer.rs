//! Correct / present / wrong status computation
//!
//! Duplicate letters follow Wordle-style need counting, applied to each of the six
//! words independently:
//! 1. Exact matches are `Correct`.
//! 2. Each word collects the solution letters of its not-yet-correct cells as a
//!    remaining-need multiset.
//! 3. Non-correct cells are scanned in row-major order. A cell claims one unit of
//!    need for its letter from its row word and, separately, from its column word;
//!    either claim marks it `Present`.
//!
//! A word needing one `X` can therefore color only one misplaced `X` yellow, while an
//! intersection cell may still be yellow through its column after the row's need
//! was claimed by an earlier cell.

use crate::core::{CellStatus, GRID_SIZE, Grid, Position, Solution, valid_positions};
use rustc_hash::FxHashMap;

type NeedCounts = FxHashMap<char, u8>;

/// Recompute all statuses of `grid` against `solution`
///
/// Pure: returns a new grid with the same letters. Gap cells keep `Gap`.
///
/// # Examples
/// ```
/// use waffle_daily::core::{CellStatus, Position, Solution};
/// use waffle_daily::feedback::{is_won, recolor};
///
/// let solution = Solution::from_rows(&["ABCDE", "F H J", "KLMNO", "P R T", "UVWXY"]).unwrap();
/// let grid = solution.solved_grid().swapped(Position::new(0, 0), Position::new(0, 1));
/// let colored = recolor(&grid, &solution);
///
/// assert_eq!(colored.status(Position::new(0, 0)), CellStatus::Present);
/// assert!(!is_won(&colored));
/// ```
#[must_use]
pub fn recolor(grid: &Grid, solution: &Solution) -> Grid {
    let positions = valid_positions();
    let mut statuses = [[CellStatus::Gap; GRID_SIZE]; GRID_SIZE];

    // Pass 1: exact matches
    for &position in &positions {
        statuses[position.row][position.col] =
            if grid.letter(position) == solution.letter(position) {
                CellStatus::Correct
            } else {
                CellStatus::Wrong
            };
    }

    // Pass 2: remaining need per word line
    let mut row_needs: [NeedCounts; GRID_SIZE] = Default::default();
    let mut col_needs: [NeedCounts; GRID_SIZE] = Default::default();
    for &position in &positions {
        if statuses[position.row][position.col] == CellStatus::Correct {
            continue;
        }
        let Some(needed) = solution.letter(position) else {
            continue;
        };
        if position.on_word_row() {
            *row_needs[position.row].entry(needed).or_insert(0) += 1;
        }
        if position.on_word_col() {
            *col_needs[position.col].entry(needed).or_insert(0) += 1;
        }
    }

    // Pass 3: claim needs in scan order
    for &position in &positions {
        if statuses[position.row][position.col] == CellStatus::Correct {
            continue;
        }
        let Some(letter) = grid.letter(position) else {
            continue;
        };
        if position.on_word_row() && claim(&mut row_needs[position.row], letter) {
            statuses[position.row][position.col] = CellStatus::Present;
        }
        if position.on_word_col() && claim(&mut col_needs[position.col], letter) {
            statuses[position.row][position.col] = CellStatus::Present;
        }
    }

    grid.with_statuses(|position: Position| statuses[position.row][position.col])
}

/// Take one unit of need for `letter`, if any remains
fn claim(needs: &mut NeedCounts, letter: char) -> bool {
    match needs.get_mut(&letter) {
        Some(count) if *count > 0 => {
            *count -= 1;
            true
        }
        _ => false,
    }
}

/// True iff every valid cell is `Correct`; gaps are ignored
#[must_use]
pub fn is_won(grid: &Grid) -> bool {
    valid_positions()
        .into_iter()
        .all(|position| grid.status(position) == CellStatus::Correct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VALID_CELL_COUNT;
    use crate::core::CellStatus::{Correct, Present, Wrong};

    fn latin() -> Solution {
        Solution::from_rows(&["ABCDE", "F H J", "KLMNO", "P R T", "UVWXY"]).unwrap()
    }

    fn grid_from_rows(rows: &[&str]) -> Grid {
        let parsed = Solution::from_rows(rows).unwrap();
        Grid::from_letters(|position| parsed.letter(position).unwrap())
    }

    fn row_statuses(grid: &Grid, row: usize) -> Vec<CellStatus> {
        (0..GRID_SIZE)
            .map(|col| grid.status(Position::new(row, col)))
            .collect()
    }

    #[test]
    fn solved_grid_is_won() {
        let solution = latin();
        let grid = grid_from_rows(&["ABCDE", "F H J", "KLMNO", "P R T", "UVWXY"]);
        let colored = recolor(&grid, &solution);

        assert_eq!(colored.count(Correct), VALID_CELL_COUNT);
        assert!(is_won(&colored));
    }

    #[test]
    fn unrecolored_grid_is_not_won() {
        // Letters match but statuses are still provisional
        let grid = grid_from_rows(&["ABCDE", "F H J", "KLMNO", "P R T", "UVWXY"]);
        assert!(!is_won(&grid));
    }

    #[test]
    fn gaps_keep_gap_status() {
        let solution = latin();
        let colored = recolor(&solution.solved_grid(), &solution);
        assert_eq!(colored.count(CellStatus::Gap), 4);
        assert_eq!(colored.status(Position::new(3, 3)), CellStatus::Gap);
    }

    #[test]
    fn duplicate_letter_only_one_present() {
        // Row 0 needs А, Б and В. The candidate shows two А: the first in scan order
        // claims the single need, the second finds column 2 needs only В.
        let solution =
            Solution::from_rows(&["АБВГД", "Е Ж З", "ИХЛМН", "О П Р", "САТУФ"]).unwrap();
        let candidate = grid_from_rows(&["ХААГД", "Е Ж З", "ИБЛМН", "О П Р", "СВТУФ"]);

        let colored = recolor(&candidate, &solution);

        assert_eq!(
            row_statuses(&colored, 0),
            vec![Wrong, Present, Wrong, Correct, Correct]
        );
        assert_eq!(colored.status(Position::new(2, 1)), Wrong);
        assert_eq!(colored.status(Position::new(4, 1)), Wrong);
    }

    #[test]
    fn intersection_uses_column_need_after_row_claimed() {
        // Solution row 0 is ABCDE and column 2 holds a B at (2, 2).
        let solution =
            Solution::from_rows(&["ABCDE", "F G H", "IJBLM", "N O P", "QRSTU"]).unwrap();
        // Swaps (0,0)<->(0,1) and (0,2)<->(2,2) applied to the solution
        let candidate = grid_from_rows(&["BABDE", "F G H", "IJCLM", "N O P", "QRSTU"]);

        let colored = recolor(&candidate, &solution);

        // (0,0) B takes row 0's only B need
        assert_eq!(colored.status(Position::new(0, 0)), Present);
        assert_eq!(colored.status(Position::new(0, 1)), Present);
        // (0,2) B: row need exhausted, but column 2 still needs a B
        assert_eq!(colored.status(Position::new(0, 2)), Present);
        // (2,2) C: column 2 needs the C from (0, 2)
        assert_eq!(colored.status(Position::new(2, 2)), Present);
    }

    #[test]
    fn letter_absent_from_both_lines_is_wrong() {
        let solution = latin();
        // Swap two cells whose letters appear in neither crossing word
        let grid = solution
            .solved_grid()
            .swapped(Position::new(0, 1), Position::new(4, 3));
        let colored = recolor(&grid, &solution);

        assert_eq!(colored.status(Position::new(0, 1)), Wrong);
        assert_eq!(colored.status(Position::new(4, 3)), Wrong);
        assert_eq!(colored.count(Correct), VALID_CELL_COUNT - 2);
    }

    #[test]
    fn column_only_cell_can_be_present() {
        let solution = latin();
        // F (1,0) and P (3,0) both belong to column 0 only
        let grid = solution
            .solved_grid()
            .swapped(Position::new(1, 0), Position::new(3, 0));
        let colored = recolor(&grid, &solution);

        assert_eq!(colored.status(Position::new(1, 0)), Present);
        assert_eq!(colored.status(Position::new(3, 0)), Present);
    }

    #[test]
    fn recolor_is_idempotent() {
        let solution = latin();
        let grid = solution
            .solved_grid()
            .swapped(Position::new(0, 0), Position::new(2, 4))
            .swapped(Position::new(1, 2), Position::new(4, 1));

        let once = recolor(&grid, &solution);
        let twice = recolor(&once, &solution);
        assert_eq!(once, twice);
    }

    #[test]
    fn recolor_keeps_letters() {
        let solution = latin();
        let grid = solution
            .solved_grid()
            .swapped(Position::new(0, 0), Position::new(4, 4));
        let colored = recolor(&grid, &solution);
        assert_eq!(colored.letters(), grid.letters());
    }
}
