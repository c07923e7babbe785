//! Daily puzzle assembly
//!
//! Ties the pieces together for one puzzle number: solution (with fallback), the
//! scrambled starting grid and the swap budget.

use crate::config::GameConfig;
use crate::core::{Grid, Solution, Word};
use crate::generator::generate_or_fallback;
use crate::scramble::scramble_initial_grid;
use crate::session::GameSession;
use tracing::debug;

/// Everything needed to start playing one puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPuzzle {
    number: u32,
    solution: Solution,
    initial: Grid,
    swap_budget: u32,
}

impl DailyPuzzle {
    /// Build the puzzle for a puzzle number
    ///
    /// The puzzle number is the seed; identical inputs always give an identical puzzle.
    ///
    /// # Examples
    /// ```
    /// use waffle_daily::config::GameConfig;
    /// use waffle_daily::puzzle::DailyPuzzle;
    /// use waffle_daily::wordlists::{WORDS, loader::words_from_slice};
    ///
    /// let words = words_from_slice(WORDS);
    /// let config = GameConfig::default();
    /// let puzzle = DailyPuzzle::build(&words, 42, &config);
    /// assert_eq!(puzzle, DailyPuzzle::build(&words, 42, &config));
    /// ```
    #[must_use]
    pub fn build(words: &[Word], number: u32, config: &GameConfig) -> Self {
        let seed = i64::from(number);
        let solution = generate_or_fallback(words, seed, &config.generator);
        let initial = scramble_initial_grid(&solution, seed, &config.scramble);
        debug!(number, "built daily puzzle");

        Self {
            number,
            solution,
            initial,
            swap_budget: config.swap_budget,
        }
    }

    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub const fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Starting grid, already colored
    #[must_use]
    pub const fn initial(&self) -> &Grid {
        &self.initial
    }

    #[must_use]
    pub const fn swap_budget(&self) -> u32 {
        self.swap_budget
    }

    /// Fresh session for this puzzle
    #[must_use]
    pub fn session(&self) -> GameSession {
        GameSession::new(
            self.number,
            self.solution.clone(),
            &self.initial,
            self.swap_budget,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellStatus;
    use crate::generator::fallback_solution;
    use crate::session::SessionStatus;
    use crate::wordlists::{WORDS, loader::words_from_slice};

    fn sorted(mut letters: Vec<char>) -> Vec<char> {
        letters.sort_unstable();
        letters
    }

    #[test]
    fn build_uses_generated_solution() {
        let words = words_from_slice(WORDS);
        let puzzle = DailyPuzzle::build(&words, 1, &GameConfig::default());

        assert_eq!(puzzle.number(), 1);
        assert_eq!(
            puzzle.solution().to_string(),
            "TROPE\nR P X\nINEPT\nA R R\nLLAMA"
        );
        assert_eq!(puzzle.swap_budget(), 15);
    }

    #[test]
    fn initial_grid_is_a_fair_scramble() {
        let words = words_from_slice(WORDS);
        let config = GameConfig::default();

        for number in 1..=10 {
            let puzzle = DailyPuzzle::build(&words, number, &config);
            let solved = puzzle.solution().solved_grid();
            let greens = puzzle.initial().count(CellStatus::Correct);

            assert_eq!(
                sorted(puzzle.initial().letters()),
                sorted(solved.letters()),
                "puzzle {number}"
            );
            assert!((4..=7).contains(&greens), "puzzle {number}: {greens} greens");
        }
    }

    #[test]
    fn empty_word_list_falls_back() {
        let puzzle = DailyPuzzle::build(&[], 3, &GameConfig::default());
        assert_eq!(puzzle.solution(), &fallback_solution());
    }

    #[test]
    fn session_starts_playing_with_full_budget() {
        let words = words_from_slice(WORDS);
        let config = GameConfig {
            swap_budget: 10,
            ..GameConfig::default()
        };
        let session = DailyPuzzle::build(&words, 5, &config).session();

        assert_eq!(session.puzzle_id(), 5);
        assert_eq!(session.swaps_remaining(), 10);
        assert_eq!(session.status(), SessionStatus::Playing);
    }
}
