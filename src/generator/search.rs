//! Depth-first interlocking word search
//!
//! The word list is shuffled with the seed, then searched in that order:
//! - H1 (row 0) over every word
//! - V1, V2, V3 (columns 0/2/4) over words starting with H1's 1st, 3rd, 5th letter
//! - H2 (row 2) must read V1[2] _ V2[2] _ V3[2]; H3 (row 4) V1[4] _ V2[4] _ V3[4]
//!
//! The first complete, all-distinct combination wins. Puzzle quality is whatever
//! the shuffle order gives; changing the order or scoring candidates would change
//! every already-published daily puzzle.

use crate::core::{Solution, Word};
use crate::random::{Mulberry32, shuffle};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Search limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Upper bound on (V1, V2, V3) combinations examined across all H1 candidates
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 50_000,
        }
    }
}

/// Generation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("no interlocking word grid found after {attempts} attempts")]
    Exhausted { attempts: usize },
}

/// Seed-shuffled word index ready to search
pub struct PuzzleGenerator<'a> {
    words: Vec<&'a Word>,
    by_first: FxHashMap<char, Vec<usize>>,
    by_crossings: FxHashMap<[char; 3], Vec<usize>>,
    max_attempts: usize,
}

impl<'a> PuzzleGenerator<'a> {
    /// Shuffle `words` with `seed` and index them
    ///
    /// The list is shuffled exactly as given, so the order matches any other
    /// generator fed the same list and seed; duplicates are dropped afterwards,
    /// keeping the first occurrence in shuffled order.
    #[must_use]
    pub fn new(words: &'a [Word], seed: i64, config: &GeneratorConfig) -> Self {
        let mut shuffled: Vec<&Word> = words.iter().collect();
        shuffle(&mut shuffled, &mut Mulberry32::new(seed));

        let mut seen = FxHashSet::default();
        let words: Vec<&Word> = shuffled
            .into_iter()
            .filter(|w| seen.insert(w.text()))
            .collect();

        let mut by_first: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        let mut by_crossings: FxHashMap<[char; 3], Vec<usize>> = FxHashMap::default();
        for (index, word) in words.iter().enumerate() {
            by_first.entry(word.letter_at(0)).or_default().push(index);
            by_crossings.entry(word.crossings()).or_default().push(index);
        }

        Self {
            words,
            by_first,
            by_crossings,
            max_attempts: config.max_attempts,
        }
    }

    /// Number of distinct words being searched
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Run the search
    ///
    /// # Errors
    /// Returns `GenerationError::Exhausted` when the attempt cap is hit or every H1
    /// candidate has been tried without success.
    pub fn generate(&self) -> Result<Solution, GenerationError> {
        let mut attempts = 0;

        for h1 in 0..self.words.len() {
            let [a, b, c] = self.words[h1].crossings();

            for &v1 in self.starting_with(a) {
                if v1 == h1 {
                    continue;
                }
                for &v2 in self.starting_with(b) {
                    if v2 == h1 || v2 == v1 {
                        continue;
                    }
                    for &v3 in self.starting_with(c) {
                        if v3 == h1 || v3 == v1 || v3 == v2 {
                            continue;
                        }
                        if attempts >= self.max_attempts {
                            return Err(GenerationError::Exhausted { attempts });
                        }
                        attempts += 1;

                        if let Some(solution) = self.complete(h1, [v1, v2, v3]) {
                            debug!(attempts, h1 = %self.words[h1], "generated solution");
                            return Ok(solution);
                        }
                    }
                }
            }
        }

        Err(GenerationError::Exhausted { attempts })
    }

    /// Find H2 and H3 for a fixed first row and column triple
    fn complete(&self, h1: usize, verticals: [usize; 3]) -> Option<Solution> {
        let [v1, v2, v3] = verticals.map(|index| self.words[index]);
        let mut used = vec![h1, verticals[0], verticals[1], verticals[2]];

        let h2 = self.first_unused(
            [v1.letter_at(2), v2.letter_at(2), v3.letter_at(2)],
            &used,
        )?;
        used.push(h2);
        let h3 = self.first_unused(
            [v1.letter_at(4), v2.letter_at(4), v3.letter_at(4)],
            &used,
        )?;

        Some(Solution::from_words(
            [self.words[h1], self.words[h2], self.words[h3]],
            [v1, v2, v3],
        ))
    }

    fn starting_with(&self, letter: char) -> &[usize] {
        self.by_first.get(&letter).map_or(&[], Vec::as_slice)
    }

    fn first_unused(&self, crossings: [char; 3], used: &[usize]) -> Option<usize> {
        self.by_crossings
            .get(&crossings)?
            .iter()
            .copied()
            .find(|index| !used.contains(index))
    }
}

/// Generate the solution for a seed
///
/// # Errors
/// Returns `GenerationError::Exhausted` if no grid is found within the attempt cap.
///
/// # Examples
/// ```
/// use waffle_daily::core::Word;
/// use waffle_daily::generator::{GeneratorConfig, generate_solution};
///
/// let words: Vec<Word> = ["ABCDE", "KLMNO", "UVWXY", "AFKPU", "CHMRW", "EJOTY"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let solution = generate_solution(&words, 2, &GeneratorConfig::default()).unwrap();
/// assert_eq!(solution.horizontal_words(), ["ABCDE", "KLMNO", "UVWXY"]);
/// ```
pub fn generate_solution(
    words: &[Word],
    seed: i64,
    config: &GeneratorConfig,
) -> Result<Solution, GenerationError> {
    PuzzleGenerator::new(words, seed, config).generate()
}
