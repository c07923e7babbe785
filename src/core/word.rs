//! Puzzle word representation
//!
//! A Word is one line of the waffle grid: exactly five letters, stored uppercase.

use std::fmt;
use thiserror::Error;

/// Number of letters in every grid word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter puzzle word
///
/// Letters are stored as `char` so word lists in any alphabet (Latin, Cyrillic, ...)
/// work unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word contains non-letter character {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is uppercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 letters
    /// - Any character is not alphabetic
    ///
    /// # Examples
    /// ```
    /// use waffle_daily::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let upper: Vec<char> = text.as_ref().trim().chars().flat_map(char::to_uppercase).collect();

        if upper.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(upper.len()));
        }

        if let Some(&bad) = upper.iter().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let mut letters = [' '; WORD_LENGTH];
        letters.copy_from_slice(&upper);

        Ok(Self {
            text: upper.into_iter().collect(),
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// First, middle and last letters: the three cells a word shares with crossing words
    #[inline]
    #[must_use]
    pub const fn crossings(&self) -> [char; 3] {
        [self.letters[0], self.letters[2], self.letters[4]]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
