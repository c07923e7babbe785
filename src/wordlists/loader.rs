//! Word list loading utilities
//!
//! Loads puzzle words from a file or from the embedded constant. Invalid lines are
//! skipped with a debug log rather than failing the whole list.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load words from a file, one per line
///
/// Blank lines and lines starting with `#` are ignored; anything that is not a
/// five-letter word is skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use waffle_daily::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(error) => {
                debug!(line, %error, "skipping word list entry");
                None
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use waffle_daily::wordlists::loader::words_from_slice;
/// use waffle_daily::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}
