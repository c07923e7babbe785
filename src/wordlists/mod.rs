//! Word lists for puzzle generation
//!
//! The default list is embedded in the binary; custom lists load from files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_uppercase_five_letters() {
        for &word in WORDS {
            assert_eq!(word.chars().count(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn list_is_large_enough_to_generate() {
        assert!(WORDS_COUNT > 1000, "only {WORDS_COUNT} words");
    }

    #[test]
    fn fallback_words_are_listed() {
        for word in ["LANCE", "NEVER", "HOLLY", "LUNCH", "NOVEL", "EARLY"] {
            assert!(WORDS.contains(&word), "{word} missing");
        }
    }
}
