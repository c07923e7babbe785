//! Multiset derangement
//!
//! Rearranges letters so that no slot keeps its original letter. Seeded shuffles are
//! tried first (bounded); if none is fixed-point free, a repair pass swaps each
//! remaining fixed point away.

use crate::random::{Mulberry32, shuffle};
use tracing::{debug, warn};

/// Permute `letters` so that `result[i] != letters[i]` wherever possible
///
/// Always returns a permutation of the input multiset. A slot can only stay fixed
/// when no swap could move it, e.g. a single letter, or one letter filling more
/// than half the slots.
#[must_use]
pub fn derange(letters: &[char], rng: &mut Mulberry32, max_attempts: usize) -> Vec<char> {
    let mut candidate = letters.to_vec();

    for attempt in 1..=max_attempts {
        candidate.copy_from_slice(letters);
        shuffle(&mut candidate, rng);
        if fixed_points(letters, &candidate) == 0 {
            debug!(attempt, "derangement found by shuffling");
            return candidate;
        }
    }

    repair(letters, &mut candidate);

    let remaining = fixed_points(letters, &candidate);
    if remaining > 0 {
        warn!(remaining, len = letters.len(), "derangement left fixed points");
    } else {
        debug!(max_attempts, "derangement completed by repair pass");
    }

    candidate
}

fn fixed_points(original: &[char], candidate: &[char]) -> usize {
    original
        .iter()
        .zip(candidate)
        .filter(|(a, b)| a == b)
        .count()
}

/// Swap every fixed point with a partner slot
///
/// Prefers a partner where neither slot ends up fixed; otherwise any partner that at
/// least clears this slot.
fn repair(original: &[char], candidate: &mut [char]) {
    for i in 0..candidate.len() {
        if candidate[i] != original[i] {
            continue;
        }

        let len = candidate.len();
        let current: &[char] = candidate;
        let clears_here = |j: usize| j != i && current[j] != original[i];
        let safe = (1..len)
            .map(|step| (i + step) % len)
            .find(|&j| clears_here(j) && current[i] != original[j]);
        let partner = safe.or_else(|| (0..len).find(|&j| clears_here(j)));

        if let Some(j) = partner {
            candidate.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn sorted(mut chars: Vec<char>) -> Vec<char> {
        chars.sort_unstable();
        chars
    }

    #[test]
    fn derangement_has_no_fixed_points() {
        let original = letters("TRAPEZOIDLUNCH");
        for seed in 0..200 {
            let result = derange(&original, &mut Mulberry32::new(seed), 100);
            assert_eq!(fixed_points(&original, &result), 0, "seed {seed}");
            assert_eq!(sorted(result), sorted(original.clone()));
        }
    }

    #[test]
    fn derangement_with_duplicates() {
        let original = letters("EERIESTEEL");
        for seed in 0..200 {
            let result = derange(&original, &mut Mulberry32::new(seed), 100);
            assert_eq!(fixed_points(&original, &result), 0, "seed {seed}");
            assert_eq!(sorted(result), sorted(original.clone()));
        }
    }

    #[test]
    fn repair_fixes_when_shuffles_are_disabled() {
        let original = letters("ABCDEFG");
        let result = derange(&original, &mut Mulberry32::new(5), 0);
        assert_eq!(result.len(), original.len());
        assert_eq!(fixed_points(&original, &result), 0);
        assert_eq!(sorted(result), original);
    }

    #[test]
    fn repair_handles_crowded_duplicates() {
        // Half the slots share a letter: only the exact interleaving works
        let original = letters("AAABCD");
        let mut candidate = original.clone();
        repair(&original, &mut candidate);
        assert_eq!(fixed_points(&original, &candidate), 0);
        assert_eq!(sorted(candidate), original);
    }

    #[test]
    fn single_letter_stays_put() {
        let original = letters("Q");
        assert_eq!(derange(&original, &mut Mulberry32::new(1), 100), original);
    }

    #[test]
    fn impossible_majority_still_conserves_letters() {
        let original = letters("AAAAB");
        let result = derange(&original, &mut Mulberry32::new(1), 10);
        assert_eq!(sorted(result), original);
    }

    #[test]
    fn empty_input() {
        assert!(derange(&[], &mut Mulberry32::new(1), 100).is_empty());
    }

    #[test]
    fn deterministic_for_seed() {
        let original = letters("WAFFLEGRIDS");
        let a = derange(&original, &mut Mulberry32::new(77), 100);
        let b = derange(&original, &mut Mulberry32::new(77), 100);
        assert_eq!(a, b);
    }
}
