//! Seeded Fisher–Yates shuffle

use super::Mulberry32;

/// Shuffle a slice in place
///
/// Walks from the last index down, swapping each element with one drawn from
/// `0..=i`. Identical seeds and inputs always produce identical orders.
pub fn shuffle<T>(items: &mut [T], rng: &mut Mulberry32) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}
