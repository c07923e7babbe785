//! Weighted distribution over the number of pre-solved cells
//!
//! The green count is a difficulty knob, so it lives in configuration rather than
//! code. Two presets exist: `standard` (4–7) and `gentle` (6–8).

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// One allowed green count and its relative weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreenWeight {
    pub greens: usize,
    pub weight: u32,
}

/// Discrete distribution sampled with a single PRNG draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GreenCountDistribution {
    weights: Vec<GreenWeight>,
}

impl GreenCountDistribution {
    #[must_use]
    pub const fn new(weights: Vec<GreenWeight>) -> Self {
        Self { weights }
    }

    /// 4–7 greens, centred on 6
    #[must_use]
    pub fn standard() -> Self {
        Self::from_pairs(&[(4, 1), (5, 3), (6, 4), (7, 2)])
    }

    /// 6–8 greens, centred on 7
    #[must_use]
    pub fn gentle() -> Self {
        Self::from_pairs(&[(6, 2), (7, 5), (8, 3)])
    }

    fn from_pairs(pairs: &[(usize, u32)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|&(greens, weight)| GreenWeight { greens, weight })
                .collect(),
        )
    }

    #[must_use]
    pub fn weights(&self) -> &[GreenWeight] {
        &self.weights
    }

    /// Smallest and largest configured green count
    #[must_use]
    pub fn range(&self) -> Option<RangeInclusive<usize>> {
        let min = self.weights.iter().map(|w| w.greens).min()?;
        let max = self.weights.iter().map(|w| w.greens).max()?;
        Some(min..=max)
    }

    /// Map a draw in [0, 1) onto a green count
    ///
    /// Entries are walked in order, accumulating weight; the first entry whose
    /// cumulative share exceeds the draw wins. An empty distribution yields 0.
    #[must_use]
    pub fn sample(&self, draw: f64) -> usize {
        let total: u32 = self.weights.iter().map(|w| w.weight).sum();
        let target = draw * f64::from(total);

        let mut cumulative = 0u32;
        for entry in &self.weights {
            cumulative += entry.weight;
            if target < f64::from(cumulative) {
                return entry.greens;
            }
        }

        self.weights.last().map_or(0, |w| w.greens)
    }
}

impl Default for GreenCountDistribution {
    fn default() -> Self {
        Self::standard()
    }
}
