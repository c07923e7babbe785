//! Audit command
//!
//! Rebuilds the puzzle for every seed in a range and checks the guarantees each
//! daily puzzle must satisfy. Seeds are independent, so they are checked in parallel.

use crate::config::GameConfig;
use crate::core::{Solution, Word, valid_positions};
use crate::feedback::is_won;
use crate::generator::{fallback_solution, generate_solution};
use crate::scramble::{ScrambledGrid, scramble_with_greens};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};
use tracing::warn;

/// A guarantee broken by one seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Two builds of the same seed differed
    NonDeterministic,
    /// The starting grid does not hold the solution's letters
    LettersNotConserved,
    /// A scrambled cell landed on its own letter
    NotDeranged { row: usize, col: usize },
    /// The number of pre-solved cells is outside the configured range
    GreensOutOfRange { greens: usize },
    /// The starting grid is already the solution
    AlreadySolved,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonDeterministic => write!(f, "puzzle differs between runs"),
            Self::LettersNotConserved => write!(f, "letters not conserved"),
            Self::NotDeranged { row, col } => {
                write!(f, "scrambled cell ({}, {}) kept its letter", row + 1, col + 1)
            }
            Self::GreensOutOfRange { greens } => write!(f, "{greens} greens out of range"),
            Self::AlreadySolved => write!(f, "starting grid is solved"),
        }
    }
}

/// Outcome for one seed
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub seed: u32,
    pub greens: usize,
    pub used_fallback: bool,
    pub violations: Vec<Violation>,
}

/// Summary over a seed range
#[derive(Debug)]
pub struct AuditResult {
    pub seeds_checked: usize,
    pub fallbacks: usize,
    pub green_distribution: BTreeMap<usize, usize>,
    pub failures: Vec<(u32, Violation)>,
    pub duration: Duration,
}

impl AuditResult {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Check a single seed
#[must_use]
pub fn audit_seed(words: &[Word], seed: u32, config: &GameConfig) -> SeedReport {
    let build = || {
        let seed = i64::from(seed);
        let generated = generate_solution(words, seed, &config.generator);
        let used_fallback = generated.is_err();
        let solution = generated.unwrap_or_else(|_| fallback_solution());
        let scrambled = scramble_with_greens(&solution, seed, &config.scramble);
        (solution, scrambled, used_fallback)
    };

    let (solution, scrambled, used_fallback) = build();
    let mut violations = Vec::new();

    if build() != (solution.clone(), scrambled.clone(), used_fallback) {
        violations.push(Violation::NonDeterministic);
    }
    violations.extend(scramble_violations(&solution, &scrambled, config));

    SeedReport {
        seed,
        greens: scrambled.greens.len(),
        used_fallback,
        violations,
    }
}

/// Guarantees a starting grid must meet against its solution
///
/// Greens are judged by the cells the scrambler chose to keep, not by the
/// recolored statuses, so an accidental match shows up as `NotDeranged`.
#[must_use]
pub fn scramble_violations(
    solution: &Solution,
    scrambled: &ScrambledGrid,
    config: &GameConfig,
) -> Vec<Violation> {
    let ScrambledGrid { grid, greens } = scrambled;
    let mut violations = Vec::new();

    if sorted_letters(grid.letters()) != sorted_letters(solution.solved_grid().letters()) {
        violations.push(Violation::LettersNotConserved);
    }

    violations.extend(
        valid_positions()
            .into_iter()
            .filter(|position| !greens.contains(position))
            .filter(|&position| grid.letter(position) == solution.letter(position))
            .map(|position| Violation::NotDeranged {
                row: position.row,
                col: position.col,
            }),
    );

    let in_range = config
        .scramble
        .green_counts
        .range()
        .is_some_and(|range| range.contains(&greens.len()));
    if !in_range {
        violations.push(Violation::GreensOutOfRange {
            greens: greens.len(),
        });
    }

    if is_won(grid) {
        violations.push(Violation::AlreadySolved);
    }

    violations
}

fn sorted_letters(mut letters: Vec<char>) -> Vec<char> {
    letters.sort_unstable();
    letters
}

/// Audit every seed in `seeds`, reporting progress on `progress`
#[must_use]
pub fn run_audit(
    words: &[Word],
    seeds: RangeInclusive<u32>,
    config: &GameConfig,
    progress: &ProgressBar,
) -> AuditResult {
    let start = Instant::now();

    let reports: Vec<SeedReport> = seeds
        .into_par_iter()
        .map(|seed| {
            let report = audit_seed(words, seed, config);
            progress.inc(1);
            report
        })
        .collect();

    progress.finish_with_message("Complete!");

    let mut green_distribution = BTreeMap::new();
    let mut failures = Vec::new();
    let mut fallbacks = 0;

    for report in &reports {
        *green_distribution.entry(report.greens).or_insert(0) += 1;
        if report.used_fallback {
            fallbacks += 1;
        }
        for violation in &report.violations {
            warn!(seed = report.seed, %violation, "audit failure");
            failures.push((report.seed, violation.clone()));
        }
    }

    AuditResult {
        seeds_checked: reports.len(),
        fallbacks,
        green_distribution,
        failures,
        duration: start.elapsed(),
    }
}

/// Progress bar styled for the audit
#[must_use]
pub fn audit_progress_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        bar.set_style(style.progress_chars("█▓▒░"));
    }
    bar
}
