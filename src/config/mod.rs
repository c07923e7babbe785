//! Game configuration
//!
//! Everything tunable about the daily puzzle, loadable from a TOML file. Missing
//! keys take their defaults, so an empty file is a valid configuration.
//!
//! ```toml
//! launch_date = "2025-01-01"
//! swap_budget = 15
//!
//! [generator]
//! max_attempts = 50000
//!
//! [scramble]
//! seed_offset = 1
//! max_shuffle_attempts = 100
//! green_counts = [
//!     { greens = 4, weight = 1 },
//!     { greens = 5, weight = 3 },
//!     { greens = 6, weight = 4 },
//!     { greens = 7, weight = 2 },
//! ]
//! ```

use crate::core::VALID_CELL_COUNT;
use crate::generator::GeneratorConfig;
use crate::scramble::{GreenCountDistribution, ScrambleConfig};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// At least this many cells must be scrambled for a derangement to exist
const MIN_SCRAMBLED_CELLS: usize = 2;

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}

/// Daily puzzle settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Local date of puzzle #1
    pub launch_date: NaiveDate,
    /// Swaps a player gets per puzzle
    pub swap_budget: u32,
    pub generator: GeneratorConfig,
    pub scramble: ScrambleConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            launch_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            swap_budget: 15,
            generator: GeneratorConfig::default(),
            scramble: ScrambleConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load and validate a TOML config file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate TOML text
    ///
    /// # Errors
    /// Returns `ConfigError` on syntax errors or invalid values.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Same settings with the 6–8 green preset
    #[must_use]
    pub fn gentle(mut self) -> Self {
        self.scramble.green_counts = GreenCountDistribution::gentle();
        self
    }

    /// Reject values the generator or scrambler cannot honor
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.swap_budget == 0 {
            return invalid("swap_budget must be positive");
        }
        if self.generator.max_attempts == 0 {
            return invalid("generator.max_attempts must be positive");
        }

        let weights = self.scramble.green_counts.weights();
        if weights.is_empty() {
            return invalid("scramble.green_counts must not be empty");
        }
        if weights.iter().all(|w| w.weight == 0) {
            return invalid("scramble.green_counts needs at least one positive weight");
        }
        let max_greens = VALID_CELL_COUNT - MIN_SCRAMBLED_CELLS;
        if let Some(entry) = weights.iter().find(|w| w.greens > max_greens) {
            return invalid(&format!(
                "scramble.green_counts allows {} greens, at most {max_greens} supported",
                entry.greens
            ));
        }

        Ok(())
    }
}

fn invalid(message: &str) -> Result<(), ConfigError> {
    Err(ConfigError::Invalid {
        message: message.to_string(),
    })
}
