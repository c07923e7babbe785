//! Waffle Daily
//!
//! A daily waffle-style word puzzle: six interlocking five-letter words on a 5×5 grid,
//! generated and scrambled deterministically from the puzzle number, with per-swap
//! green/yellow feedback.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use waffle_daily::config::GameConfig;
//! use waffle_daily::core::Position;
//! use waffle_daily::puzzle::DailyPuzzle;
//! use waffle_daily::wordlists::{WORDS, loader::words_from_slice};
//!
//! let words = words_from_slice(WORDS);
//! let puzzle = DailyPuzzle::build(&words, 1, &GameConfig::default());
//!
//! let mut session = puzzle.session();
//! let status = session.apply_swap(Position::new(0, 1), Position::new(2, 3));
//! println!("{status:?}\n{}", session.grid());
//! ```

// Core domain types
pub mod core;

// Seeded randomness
pub mod random;

// Puzzle numbering
pub mod clock;

// Solution search
pub mod generator;

// Starting grid construction
pub mod scramble;

// Tile coloring
pub mod feedback;

// Swap state machine
pub mod session;

// Daily puzzle assembly
pub mod puzzle;

// TOML settings
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
