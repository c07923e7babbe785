//! Waffle Daily - CLI
//!
//! Daily waffle puzzle with TUI and line-based play, plus tooling to inspect and
//! audit puzzles for any seed.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::debug;
use waffle_daily::{
    clock::DailySeedClock,
    commands::{audit_progress_bar, run_audit, run_play, today_info},
    config::GameConfig,
    core::Word,
    interactive::{App, run_tui},
    logging,
    output::{print_audit_result, print_puzzle, print_today},
    puzzle::DailyPuzzle,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

/// Upper bound for `--random` practice seeds
const MAX_PRACTICE_SEED: u32 = 100_000;

#[derive(Parser)]
#[command(
    name = "waffle_daily",
    about = "Daily waffle word puzzle: swap letters until every row and column spells a word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML config file (launch date, swap budget, generator and scramble tuning)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Word list file, one five-letter word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Use the 6-8 green starting preset
    #[arg(long, global = true)]
    gentle: bool,

    /// Debug logging to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Which puzzle to load
#[derive(clap::Args, Clone, Copy)]
struct PuzzleChoice {
    /// Puzzle number (default: today's)
    #[arg(short, long, conflicts_with = "random")]
    seed: Option<u32>,

    /// Random practice puzzle
    #[arg(short, long)]
    random: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Tui {
        #[command(flatten)]
        choice: PuzzleChoice,
    },

    /// Line-based play mode without the TUI
    Play {
        #[command(flatten)]
        choice: PuzzleChoice,
    },

    /// Show today's puzzle number and time until the next one
    Today,

    /// Print the starting grid for a puzzle
    Show {
        #[command(flatten)]
        choice: PuzzleChoice,

        /// Also print the solution
        #[arg(long)]
        solution: bool,
    },

    /// Check puzzle guarantees over a range of seeds
    Audit {
        /// First seed to check
        #[arg(long, default_value = "1")]
        start: u32,

        /// Number of seeds to check
        #[arg(short = 'n', long, default_value = "1000")]
        count: u32,
    },
}

fn load_config(path: Option<&Path>, gentle: bool) -> Result<GameConfig> {
    let config = match path {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    Ok(if gentle { config.gentle() } else { config })
}

fn load_words(path: Option<&Path>) -> Result<Vec<Word>> {
    let words = match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("loading word list {}", path.display()))?,
        None => words_from_slice(WORDS),
    };
    debug!(count = words.len(), "word list loaded");
    Ok(words)
}

fn puzzle_number(choice: PuzzleChoice, config: &GameConfig) -> u32 {
    if choice.random {
        rand::rng().random_range(1..=MAX_PRACTICE_SEED)
    } else {
        choice.seed.unwrap_or_else(|| {
            DailySeedClock::central_european(config.launch_date).current_puzzle_number()
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = load_config(cli.config.as_deref(), cli.gentle)?;

    // Default to TUI mode if no command given
    let command = cli.command.unwrap_or(Commands::Tui {
        choice: PuzzleChoice {
            seed: None,
            random: false,
        },
    });

    match command {
        Commands::Today => {
            let clock = DailySeedClock::central_european(config.launch_date);
            print_today(&today_info(&clock));
            Ok(())
        }
        Commands::Show { choice, solution } => {
            let words = load_words(cli.wordlist.as_deref())?;
            let puzzle = DailyPuzzle::build(&words, puzzle_number(choice, &config), &config);
            print_puzzle(&puzzle, solution);
            Ok(())
        }
        Commands::Play { choice } => {
            let words = load_words(cli.wordlist.as_deref())?;
            let puzzle = DailyPuzzle::build(&words, puzzle_number(choice, &config), &config);
            run_play(&puzzle)?;
            Ok(())
        }
        Commands::Tui { choice } => {
            let words = load_words(cli.wordlist.as_deref())?;
            let puzzle = DailyPuzzle::build(&words, puzzle_number(choice, &config), &config);
            run_tui(App::new(puzzle))
        }
        Commands::Audit { start, count } => {
            run_audit_command(cli.wordlist.as_deref(), start, count, &config)
        }
    }
}

fn run_audit_command(
    wordlist: Option<&Path>,
    start: u32,
    count: u32,
    config: &GameConfig,
) -> Result<()> {
    anyhow::ensure!(count > 0, "audit needs at least one seed");
    let words = load_words(wordlist)?;
    let end = start.saturating_add(count.saturating_sub(1));

    println!("🎯 Auditing seeds {start}..={end} against {} words...", words.len());

    let progress = audit_progress_bar(u64::from(count));
    let result = run_audit(&words, start..=end, config, &progress);
    print_audit_result(&result);

    if result.passed() {
        Ok(())
    } else {
        anyhow::bail!("{} guarantee violations", result.failures.len())
    }
}
