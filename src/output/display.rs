//! Display functions for command results

use super::formatters::{create_progress_bar, format_countdown, format_grid};
use crate::commands::{AuditResult, TodayInfo};
use crate::core::CellStatus;
use crate::puzzle::DailyPuzzle;
use colored::Colorize;

/// Print today's puzzle number and the countdown to the next one
pub fn print_today(info: &TodayInfo) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Today's puzzle: {}",
        format!("#{}", info.puzzle_number).bright_yellow().bold()
    );
    if let Some(date) = info.date {
        println!("Local date:     {date}");
    }
    println!(
        "Next puzzle:    {} ({} from now)",
        info.next_rollover.format("%Y-%m-%d %H:%M UTC"),
        format_countdown(info.time_remaining).bright_cyan()
    );
    println!("{}", "─".repeat(40).cyan());
}

/// Print a puzzle's starting grid, and optionally its solution
pub fn print_puzzle(puzzle: &DailyPuzzle, reveal: bool) {
    let initial = puzzle.initial();

    println!("\n{}", "═".repeat(40).cyan());
    println!(
        " {} {} ",
        "WAFFLE".bright_cyan().bold(),
        format!("#{}", puzzle.number()).bright_yellow().bold()
    );
    println!("{}\n", "═".repeat(40).cyan());

    println!("{}\n", format_grid(initial));
    println!(
        "Greens: {}  Yellows: {}  Swaps: {}",
        initial.count(CellStatus::Correct).to_string().green(),
        initial.count(CellStatus::Present).to_string().yellow(),
        puzzle.swap_budget()
    );

    if reveal {
        let solution = puzzle.solution();
        println!("\n{}\n", "Solution".bright_cyan().bold());
        println!("{}\n", format_grid(&solution.solved_grid()));
        println!("Across: {}", solution.horizontal_words().join(", "));
        println!("Down:   {}", solution.vertical_words().join(", "));
    }
}

/// Print the result of an audit
pub fn print_audit_result(result: &AuditResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "AUDIT RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Seeds checked:    {}", result.seeds_checked);
    println!("   Fallback grids:   {}", result.fallbacks);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Starting greens:".bright_cyan().bold());
    let max_count = result.green_distribution.values().copied().max().unwrap_or(0);
    for (&greens, &count) in &result.green_distribution {
        let pct = count as f64 / result.seeds_checked as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {greens:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }

    println!();
    if result.passed() {
        println!("{}", "✅ All guarantees hold".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} violations", result.failures.len()).red().bold()
        );
        for (seed, violation) in result.failures.iter().take(20) {
            println!("   seed {seed}: {violation}");
        }
    }
}
