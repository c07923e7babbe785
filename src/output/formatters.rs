//! Formatting utilities for terminal output

use crate::core::{Cell, CellStatus, Grid};
use chrono::TimeDelta;
use colored::{ColoredString, Colorize};

/// Cell contents padded to a fixed width tile
#[must_use]
pub fn cell_text(cell: Cell) -> String {
    cell.letter().map_or_else(|| "   ".to_string(), |letter| format!(" {letter} "))
}

/// A cell tile with its status as background color
#[must_use]
pub fn colorize_cell(cell: Cell) -> ColoredString {
    let text = cell_text(cell);
    match cell.status() {
        CellStatus::Correct => text.black().on_green().bold(),
        CellStatus::Present => text.black().on_yellow().bold(),
        CellStatus::Wrong => text.white().on_bright_black(),
        CellStatus::Gap => text.normal(),
    }
}

/// The grid as colored tiles, one line per row
#[must_use]
pub fn format_grid(grid: &Grid) -> String {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|&cell| colorize_cell(cell).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a duration as `HH:MM:SS`; negative durations show as zero
#[must_use]
pub fn format_countdown(delta: TimeDelta) -> String {
    let total = delta.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
