//! Line-based play mode
//!
//! Text swap loop without the TUI: the grid is printed after every move and swaps
//! are typed as two 1-based coordinates.

use crate::core::{GRID_SIZE, Position};
use crate::output::formatters::format_grid;
use crate::puzzle::DailyPuzzle;
use crate::session::{GameSession, SessionStatus};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Parse a swap request such as `1 1 3 1`, `1,1 3,1` or `11 31`
///
/// Coordinates are row then column, each 1-5.
#[must_use]
pub fn parse_swap(input: &str) -> Option<(Position, Position)> {
    let digits: Vec<usize> = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| c.to_digit(10).map(|d| d as usize))
        .collect::<Option<_>>()?;

    let [r1, c1, r2, c2] = digits.as_slice() else {
        return None;
    };
    let in_range = |n: usize| (1..=GRID_SIZE).contains(&n);
    let coordinate = |row: usize, col: usize| {
        (in_range(row) && in_range(col)).then(|| Position::new(row - 1, col - 1))
    };

    Some((coordinate(*r1, *c1)?, coordinate(*r2, *c2)?))
}

/// Play a puzzle on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play(puzzle: &DailyPuzzle) -> Result<SessionStatus> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let session = play_session(puzzle.session(), stdin.lock(), &mut stdout)?;
    Ok(session.status())
}

/// Drive a session from a line reader until it ends or input runs out
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn play_session<R: BufRead, W: Write>(
    mut session: GameSession,
    input: R,
    out: &mut W,
) -> Result<GameSession> {
    writeln!(out, "\nWaffle #{}", session.puzzle_id())?;
    writeln!(
        out,
        "Swap two letters by typing their coordinates as row col row col (e.g. '1 2 3 1')."
    )?;
    writeln!(out, "Commands: 'quit' to exit\n")?;
    print_state(&session, out)?;

    let mut lines = input.lines();
    while !session.status().is_terminal() {
        write!(out, "Swap: ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();

        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            writeln!(out, "\nBye!")?;
            return Ok(session);
        }
        if line.is_empty() {
            continue;
        }

        let Some((a, b)) = parse_swap(line) else {
            writeln!(out, "{}", "Invalid swap! Use four digits 1-5, e.g. '1 2 3 1'".red())?;
            continue;
        };

        match session.apply_swap(a, b) {
            Ok(_) => print_state(&session, out)?,
            Err(error) => writeln!(out, "{} {error}", "Rejected:".red())?,
        }
    }

    match session.status() {
        SessionStatus::Won => writeln!(
            out,
            "\n{} Solved with {} swaps to spare.",
            "Puzzle solved!".green().bold(),
            session.swaps_remaining()
        )?,
        SessionStatus::Lost => {
            writeln!(out, "\n{} The solution was:\n", "Out of swaps.".red().bold())?;
            writeln!(out, "{}", format_grid(&session.solution().solved_grid()))?;
        }
        SessionStatus::Playing => {}
    }

    Ok(session)
}

fn print_state<W: Write>(session: &GameSession, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", format_grid(session.grid()))?;
    writeln!(out, "Swaps left: {}\n", session.swaps_remaining())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::fallback_solution;
    use test_case::test_case;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test_case("1 1 3 1", Some((pos(0, 0), pos(2, 0))) ; "spaces")]
    #[test_case("1,2 5,5", Some((pos(0, 1), pos(4, 4))) ; "commas")]
    #[test_case("11 31", Some((pos(0, 0), pos(2, 0))) ; "packed")]
    #[test_case("2 2 1 1", Some((pos(1, 1), pos(0, 0))) ; "gap still parses")]
    #[test_case("0 1 1 1", None ; "zero row")]
    #[test_case("1 6 1 1", None ; "column too large")]
    #[test_case("1 1 1", None ; "too few")]
    #[test_case("1 1 1 1 1", None ; "too many")]
    #[test_case("a b c d", None ; "letters")]
    fn parses_swaps(input: &str, expected: Option<(Position, Position)>) {
        assert_eq!(parse_swap(input), expected);
    }

    fn session_one_swap_from_solved(budget: u32) -> GameSession {
        let solution = fallback_solution();
        let grid = solution.solved_grid().swapped(pos(0, 0), pos(0, 1));
        GameSession::new(1, solution, &grid, budget)
    }

    fn play(session: GameSession, input: &str) -> (GameSession, String) {
        let mut out = Vec::new();
        let session = play_session(session, input.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn winning_swap_ends_the_game() {
        let (session, output) = play(session_one_swap_from_solved(15), "1 1 1 2\n");

        assert_eq!(session.status(), SessionStatus::Won);
        assert_eq!(session.swaps_remaining(), 14);
        assert!(output.contains("Puzzle solved!"));
    }

    #[test]
    fn bad_input_is_reported_and_skipped() {
        let (session, output) = play(session_one_swap_from_solved(15), "nonsense\n\n1 1 1 2\n");

        assert_eq!(session.status(), SessionStatus::Won);
        assert!(output.contains("Invalid swap!"));
    }

    #[test]
    fn rejected_swap_keeps_budget() {
        // (1,3) is already correct
        let (session, output) = play(session_one_swap_from_solved(15), "1 1 1 3\nq\n");

        assert_eq!(session.status(), SessionStatus::Playing);
        assert_eq!(session.swaps_remaining(), 15);
        assert!(output.contains("Rejected:"));
        assert!(output.contains("Bye!"));
    }

    #[test]
    fn running_out_of_swaps_reveals_solution() {
        let solution = fallback_solution();
        let grid = solution
            .solved_grid()
            .swapped(pos(0, 0), pos(0, 1))
            .swapped(pos(0, 1), pos(0, 2));
        let session = GameSession::new(1, solution, &grid, 1);

        let (session, output) = play(session, "1 1 1 2\n");

        assert_eq!(session.status(), SessionStatus::Lost);
        assert!(output.contains("The solution was:"));
    }

    #[test]
    fn end_of_input_leaves_game_open() {
        let (session, _) = play(session_one_swap_from_solved(15), "");
        assert_eq!(session.status(), SessionStatus::Playing);
    }
}
