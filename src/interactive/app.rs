//! TUI application state and logic

use crate::core::Position;
use crate::puzzle::DailyPuzzle;
use crate::session::{GameSession, SessionStatus};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub puzzle: DailyPuzzle,
    pub session: GameSession,
    pub cursor: Position,
    pub selected: Option<Position>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(puzzle: DailyPuzzle) -> Self {
        let session = puzzle.session();
        let mut app = Self {
            puzzle,
            session,
            cursor: Position::new(0, 0),
            selected: None,
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Move with arrows/hjkl, Enter or Space selects a tile, select another to swap.",
            MessageStyle::Info,
        );
        app
    }

    /// Move the cursor to the nearest valid cell in a direction, skipping gaps
    pub fn move_cursor(&mut self, direction: Direction) {
        let (dr, dc): (isize, isize) = match direction {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        };

        let mut current = self.cursor;
        loop {
            let (Some(row), Some(col)) = (
                current.row.checked_add_signed(dr),
                current.col.checked_add_signed(dc),
            ) else {
                return;
            };
            let candidate = Position::new(row, col);
            if !candidate.in_bounds() {
                return;
            }
            if candidate.is_valid() {
                self.cursor = candidate;
                return;
            }
            current = candidate;
        }
    }

    /// Select the tile under the cursor, or swap it with the selected one
    pub fn activate(&mut self) {
        if self.session.status().is_terminal() {
            self.add_message("Game over. Press 'r' to replay.", MessageStyle::Info);
            return;
        }

        match self.selected.take() {
            None => {
                match self.session.validate_tile(self.cursor) {
                    Ok(()) => self.selected = Some(self.cursor),
                    Err(error) => self.add_message(&error.to_string(), MessageStyle::Error),
                }
            }
            Some(first) if first == self.cursor => {
                self.add_message("Selection cleared", MessageStyle::Info);
            }
            Some(first) => match self.session.apply_swap(first, self.cursor) {
                Ok(SessionStatus::Won) => {
                    let spare = self.session.swaps_remaining();
                    self.add_message(
                        &format!("🎉 Solved with {spare} swaps to spare! 🎉"),
                        MessageStyle::Success,
                    );
                }
                Ok(SessionStatus::Lost) => {
                    self.add_message(
                        "Out of swaps. Press 's' to see the solution or 'r' to replay.",
                        MessageStyle::Error,
                    );
                }
                Ok(SessionStatus::Playing) => {}
                Err(error) => self.add_message(&error.to_string(), MessageStyle::Error),
            },
        }
    }

    pub fn restart(&mut self) {
        self.session = self.puzzle.session();
        self.selected = None;
        self.messages.clear();
        self.add_message("Puzzle reset", MessageStyle::Info);
    }

    /// Handle one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(Direction::Down),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(Direction::Left),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(Direction::Right),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Esc => self.selected = None,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('s') if self.session.status() == SessionStatus::Lost => {
                let words = self.session.solution().horizontal_words().join(" / ");
                self.add_message(&format!("Solution: {words}"), MessageStyle::Info);
            }
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);
    let restored = restore_terminal(&mut terminal);

    tui_outcome(res, restored)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// The game loop's error wins; a restore failure only surfaces after a clean exit
fn tui_outcome(game: Result<()>, restored: Result<()>) -> Result<()> {
    game.and(restored)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
