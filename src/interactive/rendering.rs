//! TUI rendering with ratatui
//!
//! Draws the waffle board, the swap gauge and the message log.

use super::app::{App, MessageStyle};
use crate::core::{CellStatus, GRID_SIZE, Position};
use crate::session::SessionStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("🧇 WAFFLE #{}", app.puzzle.number()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(app: &App, position: Position) -> Style {
    let base = match app.session.grid().status(position) {
        CellStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        CellStatus::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        CellStatus::Wrong => Style::default().fg(Color::White).bg(Color::DarkGray),
        CellStatus::Gap => Style::default(),
    };

    let mut style = base.add_modifier(Modifier::BOLD);
    if app.selected == Some(position) {
        style = style.bg(Color::Magenta);
    }
    if app.cursor == position {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let grid = app.session.grid();
    let mut lines = vec![Line::from("")];

    for row in 0..GRID_SIZE {
        let mut spans = vec![Span::raw("  ")];
        for col in 0..GRID_SIZE {
            let position = Position::new(row, col);
            let text = grid
                .letter(position)
                .map_or_else(|| "   ".to_string(), |letter| format!(" {letter} "));
            spans.push(Span::styled(text, tile_style(app, position)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = match app.session.status() {
        SessionStatus::Playing => " Board ",
        SessionStatus::Won => " Solved! ",
        SessionStatus::Lost => " Out of swaps ",
    };
    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_swap_gauge(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_swap_gauge(f: &mut Frame, app: &App, area: Rect) {
    let budget = app.puzzle.swap_budget().max(1);
    let remaining = app.session.swaps_remaining();
    let percent = u16::try_from(remaining * 100 / budget).unwrap_or(100);
    let color = match percent {
        0..=20 => Color::Red,
        21..=50 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Swaps ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent.min(100))
        .label(format!("{remaining}/{} swaps left", app.puzzle.swap_budget()));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.session.status() {
        SessionStatus::Playing if app.selected.is_some() => {
            "Enter: Swap with selected | Esc: Cancel | q: Quit"
        }
        SessionStatus::Playing => "Arrows/hjkl: Move | Enter/Space: Select | r: Reset | q: Quit",
        SessionStatus::Won => "r: Replay | q: Quit",
        SessionStatus::Lost => "s: Show solution | r: Replay | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::puzzle::DailyPuzzle;
    use crate::wordlists::{WORDS, loader::words_from_slice};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_puzzle_number_and_budget() {
        let words = words_from_slice(WORDS);
        let app = App::new(DailyPuzzle::build(&words, 1, &GameConfig::default()));
        let screen = draw(&app);

        assert!(screen.contains("WAFFLE #1"));
        assert!(screen.contains("15/15 swaps left"));
    }

    #[test]
    fn cursor_tile_is_reversed() {
        let words = words_from_slice(WORDS);
        let app = App::new(DailyPuzzle::build(&words, 1, &GameConfig::default()));

        let style = tile_style(&app, app.cursor);
        assert!(style.add_modifier.contains(Modifier::REVERSED));
    }
}
