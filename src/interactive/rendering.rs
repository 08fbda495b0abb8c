//! TUI rendering with ratatui
//!
//! Draws the board, the message log and a status bar. All color decisions
//! live here; the game only reports feedback classes.

use super::app::{App, MessageStyle};
use crate::board::CellView;
use crate::core::Feedback;
use crate::game::DisplayState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const GREEN: Color = Color::Rgb(0x60, 0xa6, 0x65);
const YELLOW: Color = Color::Rgb(0xcd, 0xb3, 0x5d);
const GREY: Color = Color::Rgb(0x77, 0x7c, 0x7e);
const LIGHT_GREY: Color = Color::Rgb(0xc2, 0xc5, 0xc6);

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
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

/// Style for one cell, mirroring the classic tile colors
fn cell_style(cell: &CellView) -> Style {
    let base = match cell.feedback {
        Feedback::Correct => Style::default().fg(Color::White).bg(GREEN),
        Feedback::Present => Style::default().fg(Color::White).bg(YELLOW),
        Feedback::Absent => Style::default().fg(Color::White).bg(GREY),
        Feedback::Unset => Style::default().fg(Color::Black).bg(LIGHT_GREY),
    };

    if cell.is_cursor {
        base.bg(GREY).fg(Color::White).add_modifier(Modifier::UNDERLINED)
    } else {
        base.add_modifier(Modifier::BOLD)
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let cols = app.game.board().cols();
    let cells: Vec<CellView> = app.game.cells().collect();

    let mut lines = Vec::new();
    for row in cells.chunks(cols) {
        let mut spans = Vec::with_capacity(cols * 2);
        for cell in row {
            let letter = cell.letter.map_or(' ', |c| c.to_ascii_uppercase());
            spans.push(Span::styled(format!(" {letter} "), cell_style(cell)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    match app.game.display_state() {
        DisplayState::Playing => {}
        DisplayState::Won => lines.push(Line::from(Span::styled(
            "GOOD JOB!",
            Style::default().fg(GREEN).add_modifier(Modifier::BOLD),
        ))),
        DisplayState::Revealed(answer) => lines.push(Line::from(Span::styled(
            answer.text().to_uppercase(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))),
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Board "));

    f.render_widget(board, area);
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
    let board = app.game.board();
    let help_text = if app.game.is_over() {
        "Enter/q: Quit".to_string()
    } else {
        format!(
            "Guess {}/{} | Enter: Submit | Backspace: Delete | Esc: Quit",
            (board.committed_rows() + 1).min(board.rows()),
            board.rows()
        )
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::Word;
    use crate::game::Game;
    use crate::wordlists::Dictionary;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app() -> App {
        let game = Game::with_answer(
            Board::new(6, 5).unwrap(),
            Dictionary::builtin(5).unwrap(),
            Word::new("tesla").unwrap(),
        )
        .unwrap();
        App::new(game, false)
    }

    #[test]
    fn renders_typed_letters() {
        let mut app = app();
        for ch in "curi".chars() {
            app.game.type_char(ch);
        }

        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("W O R D L E"));
        assert!(text.contains(" C   U   R   I "));
        assert!(text.contains("Guess 1/6"));
    }

    #[test]
    fn renders_win_banner() {
        let mut app = app();
        for ch in "tesla".chars() {
            app.game.type_char(ch);
        }
        app.game.commit();

        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        assert!(buffer_text(&terminal).contains("GOOD JOB!"));
    }

    #[test]
    fn cursor_cell_is_highlighted() {
        let cursor = CellView {
            letter: None,
            feedback: Feedback::Unset,
            is_cursor: true,
        };
        let committed = CellView {
            letter: Some('a'),
            feedback: Feedback::Correct,
            is_cursor: false,
        };

        assert_eq!(cell_style(&cursor).bg, Some(GREY));
        assert_eq!(cell_style(&committed).bg, Some(GREEN));
    }
}
