//! Modal overlay rendering and key handling.
//!
//! Two modal kinds exist: an informational message and a single-line text
//! input (used to ask for a CSV path). While a modal is open it captures
//! every key.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{AppState, ModalAction, ModalState};

/// Result of routing a key to the active modal.
pub enum ModalResult {
    /// A text input was confirmed with this action and value.
    Confirmed(ModalAction, String),
    /// The modal was dismissed.
    Cancelled,
    /// The modal stays open.
    Continue,
}

pub fn handle_modal_key(key: KeyEvent, state: &mut AppState) -> ModalResult {
    match &mut state.modal {
        ModalState::None => ModalResult::Cancelled,
        ModalState::Message(_) => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => ModalResult::Cancelled,
            _ => ModalResult::Continue,
        },
        ModalState::TextInput(input) => match key.code {
            KeyCode::Esc => ModalResult::Cancelled,
            KeyCode::Enter => ModalResult::Confirmed(input.action, input.value.clone()),
            KeyCode::Backspace => {
                input.value.pop();
                ModalResult::Continue
            }
            KeyCode::Char(c) => {
                input.value.push(c);
                ModalResult::Continue
            }
            _ => ModalResult::Continue,
        },
    }
}

/// Render the active modal as a centered overlay, if any.
pub fn render_modal(frame: &mut Frame, state: &AppState) {
    match &state.modal {
        ModalState::None => {}
        ModalState::Message(message) => {
            let area = centered_rect(50, 30, frame.area());
            frame.render_widget(Clear, area);

            let lines = vec![
                Line::from(""),
                Line::from(message.body.as_str()),
                Line::from(""),
                Line::from(Span::styled(
                    "[Enter] close",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", message.title)),
            );
            frame.render_widget(paragraph, area);
        }
        ModalState::TextInput(input) => {
            let area = centered_rect(60, 20, frame.area());
            frame.render_widget(Clear, area);

            let lines = vec![
                Line::from(""),
                Line::from(vec![
                    Span::raw("> "),
                    Span::styled(
                        input.value.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("█", Style::default().fg(Color::Yellow)),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    "[Enter] confirm  [Esc] cancel",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            let paragraph = Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", input.title)),
            );
            frame.render_widget(paragraph, area);
        }
    }
}

/// A rect centered in `r` taking the given percentage of each dimension.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
