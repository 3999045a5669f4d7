use crate::actions::{self, ExportFormat};
use crate::components::{Component, EventResult};
use crate::state::{AppState, ModalState};
use crate::util::format::{format_compact, format_param};
use crossterm::event::{KeyCode, KeyEvent};
use mindscape_core::model::Parameter;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::Screen;

pub struct HistoryScreen;

impl HistoryScreen {
    pub fn new() -> Self {
        Self
    }

    fn apply_export(state: &mut AppState, format: ExportFormat) {
        match actions::handle_export(state, format) {
            actions::ActionResult::Done(modal) => {
                state.modal = modal.unwrap_or(ModalState::None);
            }
            actions::ActionResult::Error(message) => state.set_error(message),
        }
    }
}

impl Default for HistoryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HistoryScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if state.history_state.selected + 1 < state.history.len() {
                    state.history_state.selected += 1;
                }
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.history_state.selected = state.history_state.selected.saturating_sub(1);
                EventResult::Handled
            }
            KeyCode::Char('e') => {
                Self::apply_export(state, ExportFormat::Csv);
                EventResult::Handled
            }
            KeyCode::Char('x') => {
                Self::apply_export(state, ExportFormat::Json);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let visible = (area.height as usize).saturating_sub(3);

        let items: Vec<ListItem> = if state.history.is_empty() {
            vec![ListItem::new(Line::from(
                "No evaluations recorded yet. Press Enter on the Equation tab.",
            ))]
        } else {
            let mut items = vec![ListItem::new(Line::from(Span::styled(
                format!(
                    "{:<9} {:<10} {:>10}  {}",
                    "When",
                    "Mode",
                    "C",
                    Parameter::ALL
                        .iter()
                        .map(|p| format!("{:>6}", p.key()))
                        .collect::<Vec<_>>()
                        .join(" ")
                ),
                Style::default().add_modifier(Modifier::BOLD),
            )))];

            // Newest first, windowed around the selection.
            let len = state.history.len();
            let start = state
                .history_state
                .selected
                .saturating_sub(visible.saturating_sub(1));

            items.extend((start..len).take(visible).filter_map(|n| {
                let entry = state.history.nth_newest(n)?;
                let style = if n == state.history_state.selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let when = entry.at.strftime("%H:%M:%S").to_string();
                let row = format!(
                    "{:<9} {:<10} {:>10}  {}",
                    when,
                    entry.mode.name(),
                    format_compact(entry.value),
                    Parameter::ALL
                        .iter()
                        .map(|&p| format!("{:>6}", format_param(entry.params.get(p))))
                        .collect::<Vec<_>>()
                        .join(" ")
                );
                Some(ListItem::new(Line::from(Span::styled(row, style))))
            }));

            items
        };

        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(format!(
            " HISTORY ({} evaluations, newest first) ",
            state.history.len()
        )));
        frame.render_widget(list, area);
    }
}

impl Screen for HistoryScreen {
    fn title(&self) -> &str {
        "History"
    }
}
