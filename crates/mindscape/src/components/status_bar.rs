use super::{Component, EventResult};
use crate::state::{AppState, TabId};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn get_help_text(state: &AppState) -> &'static str {
        // Return help text based on active tab
        match state.active_tab {
            TabId::Equation => {
                "j/k: select | h/l: adjust (H/L: big) | d: demo | r: random | a: suggest | p: preset | m: mode | [/]: sweep | Enter: record | q: quit"
            }
            TabId::Surface => {
                "1-6: switch tabs | x/y: cycle axes | +/-: resolution | q: quit"
            }
            TabId::Discovery => {
                "1-6: switch tabs | r: run | t/T: trials | j/k: select | Enter: adopt | q: quit"
            }
            TabId::Universes => {
                "1-6: switch tabs | r: run | u/U: universes | s/S: steps | p/P: perturbation | q: quit"
            }
            TabId::Fitting => {
                "1-6: switch tabs | o: load observations CSV | q: quit"
            }
            TabId::History => {
                "1-6: switch tabs | j/k: select | e: export CSV | x: export JSON | q: quit"
            }
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error.as_str()),
            ])
        } else {
            Line::from(Span::styled(
                Self::get_help_text(state),
                Style::default().fg(Color::DarkGray),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
