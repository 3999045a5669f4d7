use crate::components::{Component, EventResult};
use crate::state::{AppState, ModalAction, ModalState, TextInputModal};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Screen;

pub struct FittingScreen;

impl FittingScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FittingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for FittingScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('o') => {
                state.modal = ModalState::TextInput(TextInputModal::new(
                    "Load observations CSV (columns: R,D,C_obs)",
                    ModalAction::LoadObservations,
                ));
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let lines = match (&state.fitting_state.fit, &state.fitting_state.source) {
            (Some(fit), source) => {
                let source_label = source
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<unknown>".to_string());
                vec![
                    Line::from(Span::styled(
                        "POWER LAW FIT",
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(vec![
                        Span::raw("  Model:        C = R / D^p"),
                    ]),
                    Line::from(vec![
                        Span::raw("  Fitted p:     "),
                        Span::styled(
                            format!("{:.3}", fit.exponent),
                            Style::default()
                                .fg(Color::Green)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(format!("  Residual RMS: {:.4} (log space)", fit.residual_rms)),
                    Line::from(format!("  Observations: {}", fit.observations)),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("  Source: ", Style::default().fg(Color::DarkGray)),
                        Span::styled(source_label, Style::default().fg(Color::DarkGray)),
                    ]),
                ]
            }
            (None, _) => vec![
                Line::from("No fit yet."),
                Line::from(""),
                Line::from("Press o and enter the path of a CSV file with columns"),
                Line::from("R, D and C_obs to fit the exponent of C = R / D^p."),
                Line::from(""),
                Line::from(Span::styled(
                    "Malformed files and degenerate fits are reported here, not fatal.",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
        };

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" DATA FITTING "),
        );
        frame.render_widget(paragraph, area);
    }
}

impl Screen for FittingScreen {
    fn title(&self) -> &str {
        "Fitting"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn o_opens_the_path_input_modal() {
        let mut screen = FittingScreen::new();
        let mut state = AppState::new();

        screen.handle_key(
            KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE),
            &mut state,
        );

        match &state.modal {
            ModalState::TextInput(input) => {
                assert_eq!(input.action, ModalAction::LoadObservations);
            }
            _ => panic!("expected a text input modal"),
        }
    }
}
