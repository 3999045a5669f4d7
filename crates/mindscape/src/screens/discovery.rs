use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::{format_compact, format_param};
use crossterm::event::{KeyCode, KeyEvent};
use mindscape_core::discovery::{DiscoveryConfig, discover};
use mindscape_core::model::Parameter;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::Screen;

/// Trial count increment for the t/T keys.
const TRIALS_STEP: usize = 10;

pub struct DiscoveryScreen;

impl DiscoveryScreen {
    pub fn new() -> Self {
        Self
    }

    fn run(state: &mut AppState) {
        let config = state.discovery_state.config;
        let ranges = state.ranges;
        let result = discover(state.mode, &ranges, &config, &mut state.rng);
        tracing::info!(
            "discovery run: {} trials, {} rejected, best = {:?}",
            result.trials,
            result.rejected,
            result.ranked.first().map(|r| r.value)
        );
        state.discovery_state.result = Some(result);
        state.discovery_state.selected = 0;
    }

    fn render_config(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let config = &state.discovery_state.config;
        let summary = match &state.discovery_state.result {
            Some(result) => format!(
                "last run: {} trials, {} rejected",
                result.trials, result.rejected
            ),
            None => "not yet run".to_string(),
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("Random trials: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    config.trials.to_string(),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled("   Keep top: ", Style::default().fg(Color::DarkGray)),
                Span::styled(config.top_k.to_string(), Style::default().fg(Color::Cyan)),
                Span::styled("   ", Style::default()),
                Span::styled(summary, Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(Span::styled(
                "Uniform random sampling ranked by C — no learning involved.",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" DISCOVERY SEARCH "),
        );
        frame.render_widget(paragraph, area);
    }

    fn render_results(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let items: Vec<ListItem> = if let Some(result) = &state.discovery_state.result {
            let mut items = vec![ListItem::new(Line::from(Span::styled(
                format!(
                    "{:>4} {:>10}  {}",
                    "#",
                    "C",
                    Parameter::ALL
                        .iter()
                        .map(|p| format!("{:>6}", p.key()))
                        .collect::<Vec<_>>()
                        .join(" ")
                ),
                Style::default().add_modifier(Modifier::BOLD),
            )))];

            items.extend(result.ranked.iter().enumerate().map(|(rank, record)| {
                let style = if rank == state.discovery_state.selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let row = format!(
                    "{:>4} {:>10}  {}",
                    rank + 1,
                    format_compact(record.value),
                    Parameter::ALL
                        .iter()
                        .map(|&p| format!("{:>6}", format_param(record.params.get(p))))
                        .collect::<Vec<_>>()
                        .join(" ")
                );
                ListItem::new(Line::from(Span::styled(row, style)))
            }));

            items
        } else {
            vec![ListItem::new(Line::from(
                "Press r to draw random parameter sets and rank them by C.",
            ))]
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" TOP RESULTS "),
        );
        frame.render_widget(list, area);
    }
}

impl Default for DiscoveryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DiscoveryScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('r') => {
                Self::run(state);
                EventResult::Handled
            }
            KeyCode::Char('t') => {
                let config = &mut state.discovery_state.config;
                config.trials = (config.trials + TRIALS_STEP).min(DiscoveryConfig::MAX_TRIALS);
                EventResult::Handled
            }
            KeyCode::Char('T') => {
                let config = &mut state.discovery_state.config;
                config.trials = config
                    .trials
                    .saturating_sub(TRIALS_STEP)
                    .max(DiscoveryConfig::MIN_TRIALS);
                EventResult::Handled
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if let Some(result) = &state.discovery_state.result {
                    if state.discovery_state.selected + 1 < result.ranked.len() {
                        state.discovery_state.selected += 1;
                    }
                }
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.discovery_state.selected =
                    state.discovery_state.selected.saturating_sub(1);
                EventResult::Handled
            }
            KeyCode::Enter => {
                let adopted = state
                    .discovery_state
                    .result
                    .as_ref()
                    .and_then(|r| r.ranked.get(state.discovery_state.selected))
                    .map(|record| record.params);
                match adopted {
                    Some(params) => {
                        state.set_params(params);
                        state.switch_tab(crate::state::TabId::Equation);
                    }
                    None => state.set_error("no discovery result to adopt".to_string()),
                }
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        self.render_config(frame, chunks[0], state);
        self.render_results(frame, chunks[1], state);
    }
}

impl Screen for DiscoveryScreen {
    fn title(&self) -> &str {
        "Discovery"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn run_produces_ranked_results() {
        let mut screen = DiscoveryScreen::new();
        let mut state = AppState::new();

        screen.handle_key(key(KeyCode::Char('r')), &mut state);

        let result = state.discovery_state.result.as_ref().unwrap();
        assert_eq!(result.ranked.len(), state.discovery_state.config.top_k);
        for pair in result.ranked.windows(2) {
            assert!(pair[0].value >= pair[1].value);
        }
    }

    #[test]
    fn trials_stay_within_bounds() {
        let mut screen = DiscoveryScreen::new();
        let mut state = AppState::new();

        for _ in 0..100 {
            screen.handle_key(key(KeyCode::Char('t')), &mut state);
        }
        assert_eq!(
            state.discovery_state.config.trials,
            DiscoveryConfig::MAX_TRIALS
        );

        for _ in 0..100 {
            screen.handle_key(key(KeyCode::Char('T')), &mut state);
        }
        assert_eq!(
            state.discovery_state.config.trials,
            DiscoveryConfig::MIN_TRIALS
        );
    }

    #[test]
    fn adopting_a_result_switches_to_its_params() {
        let mut screen = DiscoveryScreen::new();
        let mut state = AppState::new();

        screen.handle_key(key(KeyCode::Char('r')), &mut state);
        let best = state.discovery_state.result.as_ref().unwrap().ranked[0].params;

        screen.handle_key(key(KeyCode::Enter), &mut state);
        assert_eq!(state.params, best);
        assert_eq!(state.active_tab, crate::state::TabId::Equation);
    }

    #[test]
    fn adopting_without_a_run_is_an_error() {
        let mut screen = DiscoveryScreen::new();
        let mut state = AppState::new();

        screen.handle_key(key(KeyCode::Enter), &mut state);
        assert!(state.error_message.is_some());
    }
}
