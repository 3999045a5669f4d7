use crate::components::charts::sparkline::sparkline_spans;
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_compact;
use crossterm::event::{KeyCode, KeyEvent};
use mindscape_core::universe::{UniverseConfig, simulate_universes};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Screen;

/// Step increment for the s/S keys.
const STEPS_STEP: usize = 10;
/// Perturbation increment for the p/P keys.
const PERTURBATION_STEP: f64 = 0.05;

/// Colors assigned to universes round-robin.
const UNIVERSE_COLORS: [Color; 5] = [
    Color::Cyan,
    Color::Green,
    Color::Magenta,
    Color::Yellow,
    Color::Blue,
];

pub struct UniverseScreen;

impl UniverseScreen {
    pub fn new() -> Self {
        Self
    }

    fn run(state: &mut AppState) {
        let config = state.universe_state.config;
        let ranges = state.ranges;
        match simulate_universes(state.mode, &config, &ranges, &mut state.rng) {
            Ok(result) => {
                tracing::info!(
                    "simulated {} universes over {} steps",
                    config.universes,
                    config.steps
                );
                state.universe_state.result = Some(result);
            }
            Err(e) => state.set_error(format!("universe simulation failed: {e}")),
        }
    }

    fn render_config(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let config = &state.universe_state.config;
        let line = Line::from(vec![
            Span::styled("Universes: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                config.universes.to_string(),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled("   Steps: ", Style::default().fg(Color::DarkGray)),
            Span::styled(config.steps.to_string(), Style::default().fg(Color::Cyan)),
            Span::styled("   Perturbation: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.2}", config.perturbation),
                Style::default().fg(Color::Cyan),
            ),
        ]);

        let paragraph = Paragraph::new(vec![
            line,
            Line::from(Span::styled(
                "Each universe starts random and drifts a little every step.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" UNIVERSE SIMULATION "),
        );
        frame.render_widget(paragraph, area);
    }

    fn render_timelines(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default().borders(Borders::ALL).title(" TIMELINES ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(result) = &state.universe_state.result else {
            let msg = Paragraph::new("Press r to simulate universe timelines.");
            frame.render_widget(msg, inner);
            return;
        };

        let Some((lo, hi)) = result.value_range() else {
            return;
        };

        let spark_width = (inner.width as usize).saturating_sub(26);
        let lines: Vec<Line> = result
            .timelines
            .iter()
            .enumerate()
            .map(|(i, timeline)| {
                let color = UNIVERSE_COLORS[i % UNIVERSE_COLORS.len()];
                let final_value = timeline.last().copied().unwrap_or(0.0);
                let mut spans = vec![Span::styled(
                    format!("Universe {:>2} ", i + 1),
                    Style::default().fg(color),
                )];
                spans.extend(sparkline_spans(timeline, lo, hi, spark_width, color));
                spans.push(Span::styled(
                    format!(" → {}", format_compact(final_value)),
                    Style::default().fg(Color::DarkGray),
                ));
                Line::from(spans)
            })
            .collect();

        let mut all_lines = lines;
        all_lines.push(Line::from(""));
        all_lines.push(Line::from(Span::styled(
            format!("shared scale: C ∈ [{}, {}]", format_compact(lo), format_compact(hi)),
            Style::default().fg(Color::DarkGray),
        )));

        frame.render_widget(Paragraph::new(all_lines), inner);
    }
}

impl Default for UniverseScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for UniverseScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let config = &mut state.universe_state.config;
        match key.code {
            KeyCode::Char('r') => {
                Self::run(state);
                EventResult::Handled
            }
            KeyCode::Char('u') => {
                config.universes = (config.universes + 1).min(UniverseConfig::MAX_UNIVERSES);
                EventResult::Handled
            }
            KeyCode::Char('U') => {
                config.universes = config
                    .universes
                    .saturating_sub(1)
                    .max(UniverseConfig::MIN_UNIVERSES);
                EventResult::Handled
            }
            KeyCode::Char('s') => {
                config.steps = (config.steps + STEPS_STEP).min(UniverseConfig::MAX_STEPS);
                EventResult::Handled
            }
            KeyCode::Char('S') => {
                config.steps = config
                    .steps
                    .saturating_sub(STEPS_STEP)
                    .max(UniverseConfig::MIN_STEPS);
                EventResult::Handled
            }
            KeyCode::Char('p') => {
                config.perturbation =
                    (config.perturbation + PERTURBATION_STEP).min(UniverseConfig::MAX_PERTURBATION);
                EventResult::Handled
            }
            KeyCode::Char('P') => {
                config.perturbation = (config.perturbation - PERTURBATION_STEP).max(0.0);
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
        self.render_timelines(frame, chunks[1], state);
    }
}

impl Screen for UniverseScreen {
    fn title(&self) -> &str {
        "Universes"
    }
}
