use crate::components::charts::sweep::render_sweep;
use crate::components::{Component, EventResult};
use crate::state::{AppState, PARAM_STEP, PARAM_STEP_LARGE};
use crate::util::format::{format_param, format_result};
use crossterm::event::{KeyCode, KeyEvent};
use mindscape_core::discovery::{ScenarioPreset, SuggestionPreset, random_set};
use mindscape_core::grid::{SweepAxis, sweep_line};
use mindscape_core::model::{Parameter, ParameterSet};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::Screen;

/// Width of the slider gauge in characters.
const GAUGE_WIDTH: usize = 16;

pub struct EquationScreen;

impl EquationScreen {
    pub fn new() -> Self {
        Self
    }

    fn slider_item<'a>(state: &AppState, index: usize, parameter: Parameter) -> ListItem<'a> {
        let value = state.params.get(parameter);
        let (min, max) = state.ranges.bounds(parameter);
        let filled = (((value - min) / (max - min)).clamp(0.0, 1.0) * GAUGE_WIDTH as f64).round()
            as usize;

        let selected = index == state.equation_state.selected;
        let marker = if selected { "▸ " } else { "  " };
        let name_style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        ListItem::new(Line::from(vec![
            Span::styled(marker, name_style),
            Span::styled(format!("{:<3}", parameter.symbol()), name_style),
            Span::styled(format!("{:<19}", parameter.label()), name_style),
            Span::styled(
                "█".repeat(filled),
                Style::default().fg(if selected { Color::Yellow } else { Color::Cyan }),
            ),
            Span::styled(
                "░".repeat(GAUGE_WIDTH - filled),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(format!(" {:>6}", format_param(value))),
        ]))
    }

    fn render_sliders(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let items: Vec<ListItem> = Parameter::ALL
            .iter()
            .enumerate()
            .map(|(index, &parameter)| Self::slider_item(state, index, parameter))
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" PARAMETERS "),
        );
        frame.render_widget(list, area);
    }

    fn render_result(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let lines = match &state.result {
            Ok(value) => vec![
                Line::from(vec![
                    Span::raw("C = "),
                    Span::styled(
                        format_result(*value),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Mode: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(state.mode.name(), Style::default().fg(Color::Cyan)),
                    Span::styled("   History: ", Style::default().fg(Color::DarkGray)),
                    Span::raw(state.history.len().to_string()),
                ]),
            ],
            Err(e) => vec![
                Line::from(Span::styled(
                    "C is undefined here",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    e.to_string(),
                    Style::default().fg(Color::Red),
                )),
            ],
        };

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" RESULT "),
        );
        frame.render_widget(paragraph, area);
    }

    fn render_sweep_chart(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let parameter = state.equation_state.sweep_parameter;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" C vs {} ", parameter.symbol()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // One sample per column keeps the chart crisp at any width.
        let steps = (inner.width as usize).clamp(2, 120);
        let axis = SweepAxis::over_range(parameter, &state.ranges, steps);

        match sweep_line(state.mode, &state.params, &axis) {
            Ok(line) => render_sweep(frame, inner, &line),
            Err(e) => {
                let msg = Paragraph::new(format!("sweep failed: {e}"))
                    .style(Style::default().fg(Color::Red));
                frame.render_widget(msg, inner);
            }
        }
    }
}

impl Default for EquationScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for EquationScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                state.equation_state.selected =
                    (state.equation_state.selected + 1) % Parameter::COUNT;
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.equation_state.selected = state
                    .equation_state
                    .selected
                    .checked_sub(1)
                    .unwrap_or(Parameter::COUNT - 1);
                EventResult::Handled
            }
            KeyCode::Char('h') | KeyCode::Left => {
                state.adjust_selected(-PARAM_STEP);
                EventResult::Handled
            }
            KeyCode::Char('l') | KeyCode::Right => {
                state.adjust_selected(PARAM_STEP);
                EventResult::Handled
            }
            KeyCode::Char('H') => {
                state.adjust_selected(-PARAM_STEP_LARGE);
                EventResult::Handled
            }
            KeyCode::Char('L') => {
                state.adjust_selected(PARAM_STEP_LARGE);
                EventResult::Handled
            }
            KeyCode::Char('d') => {
                state.set_params(ParameterSet::demo());
                EventResult::Handled
            }
            KeyCode::Char('r') => {
                let ranges = state.ranges;
                let set = random_set(&mut state.rng, &ranges);
                state.set_params(set);
                EventResult::Handled
            }
            KeyCode::Char('a') => {
                let preset =
                    SuggestionPreset::ALL[state.equation_state.next_suggestion % SuggestionPreset::ALL.len()];
                state.equation_state.next_suggestion += 1;
                let set = preset.draw(&mut state.rng);
                state.set_params(set);
                tracing::info!("applied suggestion preset {}", preset.name());
                EventResult::Handled
            }
            KeyCode::Char('p') => {
                let preset =
                    ScenarioPreset::ALL[state.equation_state.next_scenario % ScenarioPreset::ALL.len()];
                state.equation_state.next_scenario += 1;
                let set = preset.apply(&state.params);
                state.set_params(set);
                tracing::info!("applied scenario preset {}", preset.name());
                EventResult::Handled
            }
            KeyCode::Char('m') => {
                let mode = state.mode.next();
                state.set_mode(mode);
                EventResult::Handled
            }
            KeyCode::Char('[') | KeyCode::Char(']') => {
                state.equation_state.sweep_parameter =
                    state.equation_state.sweep_parameter.next();
                EventResult::Handled
            }
            KeyCode::Enter => {
                if !state.record_evaluation() {
                    state.set_error("cannot record an undefined result".to_string());
                }
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(50), Constraint::Min(0)])
            .split(area);

        self.render_sliders(frame, columns[0], state);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(columns[1]);

        self.render_result(frame, right[0], state);
        self.render_sweep_chart(frame, right[1], state);
    }
}

impl Screen for EquationScreen {
    fn title(&self) -> &str {
        "Equation"
    }
}
