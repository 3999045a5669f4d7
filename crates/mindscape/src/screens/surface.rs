use crate::components::charts::surface::render_surface;
use crate::components::{Component, EventResult};
use crate::state::{AppState, MAX_SURFACE_STEPS, MIN_SURFACE_STEPS};
use crossterm::event::{KeyCode, KeyEvent};
use mindscape_core::grid::{SweepAxis, sample_surface};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::Screen;

pub struct SurfaceScreen;

impl SurfaceScreen {
    pub fn new() -> Self {
        Self
    }

    /// Advance an axis to the next parameter, skipping the other axis.
    fn cycle_x(state: &mut AppState) {
        let mut next = state.surface_state.x_parameter.next();
        if next == state.surface_state.y_parameter {
            next = next.next();
        }
        state.surface_state.x_parameter = next;
    }

    fn cycle_y(state: &mut AppState) {
        let mut next = state.surface_state.y_parameter.next();
        if next == state.surface_state.x_parameter {
            next = next.next();
        }
        state.surface_state.y_parameter = next;
    }
}

impl Default for SurfaceScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SurfaceScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('x') => {
                Self::cycle_x(state);
                EventResult::Handled
            }
            KeyCode::Char('y') => {
                Self::cycle_y(state);
                EventResult::Handled
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                state.surface_state.resolution =
                    (state.surface_state.resolution + 5).min(MAX_SURFACE_STEPS);
                EventResult::Handled
            }
            KeyCode::Char('-') => {
                state.surface_state.resolution = state
                    .surface_state
                    .resolution
                    .saturating_sub(5)
                    .max(MIN_SURFACE_STEPS);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let surface = &state.surface_state;
        let block = Block::default().borders(Borders::ALL).title(format!(
            " SURFACE: C over {} × {} ({res}×{res} samples) ",
            surface.x_parameter.symbol(),
            surface.y_parameter.symbol(),
            res = surface.resolution,
        ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let x_axis = SweepAxis::over_range(surface.x_parameter, &state.ranges, surface.resolution);
        let y_axis = SweepAxis::over_range(surface.y_parameter, &state.ranges, surface.resolution);

        match sample_surface(state.mode, &state.params, &x_axis, &y_axis) {
            Ok(grid) => render_surface(frame, inner, &grid),
            Err(e) => {
                let msg = Paragraph::new(format!("surface unavailable: {e}"))
                    .style(Style::default().fg(Color::Red));
                frame.render_widget(msg, inner);
            }
        }
    }
}

impl Screen for SurfaceScreen {
    fn title(&self) -> &str {
        "Surface"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use mindscape_core::model::Parameter;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn axes_never_coincide() {
        let mut screen = SurfaceScreen::new();
        let mut state = AppState::new();

        for _ in 0..Parameter::COUNT * 2 {
            screen.handle_key(key(KeyCode::Char('x')), &mut state);
            assert_ne!(
                state.surface_state.x_parameter,
                state.surface_state.y_parameter
            );
        }
        for _ in 0..Parameter::COUNT * 2 {
            screen.handle_key(key(KeyCode::Char('y')), &mut state);
            assert_ne!(
                state.surface_state.x_parameter,
                state.surface_state.y_parameter
            );
        }
    }

    #[test]
    fn resolution_stays_bounded() {
        let mut screen = SurfaceScreen::new();
        let mut state = AppState::new();

        for _ in 0..20 {
            screen.handle_key(key(KeyCode::Char('+')), &mut state);
        }
        assert_eq!(state.surface_state.resolution, MAX_SURFACE_STEPS);

        for _ in 0..20 {
            screen.handle_key(key(KeyCode::Char('-')), &mut state);
        }
        assert_eq!(state.surface_state.resolution, MIN_SURFACE_STEPS);
    }
}
