use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::actions::{self, ActionResult};
use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::modals::{ModalResult, handle_modal_key, render_modal};
use crate::screens::{
    discovery::DiscoveryScreen, equation::EquationScreen, fitting::FittingScreen,
    history::HistoryScreen, surface::SurfaceScreen, universe::UniverseScreen,
};
use crate::state::{AppState, ModalAction, ModalState, TabId};

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    equation_screen: EquationScreen,
    surface_screen: SurfaceScreen,
    discovery_screen: DiscoveryScreen,
    universe_screen: UniverseScreen,
    fitting_screen: FittingScreen,
    history_screen: HistoryScreen,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::from_state(AppState::default())
    }

    /// Create app with a data directory for logs and exports.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self::from_state(AppState::with_data_dir(data_dir))
    }

    fn from_state(state: AppState) -> Self {
        Self {
            state,
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            equation_screen: EquationScreen::new(),
            surface_screen: SurfaceScreen::new(),
            discovery_screen: DiscoveryScreen::new(),
            universe_screen: UniverseScreen::new(),
            fitting_screen: FittingScreen::new(),
            history_screen: HistoryScreen::new(),
        }
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Create main layout: tab bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);

        // Render modal overlay (if active)
        render_modal(frame, &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_tab {
            TabId::Equation => self.equation_screen.render(frame, area, &self.state),
            TabId::Surface => self.surface_screen.render(frame, area, &self.state),
            TabId::Discovery => self.discovery_screen.render(frame, area, &self.state),
            TabId::Universes => self.universe_screen.render(frame, area, &self.state),
            TabId::Fitting => self.fitting_screen.render(frame, area, &self.state),
            TabId::History => self.history_screen.render(frame, area, &self.state),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Handle modal first if active
        if !matches!(self.state.modal, ModalState::None) {
            match handle_modal_key(key_event, &mut self.state) {
                ModalResult::Confirmed(action, value) => {
                    self.state.modal = ModalState::None;
                    self.handle_modal_result(action, value);
                }
                ModalResult::Cancelled => {
                    self.state.modal = ModalState::None;
                }
                ModalResult::Continue => {}
            }
            return;
        }

        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        // Try tab bar first
        let result = self.tab_bar.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        // Then try active screen
        let result = match self.state.active_tab {
            TabId::Equation => self.equation_screen.handle_key(key_event, &mut self.state),
            TabId::Surface => self.surface_screen.handle_key(key_event, &mut self.state),
            TabId::Discovery => self.discovery_screen.handle_key(key_event, &mut self.state),
            TabId::Universes => self.universe_screen.handle_key(key_event, &mut self.state),
            TabId::Fitting => self.fitting_screen.handle_key(key_event, &mut self.state),
            TabId::History => self.history_screen.handle_key(key_event, &mut self.state),
        };

        if result == EventResult::Exit {
            self.state.exit = true
        }
    }

    fn handle_modal_result(&mut self, action: ModalAction, value: String) {
        let result = match action {
            ModalAction::LoadObservations => {
                actions::handle_load_observations(&mut self.state, &value)
            }
        };

        self.apply_action_result(result);
    }

    /// Apply the result of an action handler
    fn apply_action_result(&mut self, result: ActionResult) {
        match result {
            ActionResult::Done(modal) => {
                self.state.modal = modal.unwrap_or(ModalState::None);
            }
            ActionResult::Error(message) => {
                self.state.set_error(message);
                self.state.modal = ModalState::None;
            }
        }
    }
}
