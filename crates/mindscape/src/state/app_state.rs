use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use mindscape_core::discovery::{DiscoveryConfig, DiscoveryResult};
use mindscape_core::equation::{EquationMode, EvalCache};
use mindscape_core::error::DomainError;
use mindscape_core::fitting::PowerLawFit;
use mindscape_core::grid::SURFACE_STEPS;
use mindscape_core::model::{ParamRanges, Parameter, ParameterSet, SessionHistory};
use mindscape_core::universe::{UniverseConfig, UniverseResult};

use super::TabId;

/// Small slider increment (h/l).
pub const PARAM_STEP: f64 = 0.1;
/// Large slider increment (H/L).
pub const PARAM_STEP_LARGE: f64 = 1.0;

/// Surface resolution bounds for the +/- keys.
pub const MIN_SURFACE_STEPS: usize = 10;
pub const MAX_SURFACE_STEPS: usize = 40;

#[derive(Debug)]
pub struct EquationState {
    /// Index into `Parameter::ALL` of the highlighted slider.
    pub selected: usize,
    /// Which parameter the line chart sweeps.
    pub sweep_parameter: Parameter,
    /// Which suggestion preset the next `a` press applies.
    pub next_suggestion: usize,
    /// Which scenario preset the next `p` press applies.
    pub next_scenario: usize,
}

impl Default for EquationState {
    fn default() -> Self {
        Self {
            selected: 0,
            sweep_parameter: Parameter::S,
            next_suggestion: 0,
            next_scenario: 0,
        }
    }
}

#[derive(Debug)]
pub struct SurfaceState {
    pub x_parameter: Parameter,
    pub y_parameter: Parameter,
    pub resolution: usize,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            x_parameter: Parameter::A,
            y_parameter: Parameter::M,
            resolution: SURFACE_STEPS,
        }
    }
}

#[derive(Debug, Default)]
pub struct DiscoveryState {
    pub config: DiscoveryConfig,
    pub result: Option<DiscoveryResult>,
    pub selected: usize,
}

#[derive(Debug, Default)]
pub struct UniverseState {
    pub config: UniverseConfig,
    pub result: Option<UniverseResult>,
}

#[derive(Debug, Default)]
pub struct FittingState {
    /// Path the observations were loaded from.
    pub source: Option<PathBuf>,
    pub fit: Option<PowerLawFit>,
}

#[derive(Debug, Default)]
pub struct HistoryState {
    /// Selected entry, counted from the newest (0 = most recent).
    pub selected: usize,
}

#[derive(Debug)]
pub enum ModalState {
    None,
    Message(MessageModal),
    TextInput(TextInputModal),
}

#[derive(Debug)]
pub struct MessageModal {
    pub title: String,
    pub body: String,
}

impl MessageModal {
    pub fn info(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

/// What a confirmed text input should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    LoadObservations,
}

#[derive(Debug)]
pub struct TextInputModal {
    pub title: String,
    pub value: String,
    pub action: ModalAction,
}

impl TextInputModal {
    pub fn new(title: &str, action: ModalAction) -> Self {
        Self {
            title: title.to_string(),
            value: String::new(),
            action,
        }
    }
}

/// All mutable session state, owned by the UI layer.
///
/// The evaluator only ever sees immutable `ParameterSet` copies taken from
/// here; the history log lives and dies with this struct.
pub struct AppState {
    pub exit: bool,
    pub active_tab: TabId,
    pub error_message: Option<String>,
    pub modal: ModalState,
    pub data_dir: Option<PathBuf>,

    pub params: ParameterSet,
    pub ranges: ParamRanges,
    pub mode: EquationMode,
    /// Evaluation of `params` under `mode`, refreshed on every change.
    pub result: Result<f64, DomainError>,
    pub history: SessionHistory,
    pub rng: StdRng,
    cache: EvalCache,

    pub equation_state: EquationState,
    pub surface_state: SurfaceState,
    pub discovery_state: DiscoveryState,
    pub universe_state: UniverseState,
    pub fitting_state: FittingState,
    pub history_state: HistoryState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let params = ParameterSet::demo();
        let mode = EquationMode::default();
        let mut cache = EvalCache::new();
        let result = cache.evaluate(mode, &params);

        Self {
            exit: false,
            active_tab: TabId::Equation,
            error_message: None,
            modal: ModalState::None,
            data_dir: None,
            params,
            ranges: ParamRanges::default(),
            mode,
            result,
            history: SessionHistory::new(),
            rng: StdRng::from_entropy(),
            cache,
            equation_state: EquationState::default(),
            surface_state: SurfaceState::default(),
            discovery_state: DiscoveryState::default(),
            universe_state: UniverseState::default(),
            fitting_state: FittingState::default(),
            history_state: HistoryState::default(),
        }
    }

    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        let mut state = Self::new();
        state.data_dir = Some(data_dir);
        state
    }

    /// Re-evaluate the current set. Called after every parameter or mode
    /// change; the cache makes repeat visits free.
    pub fn refresh_result(&mut self) {
        self.result = self.cache.evaluate(self.mode, &self.params);
        if let Err(e) = &self.result {
            tracing::debug!("evaluation failed: {e}");
        }
    }

    /// Replace the whole parameter set.
    pub fn set_params(&mut self, params: ParameterSet) {
        self.params = params;
        self.refresh_result();
    }

    pub fn set_mode(&mut self, mode: EquationMode) {
        self.mode = mode;
        self.refresh_result();
    }

    /// The parameter highlighted on the equation screen.
    pub fn selected_parameter(&self) -> Parameter {
        Parameter::from_index(self.equation_state.selected).unwrap_or(Parameter::R)
    }

    /// Nudge the highlighted slider, clamped to its declared range.
    pub fn adjust_selected(&mut self, delta: f64) {
        let parameter = self.selected_parameter();
        let value = self.ranges.clamp(parameter, self.params.get(parameter) + delta);
        self.params.set(parameter, value);
        self.refresh_result();
    }

    /// Append the current evaluation to the history log.
    pub fn record_evaluation(&mut self) -> bool {
        match self.result {
            Ok(value) => {
                self.history.push(self.params, self.mode, value);
                self.history_state.selected = 0;
                true
            }
            Err(_) => false,
        }
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
        self.clear_error();
    }

    pub fn set_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjust_clamps_to_declared_range() {
        let mut state = AppState::new();
        state.equation_state.selected = Parameter::R.index();

        state.adjust_selected(1000.0);
        assert_eq!(state.params.r, state.ranges.max(Parameter::R));

        state.adjust_selected(-1000.0);
        assert_eq!(state.params.r, state.ranges.min(Parameter::R));
    }

    #[test]
    fn refresh_tracks_parameter_changes() {
        let mut state = AppState::new();
        let before = state.result.clone().unwrap();

        state.equation_state.selected = Parameter::S.index();
        state.adjust_selected(PARAM_STEP_LARGE);
        let after = state.result.clone().unwrap();

        assert!(after > before, "raising S must raise C");
    }

    #[test]
    fn recording_skips_failed_evaluations() {
        let mut state = AppState::new();
        state.set_params(ParameterSet::demo().with(Parameter::Dn, 0.0));

        assert!(state.result.is_err());
        assert!(!state.record_evaluation());
        assert!(state.history.is_empty());

        state.set_params(ParameterSet::demo());
        assert!(state.record_evaluation());
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn tab_switch_clears_errors() {
        let mut state = AppState::new();
        state.set_error("boom".to_string());
        state.switch_tab(TabId::Surface);

        assert_eq!(state.active_tab, TabId::Surface);
        assert!(state.error_message.is_none());
    }
}
