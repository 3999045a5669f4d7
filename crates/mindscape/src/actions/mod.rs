//! Action handlers bridging key events to core calls and file writes.

use std::fs;
use std::path::PathBuf;

use jiff::Zoned;

use mindscape_core::export;
use mindscape_core::fitting::{fit_power_law, parse_observations};
use mindscape_core::model::ParameterSet;

use crate::state::{AppState, MessageModal, ModalState};
use crate::util::io::atomic_write;

/// Result of an action handler.
pub enum ActionResult {
    /// Action finished; optionally open a follow-up modal.
    Done(Option<ModalState>),
    /// Action failed with a message for the status bar.
    Error(String),
}

impl ActionResult {
    pub fn close() -> Self {
        ActionResult::Done(None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// The entry the History tab's export keys act on: the selected history
/// entry, falling back to the live parameter set when the log is empty.
fn export_target(state: &AppState) -> Result<(ParameterSet, f64), String> {
    if let Some(entry) = state.history.nth_newest(state.history_state.selected) {
        return Ok((entry.params, entry.value));
    }
    match state.result {
        Ok(value) => Ok((state.params, value)),
        Err(ref e) => Err(format!("nothing to export: {e}")),
    }
}

/// Serialize the export target and write it into the data directory.
pub fn handle_export(state: &AppState, format: ExportFormat) -> ActionResult {
    let (params, value) = match export_target(state) {
        Ok(target) => target,
        Err(message) => return ActionResult::Error(message),
    };

    let content = match format {
        ExportFormat::Csv => export::to_csv(&params, value),
        ExportFormat::Json => export::to_json(&params, value),
    };

    let dir = state
        .data_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    if let Err(e) = fs::create_dir_all(&dir) {
        return ActionResult::Error(format!("failed to create {}: {e}", dir.display()));
    }

    let stamp = Zoned::now().strftime("%Y%m%d-%H%M%S").to_string();
    let path = dir.join(format!("mindscape-{stamp}.{}", format.extension()));

    match atomic_write(&path, &content) {
        Ok(()) => {
            tracing::info!("exported evaluation to {}", path.display());
            ActionResult::Done(Some(ModalState::Message(MessageModal::info(
                "Exported",
                &format!("Wrote {}", path.display()),
            ))))
        }
        Err(e) => ActionResult::Error(format!("failed to write {}: {e}", path.display())),
    }
}

/// Load an observations CSV and fit the power-law exponent.
///
/// Every failure path (unreadable file, malformed CSV, degenerate fit)
/// comes back as an error message; the session carries on either way.
pub fn handle_load_observations(state: &mut AppState, raw_path: &str) -> ActionResult {
    let path = PathBuf::from(raw_path.trim());
    if path.as_os_str().is_empty() {
        return ActionResult::Error("no path given".to_string());
    }

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            return ActionResult::Error(format!("failed to read {}: {e}", path.display()));
        }
    };

    let observations = match parse_observations(&content) {
        Ok(observations) => observations,
        Err(e) => return ActionResult::Error(format!("{}: {e}", path.display())),
    };

    match fit_power_law(&observations) {
        Ok(fit) => {
            tracing::info!(
                "fitted p = {:.3} over {} observations from {}",
                fit.exponent,
                fit.observations,
                path.display()
            );
            state.fitting_state.fit = Some(fit);
            state.fitting_state.source = Some(path);
            ActionResult::close()
        }
        Err(e) => ActionResult::Error(format!("fit failed: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn export_writes_a_parseable_file() {
        let dir = tempdir().unwrap();
        let mut state = AppState::with_data_dir(dir.path().to_path_buf());
        state.record_evaluation();

        match handle_export(&state, ExportFormat::Csv) {
            ActionResult::Done(Some(ModalState::Message(_))) => {}
            _ => panic!("expected a confirmation modal"),
        }

        let entry = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .find(|e| e.path().extension().is_some_and(|ext| ext == "csv"))
            .expect("an exported CSV file");
        let content = fs::read_to_string(entry.path()).unwrap();

        let (params, value) = export::parse_csv(&content).unwrap();
        assert_eq!(params, state.params);
        assert_eq!(value, state.result.clone().unwrap());
    }

    #[test]
    fn load_observations_reports_missing_files() {
        let mut state = AppState::new();
        match handle_load_observations(&mut state, "/definitely/not/here.csv") {
            ActionResult::Error(message) => assert!(message.contains("failed to read")),
            _ => panic!("expected an error"),
        }
        assert!(state.fitting_state.fit.is_none());
    }

    #[test]
    fn load_observations_fits_valid_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("obs.csv");
        fs::write(&path, "R,D,C_obs\n4.0,2.0,1.0\n9.0,3.0,1.0\n").unwrap();

        let mut state = AppState::new();
        match handle_load_observations(&mut state, path.to_str().unwrap()) {
            ActionResult::Done(None) => {}
            _ => panic!("expected success"),
        }

        let fit = state.fitting_state.fit.expect("a stored fit");
        assert!((fit.exponent - 2.0).abs() < 1e-9);
        assert_eq!(state.fitting_state.source, Some(path));
    }

    #[test]
    fn load_observations_reports_malformed_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "R,D\n1,2\n").unwrap();

        let mut state = AppState::new();
        match handle_load_observations(&mut state, path.to_str().unwrap()) {
            ActionResult::Error(message) => assert!(message.contains("C_obs")),
            _ => panic!("expected an error"),
        }
    }
}
