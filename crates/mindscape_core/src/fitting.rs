//! Power-law fitting against observed data.
//!
//! Observations come in as CSV with columns `R,D,C_obs`; the fit finds the
//! exponent `p` in `C = R / D^p` by least squares in log space. Malformed
//! input and unidentifiable fits are reported as [`FitError`], never as a
//! panic — callers show the message and carry on.

use crate::error::FitError;

/// One observed data point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub r: f64,
    pub d: f64,
    pub c_obs: f64,
}

/// Result of a power-law fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawFit {
    /// Fitted exponent `p` in `C = R / D^p`.
    pub exponent: f64,
    /// Root-mean-square residual in log space.
    pub residual_rms: f64,
    /// How many observations went into the fit.
    pub observations: usize,
}

const REQUIRED_COLUMNS: [&str; 3] = ["r", "d", "c_obs"];

/// Parse observation CSV.
///
/// The first non-empty line must be a header containing (at least) the
/// columns `R`, `D` and `C_obs`, matched case-insensitively; extra columns
/// are ignored. Each following non-empty line is one observation.
pub fn parse_observations(csv: &str) -> Result<Vec<Observation>, FitError> {
    let mut lines = csv
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (_, header) = lines.next().ok_or(FitError::TooFewPoints(0))?;
    let columns: Vec<String> = header
        .split(',')
        .map(|c| c.trim().to_ascii_lowercase())
        .collect();

    let mut indices = [0usize; 3];
    for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = columns
            .iter()
            .position(|c| c == name)
            .ok_or(FitError::MissingColumn(match name {
                "r" => "R",
                "d" => "D",
                _ => "C_obs",
            }))?;
    }

    let mut observations = Vec::new();
    for (line_no, line) in lines {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let mut values = [0.0f64; 3];
        for (slot, &index) in values.iter_mut().zip(&indices) {
            let field = fields.get(index).ok_or_else(|| FitError::Malformed {
                line: line_no,
                reason: format!("expected at least {} fields, got {}", index + 1, fields.len()),
            })?;
            *slot = field.parse().map_err(|_| FitError::Malformed {
                line: line_no,
                reason: format!("{field:?} is not a number"),
            })?;
        }
        let [r, d, c_obs] = values;
        for (column, value) in [("R", r), ("D", d), ("C_obs", c_obs)] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(FitError::NonPositive {
                    line: line_no,
                    column,
                    value,
                });
            }
        }
        observations.push(Observation { r, d, c_obs });
    }

    Ok(observations)
}

/// Fit the exponent of `C = R / D^p` by least squares in log space.
///
/// Taking logs gives `ln C = ln R - p ln D`, so the residual for each
/// observation is linear in `p` and the minimizer has the closed form
/// `p = sum(ln D * (ln R - ln C)) / sum((ln D)^2)`.
pub fn fit_power_law(observations: &[Observation]) -> Result<PowerLawFit, FitError> {
    if observations.len() < 2 {
        return Err(FitError::TooFewPoints(observations.len()));
    }

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for obs in observations {
        let ln_d = obs.d.ln();
        sxx += ln_d * ln_d;
        sxy += ln_d * (obs.r.ln() - obs.c_obs.ln());
    }

    if sxx < f64::EPSILON {
        return Err(FitError::Degenerate);
    }

    let exponent = sxy / sxx;

    let sum_sq: f64 = observations
        .iter()
        .map(|obs| {
            let predicted = obs.r.ln() - exponent * obs.d.ln();
            let residual = obs.c_obs.ln() - predicted;
            residual * residual
        })
        .sum();
    let residual_rms = (sum_sq / observations.len() as f64).sqrt();

    Ok(PowerLawFit {
        exponent,
        residual_rms,
        observations: observations.len(),
    })
}
