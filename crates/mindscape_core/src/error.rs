use std::fmt;

use crate::model::Parameter;

/// Errors from evaluating the formula outside its domain.
///
/// The evaluator fails loudly instead of letting NaN or infinity leak into
/// results: a zero denominator, a negative base under a fractional exponent,
/// or a non-finite input all produce a typed error the caller can surface.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// An input was NaN or infinite before evaluation even started.
    NonFiniteInput { parameter: Parameter, value: f64 },
    /// The denominator is zero (Dn = 0, or beta^theta = 0).
    ZeroDenominator { parameter: Parameter },
    /// A negative base raised to a non-integer exponent has no real value.
    NegativeFractionalPower {
        parameter: Parameter,
        base: f64,
        exponent: f64,
    },
    /// The arithmetic itself overflowed to a non-finite value.
    NonFiniteResult,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NonFiniteInput { parameter, value } => {
                write!(f, "{} is not a finite number ({value})", parameter.key())
            }
            DomainError::ZeroDenominator { parameter } => {
                write!(f, "division by zero: {} makes the denominator vanish", parameter.key())
            }
            DomainError::NegativeFractionalPower {
                parameter,
                base,
                exponent,
            } => {
                write!(
                    f,
                    "{}^theta is undefined for negative base {base} and non-integer exponent {exponent}",
                    parameter.key()
                )
            }
            DomainError::NonFiniteResult => write!(f, "result overflowed to a non-finite value"),
        }
    }
}

impl std::error::Error for DomainError {}

/// Errors from sweeping the evaluator over a grid.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Both surface axes name the same parameter.
    DuplicateAxis(Parameter),
    /// Fewer than two samples requested along an axis.
    BadResolution(usize),
    /// A grid cell fell outside the evaluator's domain.
    Domain(DomainError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::DuplicateAxis(parameter) => {
                write!(f, "both axes sweep {}", parameter.key())
            }
            GridError::BadResolution(steps) => {
                write!(f, "an axis needs at least 2 samples, got {steps}")
            }
            GridError::Domain(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GridError::Domain(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DomainError> for GridError {
    fn from(e: DomainError) -> Self {
        GridError::Domain(e)
    }
}

/// Errors from parsing observation data or fitting the power-law model.
#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    /// The header row lacks a required column.
    MissingColumn(&'static str),
    /// A data row could not be parsed.
    Malformed { line: usize, reason: String },
    /// A value that must be strictly positive was not.
    NonPositive {
        line: usize,
        column: &'static str,
        value: f64,
    },
    /// Fewer observations than the fit needs.
    TooFewPoints(usize),
    /// All predictor values coincide; the exponent is unidentifiable.
    Degenerate,
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::MissingColumn(name) => write!(f, "missing column {name:?}"),
            FitError::Malformed { line, reason } => {
                write!(f, "line {line}: {reason}")
            }
            FitError::NonPositive {
                line,
                column,
                value,
            } => {
                write!(f, "line {line}: {column} must be positive, got {value}")
            }
            FitError::TooFewPoints(n) => {
                write!(f, "need at least 2 observations to fit, got {n}")
            }
            FitError::Degenerate => {
                write!(f, "all D values are 1; the exponent cannot be identified")
            }
        }
    }
}

impl std::error::Error for FitError {}

/// Errors from parsing exported CSV/JSON back into a parameter set.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportError {
    Json(String),
    Csv(String),
    MissingField(&'static str),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Json(msg) => write!(f, "JSON parse error: {msg}"),
            ExportError::Csv(msg) => write!(f, "CSV parse error: {msg}"),
            ExportError::MissingField(name) => write!(f, "missing field {name:?}"),
        }
    }
}

impl std::error::Error for ExportError {}
