//! The formula evaluator.
//!
//! Four response models share the same ten-parameter input. `Original` is
//! the full formula; the other three are the reduced R-versus-Dn models kept
//! from the reference data-fitting work. Evaluation is pure and
//! deterministic, and every domain violation is a typed error rather than a
//! silently propagated NaN.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::model::{Parameter, ParameterSet};

/// Fixed weight applied to attention in the original formula.
pub const ATTENTION_WEIGHT: f64 = 1.3;
/// Fixed weight applied to memory in the original formula.
pub const MEMORY_WEIGHT: f64 = 1.6;

// Reduced-model constants, matching the reference fits.
const POWER_LAW_EXPONENT: f64 = 1.0;
const INVERTED_U_LAMBDA: f64 = 0.1;
const SATURATION_K: f64 = 1.0;

/// Which response model to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationMode {
    /// `C = (R * alpha^theta * S * Q * 1.3A * E * 1.6M) / (Dn * beta^theta)`
    Original,
    /// `C = R / Dn`
    PowerLaw,
    /// `C = R * Dn * exp(-0.1 * Dn)`
    InvertedU,
    /// `C = R * Dn / (Dn + 1)`
    Saturation,
}

impl EquationMode {
    pub const ALL: [EquationMode; 4] = [
        EquationMode::Original,
        EquationMode::PowerLaw,
        EquationMode::InvertedU,
        EquationMode::Saturation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EquationMode::Original => "Original",
            EquationMode::PowerLaw => "Power Law",
            EquationMode::InvertedU => "Inverted-U",
            EquationMode::Saturation => "Saturation",
        }
    }

    /// The next mode in display order, wrapping around.
    pub fn next(&self) -> Self {
        let index = EquationMode::ALL.iter().position(|m| m == self).unwrap_or(0);
        EquationMode::ALL[(index + 1) % EquationMode::ALL.len()]
    }
}

impl Default for EquationMode {
    fn default() -> Self {
        EquationMode::Original
    }
}

/// Evaluate `mode` at `set`.
///
/// # Errors
///
/// - [`DomainError::NonFiniteInput`] when any parameter is NaN or infinite
/// - [`DomainError::ZeroDenominator`] when Dn = 0, or beta = 0 with a
///   non-zero theta (beta^theta is then zero or undefined in the denominator)
/// - [`DomainError::NegativeFractionalPower`] when alpha or beta is negative
///   while theta is non-integer; real-valued exponentiation is undefined
///   there, and rejecting is this crate's documented choice
/// - [`DomainError::NonFiniteResult`] when the arithmetic overflows
pub fn evaluate(mode: EquationMode, set: &ParameterSet) -> Result<f64, DomainError> {
    for parameter in Parameter::ALL {
        let value = set.get(parameter);
        if !value.is_finite() {
            return Err(DomainError::NonFiniteInput { parameter, value });
        }
    }

    let c = match mode {
        EquationMode::Original => original(set)?,
        EquationMode::PowerLaw => {
            if set.dn == 0.0 {
                return Err(DomainError::ZeroDenominator {
                    parameter: Parameter::Dn,
                });
            }
            set.r / set.dn.powf(POWER_LAW_EXPONENT)
        }
        EquationMode::InvertedU => {
            set.r * set.dn.powf(POWER_LAW_EXPONENT) * (-INVERTED_U_LAMBDA * set.dn).exp()
        }
        EquationMode::Saturation => {
            let dp = set.dn.powf(POWER_LAW_EXPONENT);
            set.r * dp / (dp + SATURATION_K)
        }
    };

    if c.is_finite() {
        Ok(c)
    } else {
        Err(DomainError::NonFiniteResult)
    }
}

fn original(set: &ParameterSet) -> Result<f64, DomainError> {
    let fractional_theta = set.theta.fract() != 0.0;

    for (parameter, base) in [(Parameter::Alpha, set.alpha), (Parameter::Beta, set.beta)] {
        if base < 0.0 && fractional_theta {
            return Err(DomainError::NegativeFractionalPower {
                parameter,
                base,
                exponent: set.theta,
            });
        }
    }

    if set.dn == 0.0 {
        return Err(DomainError::ZeroDenominator {
            parameter: Parameter::Dn,
        });
    }
    if set.beta == 0.0 && set.theta != 0.0 {
        return Err(DomainError::ZeroDenominator {
            parameter: Parameter::Beta,
        });
    }

    let numerator = set.r
        * set.alpha.powf(set.theta)
        * set.s
        * set.q
        * (ATTENTION_WEIGHT * set.a)
        * set.e
        * (MEMORY_WEIGHT * set.m);
    let denominator = set.dn * set.beta.powf(set.theta);

    Ok(numerator / denominator)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    mode: EquationMode,
    bits: [u64; 10],
}

impl CacheKey {
    fn new(mode: EquationMode, set: &ParameterSet) -> Self {
        let mut bits = [0u64; 10];
        for (slot, value) in bits.iter_mut().zip(set.values()) {
            *slot = value.to_bits();
        }
        Self { mode, bits }
    }
}

/// Memoization of successful evaluations, keyed by the exact bit pattern of
/// the inputs.
///
/// Purely a performance nicety for callers that re-evaluate the same set
/// repeatedly (the UI evaluates on every redraw); correctness never depends
/// on it. Failed evaluations are not cached.
#[derive(Debug, Default)]
pub struct EvalCache {
    map: FxHashMap<CacheKey, f64>,
}

impl EvalCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Like [`evaluate`], consulting the cache first.
    pub fn evaluate(
        &mut self,
        mode: EquationMode,
        set: &ParameterSet,
    ) -> Result<f64, DomainError> {
        let key = CacheKey::new(mode, set);
        if let Some(&value) = self.map.get(&key) {
            return Ok(value);
        }
        let value = evaluate(mode, set)?;
        self.map.insert(key, value);
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}
