//! The ten named parameters and their UI ranges.

use serde::{Deserialize, Serialize};

/// The ten inputs to the formula, in canonical order.
///
/// The canonical order (R, alpha, theta, S, Q, A, E, M, Dn, beta) is the
/// column order used by CSV/JSON export and the display order everywhere in
/// the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parameter {
    R,
    Alpha,
    Theta,
    S,
    Q,
    A,
    E,
    M,
    Dn,
    Beta,
}

impl Parameter {
    pub const ALL: [Parameter; 10] = [
        Parameter::R,
        Parameter::Alpha,
        Parameter::Theta,
        Parameter::S,
        Parameter::Q,
        Parameter::A,
        Parameter::E,
        Parameter::M,
        Parameter::Dn,
        Parameter::Beta,
    ];

    pub const COUNT: usize = 10;

    /// Short key used in serialized output (CSV header, JSON object keys).
    pub fn key(&self) -> &'static str {
        match self {
            Parameter::R => "R",
            Parameter::Alpha => "alpha",
            Parameter::Theta => "theta",
            Parameter::S => "S",
            Parameter::Q => "Q",
            Parameter::A => "A",
            Parameter::E => "E",
            Parameter::M => "M",
            Parameter::Dn => "Dn",
            Parameter::Beta => "beta",
        }
    }

    /// Human-readable label for list views.
    pub fn label(&self) -> &'static str {
        match self {
            Parameter::R => "Sensory Processing",
            Parameter::Alpha => "Alpha",
            Parameter::Theta => "Theta",
            Parameter::S => "Stimulus",
            Parameter::Q => "Quality",
            Parameter::A => "Attention",
            Parameter::E => "Environment",
            Parameter::M => "Memory",
            Parameter::Dn => "Distraction",
            Parameter::Beta => "Beta",
        }
    }

    /// Display symbol (Greek where the formula uses one).
    pub fn symbol(&self) -> &'static str {
        match self {
            Parameter::R => "R",
            Parameter::Alpha => "α",
            Parameter::Theta => "θ",
            Parameter::S => "S",
            Parameter::Q => "Q",
            Parameter::A => "A",
            Parameter::E => "E",
            Parameter::M => "M",
            Parameter::Dn => "Dₙ",
            Parameter::Beta => "β",
        }
    }

    pub fn index(&self) -> usize {
        Parameter::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Parameter::ALL.get(index).copied()
    }

    /// Look up a parameter by its serialized key (case-sensitive).
    pub fn from_key(key: &str) -> Option<Self> {
        Parameter::ALL.iter().copied().find(|p| p.key() == key)
    }

    /// The next parameter in canonical order, wrapping around.
    pub fn next(&self) -> Self {
        Parameter::from_index((self.index() + 1) % Parameter::COUNT).unwrap_or(Parameter::R)
    }
}

/// An immutable assignment of all ten parameters.
///
/// A `ParameterSet` is created fresh per interaction and handed to the
/// evaluator by reference; substitution goes through [`ParameterSet::with`]
/// rather than mutation so callers never share a half-updated set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    #[serde(rename = "R")]
    pub r: f64,
    pub alpha: f64,
    pub theta: f64,
    #[serde(rename = "S")]
    pub s: f64,
    #[serde(rename = "Q")]
    pub q: f64,
    #[serde(rename = "A")]
    pub a: f64,
    #[serde(rename = "E")]
    pub e: f64,
    #[serde(rename = "M")]
    pub m: f64,
    #[serde(rename = "Dn")]
    pub dn: f64,
    pub beta: f64,
}

impl ParameterSet {
    /// The fixed demo scenario: every base variable at 5.0, the exponent
    /// family at 1.0. Evaluates to exactly 6500 under the original formula.
    pub fn demo() -> Self {
        Self {
            r: 5.0,
            alpha: 1.0,
            theta: 1.0,
            s: 5.0,
            q: 5.0,
            a: 5.0,
            e: 5.0,
            m: 5.0,
            dn: 5.0,
            beta: 1.0,
        }
    }

    /// A set with every parameter at the same magnitude.
    pub fn uniform(value: f64) -> Self {
        Self {
            r: value,
            alpha: value,
            theta: value,
            s: value,
            q: value,
            a: value,
            e: value,
            m: value,
            dn: value,
            beta: value,
        }
    }

    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::R => self.r,
            Parameter::Alpha => self.alpha,
            Parameter::Theta => self.theta,
            Parameter::S => self.s,
            Parameter::Q => self.q,
            Parameter::A => self.a,
            Parameter::E => self.e,
            Parameter::M => self.m,
            Parameter::Dn => self.dn,
            Parameter::Beta => self.beta,
        }
    }

    pub fn set(&mut self, parameter: Parameter, value: f64) {
        match parameter {
            Parameter::R => self.r = value,
            Parameter::Alpha => self.alpha = value,
            Parameter::Theta => self.theta = value,
            Parameter::S => self.s = value,
            Parameter::Q => self.q = value,
            Parameter::A => self.a = value,
            Parameter::E => self.e = value,
            Parameter::M => self.m = value,
            Parameter::Dn => self.dn = value,
            Parameter::Beta => self.beta = value,
        }
    }

    /// Copy of this set with a single parameter substituted.
    #[must_use]
    pub fn with(&self, parameter: Parameter, value: f64) -> Self {
        let mut copy = *self;
        copy.set(parameter, value);
        copy
    }

    /// Values in canonical order.
    pub fn values(&self) -> [f64; 10] {
        let mut out = [0.0; 10];
        for (slot, parameter) in out.iter_mut().zip(Parameter::ALL) {
            *slot = self.get(parameter);
        }
        out
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::demo()
    }
}

/// Inclusive per-parameter bounds used by the UI sliders and the random
/// scenario generator.
///
/// The formula itself imposes no range restriction beyond its domain checks;
/// these bounds exist so the sliders and uniform draws stay inside values the
/// evaluator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRanges {
    bounds: [(f64, f64); 10],
}

impl ParamRanges {
    pub fn new(bounds: [(f64, f64); 10]) -> Self {
        Self { bounds }
    }

    pub fn min(&self, parameter: Parameter) -> f64 {
        self.bounds[parameter.index()].0
    }

    pub fn max(&self, parameter: Parameter) -> f64 {
        self.bounds[parameter.index()].1
    }

    pub fn bounds(&self, parameter: Parameter) -> (f64, f64) {
        self.bounds[parameter.index()]
    }

    pub fn span(&self, parameter: Parameter) -> f64 {
        let (min, max) = self.bounds(parameter);
        max - min
    }

    pub fn clamp(&self, parameter: Parameter, value: f64) -> f64 {
        let (min, max) = self.bounds(parameter);
        value.clamp(min, max)
    }

    /// True when every parameter of `set` lies inside its declared range.
    pub fn contains(&self, set: &ParameterSet) -> bool {
        Parameter::ALL.iter().all(|&p| {
            let (min, max) = self.bounds(p);
            let v = set.get(p);
            v >= min && v <= max
        })
    }
}

impl Default for ParamRanges {
    /// Base variables span [0.1, 10]; alpha, theta and beta span [0.1, 5].
    fn default() -> Self {
        let mut bounds = [(0.1, 10.0); 10];
        for parameter in [Parameter::Alpha, Parameter::Theta, Parameter::Beta] {
            bounds[parameter.index()] = (0.1, 5.0);
        }
        Self { bounds }
    }
}
