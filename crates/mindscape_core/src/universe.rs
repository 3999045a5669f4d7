//! Random-walk "universe" timelines.
//!
//! Each universe starts from a random parameter set and drifts: after every
//! evaluation, R takes a uniform step of up to the perturbation magnitude
//! and alpha, beta, theta, A and M take steps a tenth that size. Perturbed
//! values are clamped to the declared ranges so a walk can never wander out
//! of the evaluator's domain.

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::equation::{EquationMode, evaluate};
use crate::error::DomainError;
use crate::model::{ParamRanges, Parameter, ParameterSet};

/// Parameters receiving the smaller (tenth-magnitude) perturbation.
const DRIFT_PARAMS: [Parameter; 5] = [
    Parameter::Alpha,
    Parameter::Beta,
    Parameter::Theta,
    Parameter::A,
    Parameter::M,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniverseConfig {
    pub universes: usize,
    pub steps: usize,
    pub perturbation: f64,
}

impl UniverseConfig {
    pub const MIN_UNIVERSES: usize = 1;
    pub const MAX_UNIVERSES: usize = 10;
    pub const MIN_STEPS: usize = 10;
    pub const MAX_STEPS: usize = 100;
    pub const MAX_PERTURBATION: f64 = 1.0;

    /// Clamp every field into its supported interval.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.universes = self.universes.clamp(Self::MIN_UNIVERSES, Self::MAX_UNIVERSES);
        self.steps = self.steps.clamp(Self::MIN_STEPS, Self::MAX_STEPS);
        self.perturbation = self.perturbation.clamp(0.0, Self::MAX_PERTURBATION);
        self
    }
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            universes: 3,
            steps: 50,
            perturbation: 0.1,
        }
    }
}

/// One timeline per universe, each `steps` values long.
#[derive(Debug, Clone, PartialEq)]
pub struct UniverseResult {
    pub timelines: Vec<Vec<f64>>,
}

impl UniverseResult {
    /// Smallest and largest value across all timelines, if any.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.timelines
            .iter()
            .flatten()
            .copied()
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Run every universe to completion.
pub fn simulate_universes<R: Rng + ?Sized>(
    mode: EquationMode,
    config: &UniverseConfig,
    ranges: &ParamRanges,
    rng: &mut R,
) -> Result<UniverseResult, DomainError> {
    let config = config.clamped();
    let mut timelines = Vec::with_capacity(config.universes);

    for _ in 0..config.universes {
        let mut set = seed_universe(rng);
        let mut timeline = Vec::with_capacity(config.steps);

        for _ in 0..config.steps {
            timeline.push(evaluate(mode, &set)?);
            perturb(&mut set, config.perturbation, ranges, rng);
        }

        timelines.push(timeline);
    }

    Ok(UniverseResult { timelines })
}

/// Starting point for a universe: mid-range base variables, near-unit
/// exponent family.
fn seed_universe<R: Rng + ?Sized>(rng: &mut R) -> ParameterSet {
    let base = Uniform::new_inclusive(0.5, 5.0);
    let near_unit = Uniform::new_inclusive(0.8, 1.5);
    let theta = Uniform::new_inclusive(0.5, 3.0);

    let mut set = ParameterSet::uniform(0.0);
    for parameter in Parameter::ALL {
        let value = match parameter {
            Parameter::Alpha | Parameter::Beta => near_unit.sample(rng),
            Parameter::Theta => theta.sample(rng),
            _ => base.sample(rng),
        };
        set.set(parameter, value);
    }
    set
}

fn perturb<R: Rng + ?Sized>(
    set: &mut ParameterSet,
    magnitude: f64,
    ranges: &ParamRanges,
    rng: &mut R,
) {
    if magnitude == 0.0 {
        return;
    }

    let step = Uniform::new_inclusive(-magnitude, magnitude);
    let drift = Uniform::new_inclusive(-magnitude * 0.1, magnitude * 0.1);

    let r = set.r + step.sample(rng);
    set.r = ranges.clamp(Parameter::R, r);

    for parameter in DRIFT_PARAMS {
        let value = set.get(parameter) + drift.sample(rng);
        set.set(parameter, ranges.clamp(parameter, value));
    }
}
