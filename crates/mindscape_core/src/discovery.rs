//! Random scenarios and the brute-force discovery search.
//!
//! Discovery is uniform random sampling ranked by evaluator output — sample,
//! sort, truncate. It involves no model and no learning, and nothing in this
//! module pretends otherwise. The "suggestion" presets are likewise exactly
//! what they look like: one fixed set and two uniform ranges.

use rand::Rng;
use rand_distr::{Distribution, Uniform};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::equation::{EquationMode, evaluate};
use crate::model::{ParamRanges, Parameter, ParameterSet};

/// Draw each of the ten parameters independently and uniformly from its
/// declared range (inclusive).
pub fn random_set<R: Rng + ?Sized>(rng: &mut R, ranges: &ParamRanges) -> ParameterSet {
    let mut set = ParameterSet::uniform(0.0);
    for parameter in Parameter::ALL {
        let (min, max) = ranges.bounds(parameter);
        set.set(parameter, Uniform::new_inclusive(min, max).sample(rng));
    }
    set
}

/// The three canned "suggestion" presets: a fixed balanced set and two
/// uniform random ranges. No computed suggestions anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionPreset {
    /// Every parameter at exactly 5.0.
    Balanced,
    /// Every parameter drawn from U[7.5, 10].
    High,
    /// Every parameter drawn from U[0.5, 10].
    Creative,
}

impl SuggestionPreset {
    pub const ALL: [SuggestionPreset; 3] = [
        SuggestionPreset::Balanced,
        SuggestionPreset::High,
        SuggestionPreset::Creative,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SuggestionPreset::Balanced => "Balanced",
            SuggestionPreset::High => "High",
            SuggestionPreset::Creative => "Creative",
        }
    }

    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> ParameterSet {
        match self {
            SuggestionPreset::Balanced => ParameterSet::uniform(5.0),
            SuggestionPreset::High => draw_uniform(rng, 7.5, 10.0),
            SuggestionPreset::Creative => draw_uniform(rng, 0.5, 10.0),
        }
    }
}

fn draw_uniform<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> ParameterSet {
    let dist = Uniform::new_inclusive(min, max);
    let mut set = ParameterSet::uniform(0.0);
    for parameter in Parameter::ALL {
        set.set(parameter, dist.sample(rng));
    }
    set
}

/// Named scenario presets that override R, Dn, A and M on top of the current
/// set, leaving the other six parameters alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioPreset {
    CreativeBoost,
    Cognitive,
    Physics,
}

impl ScenarioPreset {
    pub const ALL: [ScenarioPreset; 3] = [
        ScenarioPreset::CreativeBoost,
        ScenarioPreset::Cognitive,
        ScenarioPreset::Physics,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioPreset::CreativeBoost => "Creative Boost",
            ScenarioPreset::Cognitive => "Cognitive",
            ScenarioPreset::Physics => "Physics",
        }
    }

    /// (R, Dn, A, M) overrides for this preset.
    fn overrides(&self) -> (f64, f64, f64, f64) {
        match self {
            ScenarioPreset::CreativeBoost => (5.0, 2.0, 8.0, 7.0),
            ScenarioPreset::Cognitive => (3.0, 5.0, 5.0, 8.0),
            ScenarioPreset::Physics => (6.0, 6.0, 4.0, 4.0),
        }
    }

    #[must_use]
    pub fn apply(&self, base: &ParameterSet) -> ParameterSet {
        let (r, dn, a, m) = self.overrides();
        let mut set = *base;
        set.r = r;
        set.dn = dn;
        set.a = a;
        set.m = m;
        set
    }
}

/// How many random trials to draw and how many ranked results to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryConfig {
    pub trials: usize,
    pub top_k: usize,
}

impl DiscoveryConfig {
    pub const MIN_TRIALS: usize = 10;
    pub const MAX_TRIALS: usize = 500;

    /// Clamp `trials` into the supported interval.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.trials = self.trials.clamp(Self::MIN_TRIALS, Self::MAX_TRIALS);
        self
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            trials: 100,
            top_k: 5,
        }
    }
}

/// One evaluated trial.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryRecord {
    pub params: ParameterSet,
    pub value: f64,
}

/// Outcome of a discovery run.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryResult {
    /// Top-K trials, sorted by descending value.
    pub ranked: Vec<DiscoveryRecord>,
    /// How many trials were drawn.
    pub trials: usize,
    /// How many draws failed the evaluator's domain checks and were skipped.
    pub rejected: usize,
}

/// Draw `config.trials` random sets, evaluate each, and keep the top K by
/// descending value.
///
/// All draws happen up front in sequence, so a seeded `rng` yields the same
/// trial set whether or not evaluation runs in parallel.
pub fn discover<R: Rng + ?Sized>(
    mode: EquationMode,
    ranges: &ParamRanges,
    config: &DiscoveryConfig,
    rng: &mut R,
) -> DiscoveryResult {
    let config = config.clamped();
    let draws: Vec<ParameterSet> = (0..config.trials).map(|_| random_set(rng, ranges)).collect();

    #[cfg(feature = "parallel")]
    let evaluated: Vec<Option<DiscoveryRecord>> = draws
        .par_iter()
        .map(|params| {
            evaluate(mode, params).ok().map(|value| DiscoveryRecord {
                params: *params,
                value,
            })
        })
        .collect();

    #[cfg(not(feature = "parallel"))]
    let evaluated: Vec<Option<DiscoveryRecord>> = draws
        .iter()
        .map(|params| {
            evaluate(mode, params).ok().map(|value| DiscoveryRecord {
                params: *params,
                value,
            })
        })
        .collect();

    let rejected = evaluated.iter().filter(|r| r.is_none()).count();
    let mut ranked: Vec<DiscoveryRecord> = evaluated.into_iter().flatten().collect();
    ranked.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(config.top_k);

    DiscoveryResult {
        ranked,
        trials: config.trials,
        rejected,
    }
}
