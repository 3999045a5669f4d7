//! Tests for the random-walk universe timelines

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::equation::EquationMode;
use crate::model::ParamRanges;
use crate::universe::{UniverseConfig, simulate_universes};

#[test]
fn timelines_match_requested_dimensions() {
    let mut rng = StdRng::seed_from_u64(11);
    let config = UniverseConfig {
        universes: 4,
        steps: 25,
        perturbation: 0.2,
    };

    let result =
        simulate_universes(EquationMode::Original, &config, &ParamRanges::default(), &mut rng)
            .unwrap();

    assert_eq!(result.timelines.len(), 4);
    for timeline in &result.timelines {
        assert_eq!(timeline.len(), 25);
        assert!(timeline.iter().all(|v| v.is_finite()));
    }
}

#[test]
fn zero_perturbation_holds_timelines_flat() {
    let mut rng = StdRng::seed_from_u64(12);
    let config = UniverseConfig {
        universes: 2,
        steps: 10,
        perturbation: 0.0,
    };

    let result =
        simulate_universes(EquationMode::Original, &config, &ParamRanges::default(), &mut rng)
            .unwrap();

    for timeline in &result.timelines {
        for &value in &timeline[1..] {
            assert_eq!(value, timeline[0]);
        }
    }
}

#[test]
fn config_is_clamped_to_supported_intervals() {
    let config = UniverseConfig {
        universes: 99,
        steps: 1,
        perturbation: 7.0,
    }
    .clamped();

    assert_eq!(config.universes, UniverseConfig::MAX_UNIVERSES);
    assert_eq!(config.steps, UniverseConfig::MIN_STEPS);
    assert_eq!(config.perturbation, UniverseConfig::MAX_PERTURBATION);
}

#[test]
fn walks_never_leave_the_evaluator_domain() {
    // A large perturbation drives values toward the range edges; clamping
    // must keep every step evaluable.
    let mut rng = StdRng::seed_from_u64(13);
    let config = UniverseConfig {
        universes: 10,
        steps: 100,
        perturbation: 1.0,
    };

    let result =
        simulate_universes(EquationMode::Original, &config, &ParamRanges::default(), &mut rng);
    assert!(result.is_ok());
}
