//! Tests for the formula evaluator
//!
//! These tests verify that:
//! - The evaluator matches an independently computed reference expression
//! - Scale-linearity holds in each multiplicative parameter
//! - Inverse proportionality holds in Dn
//! - Domain violations produce typed errors, never NaN or infinity

use crate::equation::{
    ATTENTION_WEIGHT, EquationMode, EvalCache, MEMORY_WEIGHT, evaluate,
};
use crate::error::DomainError;
use crate::model::{Parameter, ParameterSet};

/// Independent oracle for the original formula, written out term by term.
fn reference(set: &ParameterSet) -> f64 {
    let numerator = set.r
        * set.alpha.powf(set.theta)
        * set.s
        * set.q
        * (ATTENTION_WEIGHT * set.a)
        * set.e
        * (MEMORY_WEIGHT * set.m);
    numerator / (set.dn * set.beta.powf(set.theta))
}

fn assert_close(actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() / scale < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn demo_scenario_matches_literal_evaluation() {
    // (5 * 1 * 5 * 5 * 6.5 * 5 * 8) / (5 * 1) = 32500 / 5
    let c = evaluate(EquationMode::Original, &ParameterSet::demo()).unwrap();
    assert_close(c, 6500.0);
}

#[test]
fn evaluator_matches_reference_oracle() {
    let sets = [
        ParameterSet::demo(),
        ParameterSet::uniform(1.0),
        ParameterSet {
            r: 2.5,
            alpha: 1.7,
            theta: 2.3,
            s: 9.1,
            q: 0.4,
            a: 3.3,
            e: 6.6,
            m: 1.2,
            dn: 7.7,
            beta: 0.9,
        },
        ParameterSet {
            r: 0.1,
            alpha: 4.9,
            theta: 0.2,
            s: 0.1,
            q: 10.0,
            a: 10.0,
            e: 0.1,
            m: 10.0,
            dn: 0.1,
            beta: 4.9,
        },
    ];

    for set in sets {
        let c = evaluate(EquationMode::Original, &set).unwrap();
        assert_close(c, reference(&set));
    }
}

#[test]
fn scale_linear_in_multiplicative_parameters() {
    let base = ParameterSet {
        r: 3.0,
        alpha: 1.4,
        theta: 2.0,
        s: 2.0,
        q: 7.0,
        a: 1.5,
        e: 4.0,
        m: 2.5,
        dn: 3.0,
        beta: 1.1,
    };
    let c0 = evaluate(EquationMode::Original, &base).unwrap();

    for parameter in [
        Parameter::R,
        Parameter::S,
        Parameter::Q,
        Parameter::A,
        Parameter::E,
        Parameter::M,
    ] {
        let doubled = base.with(parameter, base.get(parameter) * 2.0);
        let c1 = evaluate(EquationMode::Original, &doubled).unwrap();
        // Doubling scales by an exact power of two, so equality is exact.
        assert_eq!(
            c1,
            c0 * 2.0,
            "doubling {} should double the output",
            parameter.key()
        );
    }
}

#[test]
fn inverse_proportional_in_dn() {
    let base = ParameterSet::demo();
    let c_times_d: Vec<f64> = [0.5, 1.0, 2.0, 5.0, 9.5]
        .iter()
        .map(|&d| {
            let set = base.with(Parameter::Dn, d);
            evaluate(EquationMode::Original, &set).unwrap() * d
        })
        .collect();

    for &product in &c_times_d[1..] {
        assert_close(product, c_times_d[0]);
    }
}

#[test]
fn zero_dn_is_rejected() {
    let set = ParameterSet::demo().with(Parameter::Dn, 0.0);
    assert_eq!(
        evaluate(EquationMode::Original, &set),
        Err(DomainError::ZeroDenominator {
            parameter: Parameter::Dn
        })
    );
    assert_eq!(
        evaluate(EquationMode::PowerLaw, &set),
        Err(DomainError::ZeroDenominator {
            parameter: Parameter::Dn
        })
    );
}

#[test]
fn zero_beta_with_nonzero_theta_is_rejected() {
    let set = ParameterSet::demo().with(Parameter::Beta, 0.0);
    assert_eq!(
        evaluate(EquationMode::Original, &set),
        Err(DomainError::ZeroDenominator {
            parameter: Parameter::Beta
        })
    );

    // With theta = 0 both powers collapse to 1 and beta never divides.
    let set = set.with(Parameter::Theta, 0.0);
    let c = evaluate(EquationMode::Original, &set).unwrap();
    assert!(c.is_finite());
}

#[test]
fn negative_base_with_fractional_theta_is_rejected() {
    let set = ParameterSet::demo()
        .with(Parameter::Alpha, -2.0)
        .with(Parameter::Theta, 0.5);
    match evaluate(EquationMode::Original, &set) {
        Err(DomainError::NegativeFractionalPower { parameter, .. }) => {
            assert_eq!(parameter, Parameter::Alpha);
        }
        other => panic!("expected NegativeFractionalPower, got {other:?}"),
    }

    // An integer theta makes a negative base legal again.
    let set = set.with(Parameter::Theta, 2.0);
    assert!(evaluate(EquationMode::Original, &set).is_ok());
}

#[test]
fn non_finite_inputs_are_rejected() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let set = ParameterSet::demo().with(Parameter::Q, bad);
        match evaluate(EquationMode::Original, &set) {
            Err(DomainError::NonFiniteInput { parameter, .. }) => {
                assert_eq!(parameter, Parameter::Q);
            }
            other => panic!("expected NonFiniteInput, got {other:?}"),
        }
    }
}

#[test]
fn overflow_is_reported_not_propagated() {
    let set = ParameterSet {
        r: f64::MAX,
        alpha: 1.0,
        theta: 1.0,
        s: f64::MAX,
        q: 1.0,
        a: 1.0,
        e: 1.0,
        m: 1.0,
        dn: 1.0,
        beta: 1.0,
    };
    assert_eq!(
        evaluate(EquationMode::Original, &set),
        Err(DomainError::NonFiniteResult)
    );
}

#[test]
fn reduced_models_evaluate() {
    let set = ParameterSet::demo(); // R = 5, Dn = 5
    let power = evaluate(EquationMode::PowerLaw, &set).unwrap();
    assert_close(power, 1.0); // 5 / 5

    let inverted = evaluate(EquationMode::InvertedU, &set).unwrap();
    assert_close(inverted, 5.0 * 5.0 * (-0.5f64).exp());

    let saturation = evaluate(EquationMode::Saturation, &set).unwrap();
    assert_close(saturation, 5.0 * 5.0 / 6.0);
}

#[test]
fn cache_returns_identical_values() {
    let mut cache = EvalCache::new();
    let set = ParameterSet::demo();

    let first = cache.evaluate(EquationMode::Original, &set).unwrap();
    let second = cache.evaluate(EquationMode::Original, &set).unwrap();
    assert_eq!(first, second);
    assert_eq!(cache.len(), 1);

    // A different mode is a different cache entry.
    cache.evaluate(EquationMode::PowerLaw, &set).unwrap();
    assert_eq!(cache.len(), 2);

    // Failures are not cached.
    let bad = set.with(Parameter::Dn, 0.0);
    assert!(cache.evaluate(EquationMode::Original, &bad).is_err());
    assert_eq!(cache.len(), 2);
}
