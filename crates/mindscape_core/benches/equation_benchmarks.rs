//! Criterion benchmarks for mindscape_core
//!
//! Run with: cargo bench -p mindscape_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use mindscape_core::discovery::{DiscoveryConfig, discover};
use mindscape_core::equation::{EquationMode, evaluate};
use mindscape_core::grid::{LINE_STEPS, SweepAxis, sample_surface, sweep_line};
use mindscape_core::model::{ParamRanges, Parameter, ParameterSet};

fn bench_evaluate(c: &mut Criterion) {
    let set = ParameterSet::demo();

    c.bench_function("evaluate_original", |b| {
        b.iter(|| evaluate(EquationMode::Original, black_box(&set)))
    });
}

fn bench_sweep_line(c: &mut Criterion) {
    let base = ParameterSet::demo();
    let axis = SweepAxis::new(Parameter::S, 0.1, 10.0, LINE_STEPS);

    c.bench_function("sweep_line_50", |b| {
        b.iter(|| sweep_line(EquationMode::Original, black_box(&base), &axis))
    });
}

fn bench_sample_surface(c: &mut Criterion) {
    let base = ParameterSet::demo();
    let ranges = ParamRanges::default();
    let mut group = c.benchmark_group("sample_surface");

    for steps in [20usize, 30, 40] {
        let x_axis = SweepAxis::over_range(Parameter::A, &ranges, steps);
        let y_axis = SweepAxis::over_range(Parameter::M, &ranges, steps);
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, _| {
            b.iter(|| {
                sample_surface(EquationMode::Original, black_box(&base), &x_axis, &y_axis)
            })
        });
    }

    group.finish();
}

fn bench_discover(c: &mut Criterion) {
    let ranges = ParamRanges::default();
    let config = DiscoveryConfig {
        trials: 500,
        top_k: 5,
    };

    c.bench_function("discover_500", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(0);
            discover(EquationMode::Original, &ranges, &config, &mut rng)
        })
    });
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_sweep_line,
    bench_sample_surface,
    bench_discover
);
criterion_main!(benches);
