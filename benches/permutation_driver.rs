//! Benchmarks for the permutation-test driver.
//!
//! Run:
//! - cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use scaleperm::core::permutation::run_permutation_test;
use scaleperm::core::scan::DeltaGrid;
use scaleperm::core::statistic::Statistic;
use scaleperm::data::{canonical_scales, values_of, CANONICAL_PAIRS};

const TRIAL_COUNTS: [usize; 3] = [1_000, 10_000, 50_000];

fn bench_fixed_delta(c: &mut Criterion) {
    let values = values_of(&canonical_scales());
    let stat = Statistic::FixedDelta {
        pairs: CANONICAL_PAIRS.to_vec(),
        delta: 24.0,
        threshold: 0.2,
    };
    let mut group = c.benchmark_group("fixed_delta");
    for n_trials in TRIAL_COUNTS {
        group.bench_with_input(
            BenchmarkId::from_parameter(n_trials),
            &n_trials,
            |b, &n_trials| {
                b.iter(|| {
                    let r =
                        run_permutation_test(black_box(&values), |v| stat.eval(v), n_trials, 42)
                            .unwrap();
                    black_box(r.p_empirical)
                })
            },
        );
    }
    group.finish();
}

fn bench_delta_scan(c: &mut Criterion) {
    let values = values_of(&canonical_scales());
    let stat = Statistic::DeltaScan {
        pairs: CANONICAL_PAIRS.to_vec(),
        grid: DeltaGrid::new(22.0, 26.0, 0.05).unwrap(),
        threshold: 0.2,
    };
    let mut group = c.benchmark_group("delta_scan");
    // The scan statistic is ~81x the work per trial; keep trial counts low.
    for n_trials in [100usize, 1_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(n_trials),
            &n_trials,
            |b, &n_trials| {
                b.iter(|| {
                    let r =
                        run_permutation_test(black_box(&values), |v| stat.eval(v), n_trials, 42)
                            .unwrap();
                    black_box(r.p_empirical)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_fixed_delta, bench_delta_scan);
criterion_main!(benches);
