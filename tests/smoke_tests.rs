//! End-to-end runs over the paper's canonical table.

use scaleperm::core::deviation::{count_strong, deviations};
use scaleperm::core::permutation::run_permutation_test;
use scaleperm::core::scan::{scan_max_strong, DeltaGrid};
use scaleperm::core::statistic::Statistic;
use scaleperm::data::{canonical_scales, values_of, CANONICAL_PAIRS};

#[test]
fn canonical_ladder_observes_three_strong_matches_at_24() {
    let values = values_of(&canonical_scales());
    let devs = deviations(&values, &CANONICAL_PAIRS, 24.0).unwrap();
    assert_eq!(devs.len(), 7);
    // Proton->Sun (0.08), C. elegans->Milky Way (0.0), Human->Virgo (0.114)
    // are within 0.2; the other four pairs are not.
    assert_eq!(count_strong(&values, &CANONICAL_PAIRS, 24.0, 0.2), 3);
}

#[test]
fn canonical_ladder_scan_peaks_at_four_near_23_8() {
    // Sweeping delta over [22, 26] picks up a fourth pair: at 23.80 the
    // C. elegans pair's 0.2 deviation sits exactly on the inclusive
    // threshold. No smaller grid point reaches 4.
    let values = values_of(&canonical_scales());
    let grid = DeltaGrid::new(22.0, 26.0, 0.05).unwrap();
    let (max, best) = scan_max_strong(&values, &CANONICAL_PAIRS, &grid, 0.2);
    assert_eq!(max, 4);
    assert!((best - 23.8).abs() < 1e-6, "best delta {best}");
}

#[test]
fn canonical_fixed_test_smoke_run() {
    let values = values_of(&canonical_scales());
    let stat = Statistic::FixedDelta {
        pairs: CANONICAL_PAIRS.to_vec(),
        delta: 24.0,
        threshold: 0.2,
    };
    let r = run_permutation_test(&values, |v| stat.eval(v), 2000, 42).unwrap();
    assert_eq!(r.observed, 3);
    assert_eq!(r.n_trials(), 2000);
    // 3-of-7 near-exact matches is rare under reshuffling; the empirical
    // p-value should sit far below chance while staying a valid probability.
    assert!(r.p_empirical < 0.1, "p_empirical {}", r.p_empirical);
    assert!(r.p_upper > r.p_empirical);
    // Null counts are bounded by the pair count.
    assert!(r.null_distribution.iter().all(|&c| c <= 7));
}

#[test]
fn canonical_scan_test_smoke_run() {
    let values = values_of(&canonical_scales());
    let stat = Statistic::DeltaScan {
        pairs: CANONICAL_PAIRS.to_vec(),
        grid: DeltaGrid::new(22.0, 26.0, 0.05).unwrap(),
        threshold: 0.2,
    };
    let r = run_permutation_test(&values, |v| stat.eval(v), 500, 42).unwrap();
    assert_eq!(r.observed, 4);
    assert!(r.null_distribution.iter().all(|&c| c <= 7));
    assert!(r.p_upper > 0.0);
}
