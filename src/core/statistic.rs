//! core/statistic.rs — the statistic under test, closed over its parameters.
//!
//! The permutation driver only ever sees `sequence -> count`, so the three
//! counting modes share one trial loop instead of three near-duplicate ones.

use crate::core::cross::{count_strong_all_pairs, count_strong_cross, validate_split};
use crate::core::deviation::{count_strong, validate_pairs};
use crate::core::error::EngineError;
use crate::core::scan::{scan_max_strong, DeltaGrid};

/// A match-count statistic bound to its fixed parameters.
#[derive(Clone, Debug)]
pub enum Statistic {
    /// Plain strong-match count at one target spacing.
    FixedDelta {
        pairs: Vec<(usize, usize)>,
        delta: f64,
        threshold: f64,
    },
    /// Look-elsewhere corrected: maximum count over a spacing grid.
    DeltaScan {
        pairs: Vec<(usize, usize)>,
        grid: DeltaGrid,
        threshold: f64,
    },
    /// Cross-domain count over all (base, added) pairs straddling `n_base`.
    CrossDomain {
        n_base: usize,
        delta: f64,
        threshold: f64,
    },
    /// Every unordered pair in the sequence (comparison mode, noisy).
    AllPairs { delta: f64, threshold: f64 },
}

impl Statistic {
    /// Validate against the sequence length the statistic will be applied to.
    /// Permutation preserves length, so one check up front covers every trial.
    pub fn validate(&self, len: usize) -> Result<(), EngineError> {
        if len == 0 {
            return Err(EngineError::EmptySequence);
        }
        match self {
            Statistic::FixedDelta { pairs, .. } | Statistic::DeltaScan { pairs, .. } => {
                validate_pairs(len, pairs)
            }
            Statistic::CrossDomain { n_base, .. } => validate_split(len, *n_base),
            Statistic::AllPairs { .. } => Ok(()),
        }
    }

    /// Evaluate the statistic on a (possibly permuted) sequence.
    pub fn eval(&self, values: &[f64]) -> usize {
        match self {
            Statistic::FixedDelta {
                pairs,
                delta,
                threshold,
            } => count_strong(values, pairs, *delta, *threshold),
            Statistic::DeltaScan {
                pairs,
                grid,
                threshold,
            } => scan_max_strong(values, pairs, grid, *threshold).0,
            Statistic::CrossDomain {
                n_base,
                delta,
                threshold,
            } => count_strong_cross(values, *n_base, *delta, *threshold),
            Statistic::AllPairs { delta, threshold } => {
                count_strong_all_pairs(values, *delta, *threshold)
            }
        }
    }
}
