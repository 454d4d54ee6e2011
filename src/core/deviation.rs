//! core/deviation.rs — per-pair deviation from a target spacing.
//!
//! Scales are log10(length) values (decades). A pair (i, j) is expected to
//! sit `delta` decades apart; its deviation is ||values[j] - values[i]| - delta|.
//! The difference is taken in magnitude, so the deviation depends only on
//! which two values a pair holds, not on which end holds the larger one;
//! the count is therefore stable under any reshuffle that maps a pair onto
//! the same two values.

use crate::core::error::EngineError;

/// Canonical spacing from the paper: 24 decades.
pub const DEFAULT_DELTA: f64 = 24.0;
/// A pair counts as a strong match when its deviation is within this tolerance.
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Check that every pair indexes into a sequence of length `len`.
pub fn validate_pairs(len: usize, pairs: &[(usize, usize)]) -> Result<(), EngineError> {
    if len == 0 && !pairs.is_empty() {
        return Err(EngineError::EmptySequence);
    }
    for &(i, j) in pairs {
        if i >= len || j >= len {
            return Err(EngineError::PairOutOfBounds { i, j, len });
        }
    }
    Ok(())
}

/// Deviation of each pair's difference from `delta`, one entry per pair.
///
/// Errors if `values` is empty or any pair index is out of bounds. The
/// scanner calls this with a fresh `delta` per grid point; cost is O(pairs).
pub fn deviations(
    values: &[f64],
    pairs: &[(usize, usize)],
    delta: f64,
) -> Result<Vec<f64>, EngineError> {
    if values.is_empty() {
        return Err(EngineError::EmptySequence);
    }
    validate_pairs(values.len(), pairs)?;
    Ok(deviations_unchecked(values, pairs, delta))
}

/// Hot-path variant for pre-validated pairs (the trial loop re-evaluates the
/// same pair set thousands of times; bounds are checked once up front).
#[inline]
pub(crate) fn deviations_unchecked(
    values: &[f64],
    pairs: &[(usize, usize)],
    delta: f64,
) -> Vec<f64> {
    pairs
        .iter()
        .map(|&(i, j)| {
            debug_assert!(i < values.len() && j < values.len());
            ((values[j] - values[i]).abs() - delta).abs()
        })
        .collect()
}

/// Number of pairs whose deviation is within `threshold`.
///
/// The comparison is inclusive: a deviation exactly equal to the threshold
/// counts as a match.
#[inline]
pub fn count_strong(values: &[f64], pairs: &[(usize, usize)], delta: f64, threshold: f64) -> usize {
    pairs
        .iter()
        .filter(|&&(i, j)| {
            debug_assert!(i < values.len() && j < values.len());
            ((values[j] - values[i]).abs() - delta).abs() <= threshold
        })
        .count()
}
