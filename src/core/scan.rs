//! core/scan.rs — delta scan for look-elsewhere correction.
//!
//! Instead of testing one post-hoc spacing, sweep delta over a grid and take
//! the best match count any grid point achieves. The permuted analogue of
//! that maximum is what the null distribution records, so the correction
//! removes the freedom to cherry-pick a spacing after seeing the data.

use crate::core::deviation::count_strong;
use crate::core::error::EngineError;

/// Inclusive uniform grid of spacings from `delta_min` to `delta_max`.
#[derive(Clone, Debug)]
pub struct DeltaGrid {
    pub delta_min: f64,
    pub delta_max: f64,
    pub step: f64,
    n_points: usize,
}

impl DeltaGrid {
    /// Build the grid. The endpoint must survive floating-point step
    /// accumulation, so the point count is rounded rather than truncated:
    /// `round((max - min) / step) + 1` never drops `delta_max`.
    pub fn new(delta_min: f64, delta_max: f64, step: f64) -> Result<Self, EngineError> {
        if !(step > 0.0) {
            return Err(EngineError::InvalidScanStep(step));
        }
        if delta_max < delta_min {
            return Err(EngineError::InvalidScanRange {
                delta_min,
                delta_max,
            });
        }
        let n_points = ((delta_max - delta_min) / step + 0.5).floor() as usize + 1;
        Ok(Self {
            delta_min,
            delta_max,
            step,
            n_points,
        })
    }

    #[inline]
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    #[inline]
    pub fn value(&self, i: usize) -> f64 {
        self.delta_min + i as f64 * self.step
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.n_points).map(move |i| self.value(i))
    }
}

/// Best match count over the grid and the spacing that achieved it.
///
/// Ties break toward the smallest delta: the scan runs in increasing order
/// and only a strictly greater count replaces the current best. A one-point
/// grid degenerates to a single `count_strong` call.
pub fn scan_max_strong(
    values: &[f64],
    pairs: &[(usize, usize)],
    grid: &DeltaGrid,
    threshold: f64,
) -> (usize, f64) {
    let mut max_count = 0usize;
    let mut best_delta = grid.delta_min;
    for (idx, delta) in grid.iter().enumerate() {
        let count = count_strong(values, pairs, delta, threshold);
        if idx == 0 || count > max_count {
            max_count = count;
            best_delta = delta;
        }
    }
    (max_count, best_delta)
}
