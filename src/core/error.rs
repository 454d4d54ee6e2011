use thiserror::Error;

/// Invalid-configuration errors. These abort a run before any trial is drawn;
/// a partial null distribution is never reported as complete.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("scale sequence is empty")]
    EmptySequence,

    #[error("pair ({i}, {j}) references an index outside the scale sequence (len {len})")]
    PairOutOfBounds { i: usize, j: usize, len: usize },

    #[error("trial count must be positive")]
    InvalidTrialCount,

    #[error("invalid scan range: delta_max {delta_max} < delta_min {delta_min}")]
    InvalidScanRange { delta_min: f64, delta_max: f64 },

    #[error("scan step must be positive, got {0}")]
    InvalidScanStep(f64),

    #[error("cross-domain split n_base={n_base} must satisfy 0 < n_base < len ({len})")]
    InvalidSplit { n_base: usize, len: usize },
}
