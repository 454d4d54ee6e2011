//! scaleperm — permutation tests for fixed logarithmic spacing in scale ladders.
//!
//! The core question: given a set of log10 length scales and a pairing between
//! "small" and "large" structures, do the pair differences cluster around a
//! target spacing (delta, in decades) more tightly than random assignment
//! would produce? Significance is estimated by permutation testing.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
