pub mod cross;
pub mod deviation;
pub mod error;
pub mod permutation;
pub mod scan;
pub mod statistic;
