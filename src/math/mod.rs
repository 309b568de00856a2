//! Mathematical utilities shared by the measurement pipelines

/// Permutation ranking and stable ordering of short windows
pub mod permutation;
/// Least-squares line fitting
pub mod regression;
