//! Ordinal-pattern information measures of Hilbert-linearized images
//!
//! This module contains the information pipeline stages:
//! - Hilbert-curve linearization of a resized square image
//! - Bandt-Pompe ordinal pattern extraction
//! - Permutation entropy, statistical complexity and Fisher information

/// Hilbert-curve traversal of square images
pub mod hilbert;
/// H, C and F from a pattern distribution
pub mod metrics;
/// Ordinal pattern histograms
pub mod ordinal;

pub use metrics::{ComplexityEstimator, FisherEstimator, InformationResult};
pub use ordinal::{OrdinalPatternExtractor, PatternDistribution};
