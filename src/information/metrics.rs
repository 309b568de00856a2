//! Permutation entropy, statistical complexity and Fisher information
//!
//! All three measures are computed from a [`PatternDistribution`] over the
//! full `N = D!` permutation space:
//!
//! - `H`: Shannon entropy (natural log) divided by `ln N`.
//! - `C`: Jensen-Shannon divergence to the uniform distribution, normalized
//!   by its maximum, multiplied by `H`. A parabolic stand-in
//!   `4H(1 - H)` is available for speed.
//! - `F`: squared differences of adjacent `√p` in canonical order, scaled by
//!   `F₀`. A mean-absolute-difference proxy over the raw sequence is
//!   available for speed.
//!
//! `F₀` is 1 for a point mass at either end of the canonical order and 0.5
//! otherwise. The exact constant for interior point masses is not solved here;
//! 0.5 keeps every point mass at `F = 1`.

use crate::information::ordinal::PatternDistribution;

/// Largest intensity step, used to scale the adjacent-difference proxy
pub const INTENSITY_RANGE: f64 = 255.0;

/// How `C` is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComplexityEstimator {
    /// Jensen-Shannon statistical complexity
    #[default]
    JensenShannon,
    /// `4H(1 - H)`
    Parabolic,
}

/// How `F` is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FisherEstimator {
    /// Adjacent `√p` differences over the canonical pattern order
    #[default]
    CanonicalOrder,
    /// Mean absolute difference of consecutive samples, scaled to [0, 1]
    AdjacentDifference,
}

/// Information-theoretic texture measures
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InformationResult {
    /// Normalized permutation entropy `H` in [0, 1]
    pub entropy: f64,
    /// Statistical complexity `C`
    pub complexity: f64,
    /// Fisher information `F` in [0, 1]
    pub fisher: f64,
}

/// Shannon entropy in nats, with `0 · ln 0 = 0`
pub fn shannon_entropy(probabilities: &[f64]) -> f64 {
    -probabilities
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| p * p.ln())
        .sum::<f64>()
}

/// Normalized permutation entropy `H`
///
/// Zero for an empty distribution.
pub fn permutation_entropy(distribution: &PatternDistribution) -> f64 {
    let n = distribution.space_size();
    if distribution.is_empty() || n < 2 {
        return 0.0;
    }
    let h = shannon_entropy(&distribution.probabilities()) / (n as f64).ln();
    h.clamp(0.0, 1.0)
}

/// Jensen-Shannon divergence between `probabilities` and the uniform distribution
pub fn jensen_shannon_to_uniform(probabilities: &[f64]) -> f64 {
    let n = probabilities.len();
    if n == 0 {
        return 0.0;
    }
    let uniform = 1.0 / n as f64;
    let midpoint: Vec<f64> = probabilities.iter().map(|&p| (p + uniform) / 2.0).collect();
    let divergence = shannon_entropy(&midpoint)
        - shannon_entropy(probabilities) / 2.0
        - (n as f64).ln() / 2.0;
    divergence.max(0.0)
}

/// Maximum Jensen-Shannon divergence to uniform over `n` categories
///
/// Reached by a point mass:
/// `-½ [((n+1)/n)·ln(n+1) - 2·ln(2n) + ln n]`, the reciprocal of the usual
/// normalization constant `Q₀`.
pub fn jensen_shannon_max(n: usize) -> f64 {
    let n = n as f64;
    let bracket = ((n + 1.0) / n).mul_add((n + 1.0).ln(), -2.0 * (2.0 * n).ln()) + n.ln();
    -bracket / 2.0
}

/// Jensen-Shannon statistical complexity `C = (J / J_max) · H`
pub fn statistical_complexity(distribution: &PatternDistribution, entropy: f64) -> f64 {
    let n = distribution.space_size();
    if distribution.is_empty() || n < 2 {
        return 0.0;
    }
    let disequilibrium = jensen_shannon_to_uniform(&distribution.probabilities())
        / jensen_shannon_max(n);
    (disequilibrium * entropy).clamp(0.0, 1.0)
}

/// Parabolic approximation `4H(1 - H)` of statistical complexity
pub fn parabolic_complexity(entropy: f64) -> f64 {
    4.0 * entropy * (1.0 - entropy)
}

/// Fisher information over the canonical pattern order
///
/// Zero for an empty distribution.
pub fn fisher_information(distribution: &PatternDistribution) -> f64 {
    if distribution.is_empty() {
        return 0.0;
    }
    let probabilities = distribution.probabilities();

    let sum: f64 = probabilities
        .windows(2)
        .map(|pair| match pair {
            [a, b] => (b.sqrt() - a.sqrt()).powi(2),
            _ => 0.0,
        })
        .sum();

    let mut support = probabilities
        .iter()
        .enumerate()
        .filter(|&(_, &p)| p > 0.0)
        .map(|(i, _)| i);
    let boundary_point_mass = match (support.next(), support.next()) {
        (Some(only), None) => only == 0 || only + 1 == probabilities.len(),
        _ => false,
    };

    let f0 = if boundary_point_mass { 1.0 } else { 0.5 };
    (f0 * sum).clamp(0.0, 1.0)
}

/// Mean absolute difference of consecutive samples, scaled by the intensity range
pub fn adjacent_difference_fisher(sequence: &[f64]) -> f64 {
    if sequence.len() < 2 {
        return 0.0;
    }
    let total: f64 = sequence
        .windows(2)
        .map(|pair| match pair {
            [a, b] => (b - a).abs(),
            _ => 0.0,
        })
        .sum();
    (total / (sequence.len() - 1) as f64 / INTENSITY_RANGE).clamp(0.0, 1.0)
}

/// Compute `H`, `C` and `F` with the chosen estimators
///
/// `sequence` is only read by [`FisherEstimator::AdjacentDifference`].
pub fn information_metrics(
    sequence: &[f64],
    distribution: &PatternDistribution,
    complexity: ComplexityEstimator,
    fisher: FisherEstimator,
) -> InformationResult {
    let entropy = permutation_entropy(distribution);
    let complexity = match complexity {
        ComplexityEstimator::JensenShannon => statistical_complexity(distribution, entropy),
        ComplexityEstimator::Parabolic => parabolic_complexity(entropy),
    };
    let fisher = match fisher {
        FisherEstimator::CanonicalOrder => fisher_information(distribution),
        FisherEstimator::AdjacentDifference => adjacent_difference_fisher(sequence),
    };

    InformationResult {
        entropy,
        complexity,
        fisher,
    }
}
