//! Bandt-Pompe ordinal pattern extraction
//!
//! Every window of `D` samples spaced `τ` apart is reduced to the permutation
//! that sorts it (stable, so ties keep index order). Patterns are counted by
//! lexicographic rank, giving a dense histogram over all `D!` permutations.

use crate::io::configuration::{MAX_EMBEDDING_DIMENSION, MIN_EMBEDDING_DIMENSION};
use crate::io::error::{Result, invalid_parameter};
use crate::math::permutation::{factorial, lehmer_rank, lehmer_unrank, stable_argsort};

/// Histogram of ordinal patterns over the full permutation space
///
/// Index `k` of the histogram is the pattern with lexicographic rank `k`;
/// unobserved patterns hold zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternDistribution {
    dimension: usize,
    delay: usize,
    counts: Vec<u64>,
    total: u64,
}

impl PatternDistribution {
    /// Embedding dimension `D`
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Sample delay `τ`
    pub const fn delay(&self) -> usize {
        self.delay
    }

    /// Size of the permutation space, `D!`
    pub fn space_size(&self) -> usize {
        self.counts.len()
    }

    /// Number of windows that contributed a pattern
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// True when the sequence was too short for a single window
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Raw occurrence counts in canonical order
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Probabilities over the full space in canonical order, zero-filled
    ///
    /// All zeros when the distribution is empty.
    pub fn probabilities(&self) -> Vec<f64> {
        if self.total == 0 {
            return vec![0.0; self.counts.len()];
        }
        let total = self.total as f64;
        self.counts.iter().map(|&c| c as f64 / total).collect()
    }

    /// Probability of one permutation, zero if unobserved or not a valid pattern
    pub fn probability(&self, pattern: &[usize]) -> f64 {
        if self.total == 0 || pattern.len() != self.dimension {
            return 0.0;
        }
        let mut seen = vec![false; self.dimension];
        for &p in pattern {
            match seen.get_mut(p) {
                Some(flag) if !*flag => *flag = true,
                _ => return 0.0,
            }
        }
        self.counts
            .get(lehmer_rank(pattern))
            .map_or(0.0, |&c| c as f64 / self.total as f64)
    }

    /// Observed patterns with their probabilities, in canonical order
    pub fn observed(&self) -> Vec<(Vec<usize>, f64)> {
        let probabilities = self.probabilities();
        probabilities
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p > 0.0)
            .filter_map(|(rank, &p)| lehmer_unrank(rank, self.dimension).map(|perm| (perm, p)))
            .collect()
    }
}

/// Embedding parameters for ordinal pattern extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrdinalPatternExtractor {
    dimension: usize,
    delay: usize,
    space_size: usize,
}

impl OrdinalPatternExtractor {
    /// Create an extractor for embedding dimension `D` and delay `τ`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `dimension` is outside 2..=7 or `delay`
    /// is zero
    pub fn new(dimension: usize, delay: usize) -> Result<Self> {
        if !(MIN_EMBEDDING_DIMENSION..=MAX_EMBEDDING_DIMENSION).contains(&dimension) {
            return Err(invalid_parameter(
                "embedding_dimension",
                &dimension,
                &format!("must be between {MIN_EMBEDDING_DIMENSION} and {MAX_EMBEDDING_DIMENSION}"),
            ));
        }
        if delay == 0 {
            return Err(invalid_parameter("delay", &delay, &"must be at least 1"));
        }
        let space_size = factorial(dimension).ok_or_else(|| {
            invalid_parameter("embedding_dimension", &dimension, &"factorial overflows")
        })?;
        Ok(Self {
            dimension,
            delay,
            space_size,
        })
    }

    /// Embedding dimension `D`
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Sample delay `τ`
    pub const fn delay(&self) -> usize {
        self.delay
    }

    /// Number of windows a sequence of `len` samples produces
    pub const fn window_count(&self, len: usize) -> usize {
        len.saturating_sub((self.dimension - 1) * self.delay)
    }

    /// Count the ordinal pattern of every window of `sequence`
    pub fn extract(&self, sequence: &[f64]) -> PatternDistribution {
        let mut counts = vec![0u64; self.space_size];
        let mut window = Vec::with_capacity(self.dimension);
        let mut order = Vec::with_capacity(self.dimension);
        let windows = self.window_count(sequence.len());

        for start in 0..windows {
            window.clear();
            window.extend(
                (0..self.dimension)
                    .filter_map(|k| sequence.get(start + k * self.delay).copied()),
            );
            stable_argsort(&window, &mut order);
            if let Some(count) = counts.get_mut(lehmer_rank(&order)) {
                *count += 1;
            }
        }

        PatternDistribution {
            dimension: self.dimension,
            delay: self.delay,
            counts,
            total: windows as u64,
        }
    }
}
