//! Box-counting fractal dimension
//!
//! Box-counting theory predicts `count ∝ size^(-FD)`, so the dimension is the
//! negated slope of `ln(count)` against `ln(size)`. The slope is clamped to
//! the topological range of a planar pattern, [1, 2]; the coefficient of
//! determination is reported from the unclamped fit so weak power laws stay
//! visible.

use crate::fractal::boxcount::{ScaleSeries, scale_series};
use crate::io::configuration::{BOX_SIZES, DEGENERATE_DIMENSION, MAX_DIMENSION, MIN_DIMENSION};
use crate::math::regression::least_squares;
use log::debug;
use ndarray::Array2;

/// Fractal dimension estimate with its log-log goodness of fit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalResult {
    /// Box-counting dimension, clamped to [1, 2]
    pub dimension: f64,
    /// Coefficient of determination of the log-log fit
    ///
    /// Not clamped. Zero for degenerate inputs.
    pub r_squared: f64,
}

impl FractalResult {
    /// Result reported when fewer than two scales contain edges
    pub const DEGENERATE: Self = Self {
        dimension: DEGENERATE_DIMENSION,
        r_squared: 0.0,
    };

    /// True when this is the no-information sentinel
    pub fn is_degenerate(&self) -> bool {
        *self == Self::DEGENERATE
    }
}

/// Regress a scale series into a dimension estimate
///
/// Points with a zero count are dropped before fitting. Fewer than two
/// remaining points yield [`FractalResult::DEGENERATE`].
pub fn estimate_dimension(series: &ScaleSeries) -> FractalResult {
    let (log_sizes, log_counts): (Vec<f64>, Vec<f64>) = series
        .iter()
        .filter(|point| point.count > 0)
        .map(|point| ((point.box_size as f64).ln(), (point.count as f64).ln()))
        .unzip();

    if log_sizes.len() < 2 {
        debug!(
            "box counting degenerate: {} of {} scales occupied",
            log_sizes.len(),
            series.len()
        );
        return FractalResult::DEGENERATE;
    }

    let Some(fit) = least_squares(&log_sizes, &log_counts) else {
        return FractalResult::DEGENERATE;
    };

    debug!(
        "box counting slope {:.4} (r^2 {:.4}) over {} scales",
        fit.slope,
        fit.r_squared,
        log_sizes.len()
    );

    FractalResult {
        dimension: (-fit.slope).clamp(MIN_DIMENSION, MAX_DIMENSION),
        r_squared: fit.r_squared,
    }
}

/// Fractal dimension of a binary edge map over the standard box sizes
pub fn fractal_dimension(edges: &Array2<u8>) -> FractalResult {
    estimate_dimension(&scale_series(edges, &BOX_SIZES))
}
