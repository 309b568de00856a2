//! Ordinary least-squares line fitting with goodness of fit
//!
//! Used for log-log scaling fits where the slope carries the measurement and
//! the coefficient of determination reports how well a power law holds.

use num_traits::{Float, NumCast};

/// Fitted line `y = slope * x + intercept` and its coefficient of determination
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T> {
    /// Slope of the fitted line
    pub slope: T,
    /// Intercept of the fitted line
    pub intercept: T,
    /// `1 - SS_res / SS_tot`, or zero when `y` has no variance
    pub r_squared: T,
}

impl<T: Float> LinearFit<T> {
    /// Evaluate the fitted line at `x`
    pub fn predict(&self, x: T) -> T {
        self.slope.mul_add(x, self.intercept)
    }
}

fn mean<T: Float>(values: &[T]) -> T {
    let n = <T as NumCast>::from(values.len()).unwrap_or_else(T::one);
    values.iter().fold(T::zero(), |acc, &v| acc + v) / n
}

/// Fit a straight line through `(x, y)` pairs by least squares
///
/// Returns `None` when fewer than two points are given, the slices differ in
/// length, or every `x` is identical.
pub fn least_squares<T: Float>(x: &[T], y: &[T]) -> Option<LinearFit<T>> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    let x_mean = mean(x);
    let y_mean = mean(y);

    let (sxx, sxy) = x
        .iter()
        .zip(y)
        .fold((T::zero(), T::zero()), |(sxx, sxy), (&xi, &yi)| {
            let dx = xi - x_mean;
            (dx.mul_add(dx, sxx), dx.mul_add(yi - y_mean, sxy))
        });

    if sxx <= T::epsilon() {
        return None;
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;

    let (ss_res, ss_tot) = x
        .iter()
        .zip(y)
        .fold((T::zero(), T::zero()), |(res, tot), (&xi, &yi)| {
            let residual = yi - slope.mul_add(xi, intercept);
            let deviation = yi - y_mean;
            (residual.mul_add(residual, res), deviation.mul_add(deviation, tot))
        });

    // No variance in y leaves r² undefined; report zero
    let r_squared = if ss_tot <= T::epsilon() {
        T::zero()
    } else {
        T::one() - ss_res / ss_tot
    };

    Some(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}
