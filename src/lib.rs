//! Visual complexity metrics for material texture images
//!
//! Two independent pipelines measure a decoded image. The fractal pipeline
//! box-counts a Canny edge map for the fractal dimension and slides a gliding
//! box over the grayscale image for lacunarity. The information pipeline walks
//! a resized square along a Hilbert curve and derives permutation entropy,
//! statistical complexity and Fisher information from its ordinal patterns.

#![forbid(unsafe_code)]

/// Measurement configuration, interpretation tiers and run history
pub mod analysis;
/// Box-counting fractal dimension and gliding-box lacunarity
pub mod fractal;
/// Raster type, grayscale conversion, edge extraction and resampling
pub mod imaging;
/// Hilbert linearization and ordinal-pattern information measures
pub mod information;
/// Input/output operations and error handling
pub mod io;
/// Regression and permutation ranking utilities
pub mod math;

pub use analysis::pipeline::{Measurement, MeasurementConfig, Pipeline, measure};
pub use imaging::raster::Image;
pub use io::error::{MeasureError, Result};
