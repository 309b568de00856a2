//! Measurement configuration and the single-image entry point
//!
//! One configuration structure covers every pipeline variant: the fractal
//! pipeline (edge box-counting plus lacunarity) and the information pipeline
//! (Hilbert linearization plus ordinal-pattern measures) with exact or fast
//! estimators, any supported embedding dimension and any power-of-two resize
//! target. Measurement is pure: the same image and configuration always give
//! the same result, and nothing outside the call is touched.

use crate::fractal::dimension::fractal_dimension;
use crate::fractal::lacunarity::lacunarity;
use crate::imaging::edges::extract_edges;
use crate::imaging::grayscale::{luma_fixed_point, luma_weighted};
use crate::imaging::raster::Image;
use crate::imaging::resample::bound_working_size;
use crate::information::hilbert::hilbert_sequence;
use crate::information::metrics::{
    ComplexityEstimator, FisherEstimator, InformationResult, information_metrics,
};
use crate::information::ordinal::OrdinalPatternExtractor;
use crate::io::configuration::{
    COMBINED_FD_WEIGHT, COMBINED_LACUNARITY_WEIGHT, DEFAULT_DELAY, DEFAULT_EMBEDDING_DIMENSION,
    DEFAULT_MAX_WORKING_DIMENSION, DEFAULT_RESIZE_TARGET, MAX_RESIZE_TARGET, MIN_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use clap::ValueEnum;
use log::debug;
use std::borrow::Cow;

/// Which measurement pipeline runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Pipeline {
    /// Box-counting fractal dimension and lacunarity
    #[default]
    Fractal,
    /// Permutation entropy, statistical complexity and Fisher information
    Information,
}

/// Parameters shared by every pipeline variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementConfig {
    /// Pipeline to run
    pub pipeline: Pipeline,
    /// Ordinal pattern length `D`
    pub embedding_dimension: usize,
    /// Ordinal pattern sample spacing `τ`
    pub delay: usize,
    /// Side of the power-of-two square walked by the Hilbert curve
    pub resize_target: u32,
    /// Jensen-Shannon complexity when true, `4H(1 - H)` otherwise
    pub use_exact_statistical_complexity: bool,
    /// Fisher information estimator
    pub fisher: FisherEstimator,
    /// Longest image side before measurement, `None` to keep full resolution
    pub max_working_dimension: Option<u32>,
}

impl Default for MeasurementConfig {
    fn default() -> Self {
        Self {
            pipeline: Pipeline::Fractal,
            embedding_dimension: DEFAULT_EMBEDDING_DIMENSION,
            delay: DEFAULT_DELAY,
            resize_target: DEFAULT_RESIZE_TARGET,
            use_exact_statistical_complexity: true,
            fisher: FisherEstimator::CanonicalOrder,
            max_working_dimension: Some(DEFAULT_MAX_WORKING_DIMENSION),
        }
    }
}

impl MeasurementConfig {
    /// Fractal pipeline with default settings
    pub fn fractal() -> Self {
        Self::default()
    }

    /// Information pipeline with exact `C` and canonical-order `F`
    pub fn information() -> Self {
        Self {
            pipeline: Pipeline::Information,
            ..Self::default()
        }
    }

    /// Information pipeline trading accuracy for speed
    ///
    /// Uses the parabolic complexity approximation and the adjacent-difference
    /// Fisher proxy.
    pub fn fast_path() -> Self {
        Self {
            pipeline: Pipeline::Information,
            use_exact_statistical_complexity: false,
            fisher: FisherEstimator::AdjacentDifference,
            ..Self::default()
        }
    }

    /// Complexity estimator selected by this configuration
    pub const fn complexity_estimator(&self) -> ComplexityEstimator {
        if self.use_exact_statistical_complexity {
            ComplexityEstimator::JensenShannon
        } else {
            ComplexityEstimator::Parabolic
        }
    }

    /// Check every parameter the selected pipeline reads
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero working dimension, an embedding
    /// dimension outside 2..=7, a zero delay, or a resize target that is not
    /// a power of two between 2 and 4096
    pub fn validate(&self) -> Result<()> {
        if self.max_working_dimension == Some(0) {
            return Err(invalid_parameter(
                "max_working_dimension",
                &0,
                &"must be positive",
            ));
        }

        if self.pipeline == Pipeline::Information {
            OrdinalPatternExtractor::new(self.embedding_dimension, self.delay)?;
            if !self.resize_target.is_power_of_two()
                || !(2..=MAX_RESIZE_TARGET).contains(&self.resize_target)
            {
                return Err(invalid_parameter(
                    "resize_target",
                    &self.resize_target,
                    &format!("must be a power of two between 2 and {MAX_RESIZE_TARGET}"),
                ));
            }
        }

        Ok(())
    }
}

/// Fractal pipeline output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalMeasurement {
    /// Box-counting fractal dimension in [1, 2]
    pub dimension: f64,
    /// Gliding-box lacunarity in [0, 1]
    pub lacunarity: f64,
    /// Goodness of the log-log fit behind `dimension`
    pub r_squared: f64,
}

impl FractalMeasurement {
    /// Weighted blend `0.7 · (FD - 1) + 0.3 · L`
    pub fn combined_score(&self) -> f64 {
        COMBINED_LACUNARITY_WEIGHT.mul_add(
            self.lacunarity,
            COMBINED_FD_WEIGHT * (self.dimension - MIN_DIMENSION),
        )
    }
}

/// Result of one measurement call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    /// Fractal pipeline metrics
    Fractal(FractalMeasurement),
    /// Information pipeline metrics
    Information(InformationResult),
}

impl Measurement {
    /// Pipeline that produced this measurement
    pub const fn pipeline(&self) -> Pipeline {
        match self {
            Self::Fractal(_) => Pipeline::Fractal,
            Self::Information(_) => Pipeline::Information,
        }
    }
}

/// Fractal dimension and lacunarity at the image's own resolution
pub fn measure_fractal(image: &Image) -> FractalMeasurement {
    let gray = luma_fixed_point(image);
    let fractal = {
        let edges = extract_edges(&gray);
        fractal_dimension(&edges)
    };
    let lacunarity = lacunarity(&gray);

    FractalMeasurement {
        dimension: fractal.dimension,
        lacunarity,
        r_squared: fractal.r_squared,
    }
}

/// Information measures of the image walked along a Hilbert curve
///
/// # Errors
///
/// Returns an error for invalid embedding parameters or an empty image
pub fn measure_information(image: &Image, config: &MeasurementConfig) -> Result<InformationResult> {
    let extractor = OrdinalPatternExtractor::new(config.embedding_dimension, config.delay)?;
    let sequence = {
        let gray = luma_weighted(image);
        hilbert_sequence(&gray, config.resize_target)?
    };
    let distribution = extractor.extract(&sequence);

    debug!(
        "{} ordinal windows, {} of {} patterns observed",
        distribution.total(),
        distribution.counts().iter().filter(|&&c| c > 0).count(),
        distribution.space_size()
    );

    Ok(information_metrics(
        &sequence,
        &distribution,
        config.complexity_estimator(),
        config.fisher,
    ))
}

/// Measure one image with the configured pipeline
///
/// The image is first reduced to the working resolution, if one is set.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or resampling fails
pub fn measure(image: &Image, config: &MeasurementConfig) -> Result<Measurement> {
    config.validate()?;

    let working = match config.max_working_dimension {
        Some(max_dimension) => bound_working_size(image, max_dimension)?,
        None => Cow::Borrowed(image),
    };

    match config.pipeline {
        Pipeline::Fractal => Ok(Measurement::Fractal(measure_fractal(&working))),
        Pipeline::Information => {
            measure_information(&working, config).map(Measurement::Information)
        }
    }
}
