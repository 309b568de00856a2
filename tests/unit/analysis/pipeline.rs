//! Tests for measurement configuration, validation and single-image measurement

#[cfg(test)]
mod tests {
    use ndarray::{Array2, Array3};
    use texcomplex::analysis::pipeline::{
        FractalMeasurement, measure_fractal, measure_information,
    };
    use texcomplex::imaging::resample::bound_working_size;
    use texcomplex::information::{ComplexityEstimator, FisherEstimator};
    use texcomplex::{Image, MeasureError, Measurement, MeasurementConfig, Pipeline, measure};

    fn step_image(size: usize) -> Image {
        Image::from_gray(Array2::from_shape_fn((size, size), |(_, x)| {
            if x < size / 2 { 0 } else { 255 }
        }))
    }

    // Tests the presets select pipelines and estimators
    // Verified by leaving fast_path on the exact estimators
    #[test]
    fn test_config_presets() {
        let fractal = MeasurementConfig::fractal();
        assert_eq!(fractal.pipeline, Pipeline::Fractal);
        assert_eq!(fractal, MeasurementConfig::default());

        let information = MeasurementConfig::information();
        assert_eq!(information.pipeline, Pipeline::Information);
        assert_eq!(information.embedding_dimension, 5);
        assert_eq!(information.resize_target, 512);
        assert_eq!(
            information.complexity_estimator(),
            ComplexityEstimator::JensenShannon
        );

        let fast = MeasurementConfig::fast_path();
        assert_eq!(fast.pipeline, Pipeline::Information);
        assert_eq!(fast.complexity_estimator(), ComplexityEstimator::Parabolic);
        assert_eq!(fast.fisher, FisherEstimator::AdjacentDifference);
    }

    // Tests every preset validates
    // Verified by rejecting the default resize target
    #[test]
    fn test_presets_validate() {
        assert!(MeasurementConfig::fractal().validate().is_ok());
        assert!(MeasurementConfig::information().validate().is_ok());
        assert!(MeasurementConfig::fast_path().validate().is_ok());
    }

    // Tests invalid information parameters are rejected
    // Verified by skipping the resize target check
    #[test]
    fn test_validate_rejects_information_parameters() {
        let base = MeasurementConfig::information();
        let invalid = [
            MeasurementConfig {
                embedding_dimension: 8,
                ..base
            },
            MeasurementConfig { delay: 0, ..base },
            MeasurementConfig {
                resize_target: 500,
                ..base
            },
            MeasurementConfig {
                resize_target: 8192,
                ..base
            },
            MeasurementConfig {
                max_working_dimension: Some(0),
                ..base
            },
        ];

        for config in invalid {
            assert!(
                matches!(config.validate(), Err(MeasureError::InvalidParameter { .. })),
                "{config:?} should be rejected"
            );
        }
    }

    // Tests information-only parameters are ignored by the fractal pipeline
    // Verified by validating embedding parameters unconditionally
    #[test]
    fn test_validate_fractal_ignores_information_parameters() {
        let config = MeasurementConfig {
            embedding_dimension: 99,
            resize_target: 3,
            ..MeasurementConfig::fractal()
        };
        assert!(config.validate().is_ok());
    }

    // Tests the combined score blend
    // Verified by leaving FD unnormalized
    #[test]
    fn test_combined_score() {
        let measurement = FractalMeasurement {
            dimension: 1.5,
            lacunarity: 0.4,
            r_squared: 0.99,
        };
        assert!((measurement.combined_score() - 0.47).abs() < 1e-12);

        let flat = FractalMeasurement {
            dimension: 1.0,
            lacunarity: 0.0,
            r_squared: 0.0,
        };
        assert!(flat.combined_score().abs() < f64::EPSILON);
    }

    // Tests a step image measures as a line with known lacunarity
    // Verified by computing lacunarity on the edge map
    #[test]
    fn test_measure_fractal_step() {
        let result = measure_fractal(&step_image(64));
        assert!((result.dimension - 1.0).abs() < 1e-9);
        assert!((result.r_squared - 1.0).abs() < 1e-9);
        assert!((result.lacunarity - 5.0 / 18.0).abs() < 1e-12);
    }

    // Tests a flat image gives the degenerate fractal sentinel
    // Verified by fitting with zero-count scales
    #[test]
    fn test_measure_fractal_flat() {
        let black = Image::from_gray(Array2::zeros((128, 128)));
        let result = measure_fractal(&black);
        assert!((result.dimension - 1.0).abs() < f64::EPSILON);
        assert!(result.r_squared.abs() < f64::EPSILON);
        assert!(result.lacunarity.abs() < f64::EPSILON);
    }

    // Tests a flat image is perfectly ordered along the Hilbert walk
    // Verified by sorting ties in reverse index order
    #[test]
    fn test_measure_information_flat() {
        let gray = Image::from_gray(Array2::from_elem((40, 40), 90));
        let config = MeasurementConfig {
            resize_target: 32,
            ..MeasurementConfig::information()
        };
        let result = measure_information(&gray, &config).expect("Measurement should succeed");
        assert!(result.entropy.abs() < 1e-12);
        assert!(result.complexity.abs() < 1e-12);
        assert!((result.fisher - 1.0).abs() < 1e-12);
    }

    // Tests the dispatch returns the configured pipeline's result
    // Verified by always running the fractal pipeline
    #[test]
    fn test_measure_dispatch() {
        let image = step_image(64);

        let fractal = measure(&image, &MeasurementConfig::fractal()).expect("Fractal should run");
        assert_eq!(fractal.pipeline(), Pipeline::Fractal);

        let config = MeasurementConfig {
            resize_target: 32,
            ..MeasurementConfig::fast_path()
        };
        let information = measure(&image, &config).expect("Information should run");
        assert_eq!(information.pipeline(), Pipeline::Information);
        assert!(matches!(information, Measurement::Information(_)));
    }

    // Tests measurement is deterministic
    // Verified by seeding from the clock
    #[test]
    fn test_measure_is_deterministic() {
        let rgb = Array3::from_shape_fn((48, 48, 3), |(y, x, c)| {
            ((x * 7 + y * 13 + c * 31) % 256) as u8
        });
        let image = Image::from_rgb(rgb).expect("Three channels should be accepted");
        let config = MeasurementConfig {
            resize_target: 32,
            ..MeasurementConfig::information()
        };

        let first = measure(&image, &config).expect("Measurement should succeed");
        let second = measure(&image, &config).expect("Measurement should succeed");
        assert_eq!(first, second);
    }

    // Tests an invalid configuration fails before any work
    // Verified by validating after resampling
    #[test]
    fn test_measure_rejects_invalid_config() {
        let config = MeasurementConfig {
            delay: 0,
            ..MeasurementConfig::information()
        };
        assert!(measure(&step_image(16), &config).is_err());
    }

    // Tests large images are reduced to the working size first
    // Verified by ignoring the working dimension
    #[test]
    fn test_measure_bounds_working_size() {
        let image = step_image(256);
        let config = MeasurementConfig {
            max_working_dimension: Some(64),
            ..MeasurementConfig::fractal()
        };

        let bounded = measure(&image, &config).expect("Measurement should succeed");
        let reduced = bound_working_size(&image, 64).expect("Bound should succeed");
        assert_eq!(reduced.dim(), (64, 64));
        assert_eq!(bounded, Measurement::Fractal(measure_fractal(&reduced)));

        let full = MeasurementConfig {
            max_working_dimension: None,
            ..config
        };
        let unbounded = measure(&image, &full).expect("Measurement should succeed");
        assert_eq!(unbounded, Measurement::Fractal(measure_fractal(&image)));
        assert_ne!(bounded, unbounded);
    }
}
