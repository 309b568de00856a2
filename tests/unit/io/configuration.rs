//! Tests for measurement constants and their mutual consistency

#[cfg(test)]
mod tests {
    use texcomplex::io::configuration::{
        BOX_SIZES, CANNY_HIGH_THRESHOLD, CANNY_LOW_THRESHOLD, COMBINED_FD_WEIGHT,
        COMBINED_LACUNARITY_WEIGHT, DEFAULT_EMBEDDING_DIMENSION, DEFAULT_RESIZE_TARGET,
        IMAGE_EXTENSIONS, LACUNARITY_BOX_SIZE, LACUNARITY_STRIDE, MAX_DIMENSION,
        MAX_EMBEDDING_DIMENSION, MAX_RESIZE_TARGET, MIN_DIMENSION, MIN_EMBEDDING_DIMENSION,
    };

    // Tests box sizes form an increasing power-of-two series
    // Verified by inserting a non-power-of-two size
    #[test]
    fn test_box_sizes_geometric() {
        assert!(BOX_SIZES.iter().all(|k| k.is_power_of_two()));
        assert!(BOX_SIZES.windows(2).all(|pair| pair[1] == pair[0] * 2));
    }

    // Tests hysteresis thresholds are ordered
    // Verified by swapping the thresholds
    #[test]
    fn test_canny_thresholds_ordered() {
        assert!(CANNY_LOW_THRESHOLD < CANNY_HIGH_THRESHOLD);
    }

    // Tests defaults fall inside their validated ranges
    // Verified by setting the default dimension to eight
    #[test]
    fn test_defaults_within_ranges() {
        assert!((MIN_EMBEDDING_DIMENSION..=MAX_EMBEDDING_DIMENSION)
            .contains(&DEFAULT_EMBEDDING_DIMENSION));
        assert!(DEFAULT_RESIZE_TARGET.is_power_of_two());
        assert!(DEFAULT_RESIZE_TARGET <= MAX_RESIZE_TARGET);
        assert!(LACUNARITY_STRIDE <= LACUNARITY_BOX_SIZE);
        assert!(MIN_DIMENSION < MAX_DIMENSION);
    }

    // Tests combined score weights sum to one
    // Verified by changing one weight
    #[test]
    fn test_combined_weights() {
        assert!((COMBINED_FD_WEIGHT + COMBINED_LACUNARITY_WEIGHT - 1.0).abs() < 1e-12);
    }

    // Tests supported extensions are lowercase
    // Verified by adding an uppercase extension
    #[test]
    fn test_image_extensions_lowercase() {
        assert!(IMAGE_EXTENSIONS.iter().all(|ext| ext.chars().all(|c| c.is_ascii_lowercase())));
    }
}
