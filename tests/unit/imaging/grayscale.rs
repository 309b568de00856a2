//! Tests for the fixed-point and floating-point luma conversions

#[cfg(test)]
mod tests {
    use ndarray::{Array2, Array3, array};
    use texcomplex::Image;
    use texcomplex::imaging::grayscale::{
        BLUE_WEIGHT, GREEN_WEIGHT, RED_WEIGHT, fixed_point_pixel, luma_fixed_point, luma_weighted,
        weighted_pixel,
    };

    // Tests fixed-point weights sum to exactly one so white stays white
    // Verified by dropping the rounding offset
    #[test]
    fn test_fixed_point_extremes() {
        assert_eq!(fixed_point_pixel(0, 0, 0), 0);
        assert_eq!(fixed_point_pixel(255, 255, 255), 255);
        assert_eq!(fixed_point_pixel(100, 100, 100), 100);
    }

    // Tests single-channel fixed-point values
    // Verified by swapping red and blue weights
    #[test]
    fn test_fixed_point_primaries() {
        assert_eq!(fixed_point_pixel(255, 0, 0), 76);
        assert_eq!(fixed_point_pixel(0, 255, 0), 150);
        assert_eq!(fixed_point_pixel(0, 0, 255), 29);
    }

    // Tests floating-point luma keeps its fraction
    // Verified by rounding the weighted sum
    #[test]
    fn test_weighted_pixel_keeps_fraction() {
        let red = weighted_pixel(255, 0, 0);
        assert!((red - 76.245).abs() < 1e-9);
        assert!((RED_WEIGHT + GREEN_WEIGHT + BLUE_WEIGHT - 1.0).abs() < 1e-12);
    }

    // Tests the two conventions differ on at least one pixel
    // Verified by reusing the fixed-point path for both
    #[test]
    fn test_conventions_are_not_identical() {
        let fixed = f64::from(fixed_point_pixel(255, 0, 0));
        let weighted = weighted_pixel(255, 0, 0);
        assert!((fixed - weighted).abs() > 0.1);
    }

    // Tests grayscale images pass through both conversions unchanged
    // Verified by applying the RGB weights to gray input
    #[test]
    fn test_gray_passthrough() {
        let gray = array![[0_u8, 50], [128, 255]];
        let image = Image::from_gray(gray.clone());

        assert_eq!(luma_fixed_point(&image), gray);
        assert_eq!(luma_weighted(&image), gray.mapv(f64::from));
    }

    // Tests RGB conversion reads channels from the last axis
    // Verified by indexing channels along axis 0
    #[test]
    fn test_rgb_conversion_per_pixel() {
        let mut rgb = Array3::<u8>::zeros((2, 3, 3));
        rgb[[0, 0, 0]] = 255;
        rgb[[1, 2, 1]] = 255;
        rgb[[1, 1, 2]] = 255;

        let image = Image::from_rgb(rgb).expect("Three channels should be accepted");

        let fixed = luma_fixed_point(&image);
        assert_eq!(fixed.dim(), (2, 3));
        assert_eq!(fixed[[0, 0]], 76);
        assert_eq!(fixed[[1, 2]], 150);
        assert_eq!(fixed[[1, 1]], 29);
        assert_eq!(fixed[[0, 1]], 0);

        let weighted: Array2<f64> = luma_weighted(&image);
        assert!((weighted[[1, 2]] - 149.685).abs() < 1e-9);
    }
}
