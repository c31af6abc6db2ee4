//! Tests for generation constants

#[cfg(test)]
mod tests {
    use starloop::io::configuration::{
        BACKGROUND_GRAY, CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_GRACE_SECS, DEFAULT_IMAGE_NUMBER,
        DEPTH_CYCLE, EXCLUSION_HALF_SIZE, FRAME_COUNT, FRAME_DELAY_CS, MAX_STAR_RADIUS, MAX_STARS,
        MIN_STARS, OUTPUT_EXTENSION, OUTPUT_PREFIX, PALETTE_LEVELS, PARTIAL_SUFFIX, STAR_GRAY,
        UNIT_EXTENT, Z_MAX, Z_MIN,
    };

    // Tests the canvas size
    // Verified by swapping width and height
    #[test]
    fn test_canvas_dimensions() {
        assert_eq!(CANVAS_WIDTH, 500);
        assert_eq!(CANVAS_HEIGHT, 250);
    }

    // Tests the depth window is positive and ordered
    // Verified by setting z_min to zero
    #[test]
    fn test_depth_window() {
        assert!(Z_MIN > 0.0);
        assert!(Z_MIN < Z_MAX);
        assert!((DEPTH_CYCLE - 8.0).abs() < f64::EPSILON);
        assert!((Z_MAX - 15.0).abs() < f64::EPSILON);
    }

    // Tests the star population limits
    // Verified by inverting the count range
    #[test]
    fn test_population_limits() {
        assert!(MIN_STARS < MAX_STARS);
        assert_eq!((MIN_STARS, MAX_STARS), (500, 4500));
        assert!(EXCLUSION_HALF_SIZE < UNIT_EXTENT);
        assert_eq!(MAX_STAR_RADIUS, 4);
    }

    // Tests the palette levels and drawing grays
    // Verified by using a background outside the palette
    #[test]
    fn test_colors() {
        assert_eq!(PALETTE_LEVELS, 16);
        assert_eq!(BACKGROUND_GRAY % 0x11, 0);
        assert_eq!(STAR_GRAY, 0xff);
    }

    // Tests frame count and delay
    // Verified by changing the delay value
    #[test]
    fn test_animation_timing() {
        assert_eq!(FRAME_COUNT, 30);
        assert_eq!(FRAME_DELAY_CS, 4);
    }

    // Tests run defaults
    // Verified by changing the default image number
    #[test]
    fn test_run_defaults() {
        assert_eq!(DEFAULT_IMAGE_NUMBER, 50);
        assert_eq!(DEFAULT_GRACE_SECS, 5);
    }

    // Tests output names are filesystem safe and partial files are distinguishable
    // Verified by adding a path separator to the prefix
    #[test]
    fn test_output_naming() {
        for ch in OUTPUT_PREFIX.chars().chain(OUTPUT_EXTENSION.chars()) {
            assert!(
                ch.is_alphanumeric() || ch == '-' || ch == '_',
                "Output name contains invalid character: {ch}"
            );
        }
        assert!(PARTIAL_SUFFIX.starts_with('.'));
        assert_ne!(PARTIAL_SUFFIX.trim_start_matches('.'), OUTPUT_EXTENSION);
    }
}
