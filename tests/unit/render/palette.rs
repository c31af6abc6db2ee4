//! Tests for the fixed grayscale palette

#[cfg(test)]
mod tests {
    use starloop::io::configuration::PALETTE_LEVELS;
    use starloop::render::Palette;

    // Tests the palette holds 16 grays in 0x11 steps
    // Verified by changing the step computation
    #[test]
    fn test_grayscale_levels() {
        let palette = Palette::grayscale();
        assert_eq!(palette.len(), PALETTE_LEVELS);
        assert!(!palette.is_empty());

        for (i, color) in palette.colors().iter().enumerate() {
            let expected = (i * 0x11) as u8;
            assert_eq!(*color, [expected; 3]);
        }
        assert_eq!(palette.color(0), Some([0, 0, 0]));
        assert_eq!(palette.color(15), Some([255, 255, 255]));
        assert_eq!(palette.color(16), None);
    }

    // Tests building twice gives identical palettes
    // Verified by adding randomness to palette construction
    #[test]
    fn test_grayscale_deterministic() {
        assert_eq!(Palette::grayscale(), Palette::grayscale());
        assert_eq!(
            Palette::grayscale().to_rgb_bytes(),
            Palette::grayscale().to_rgb_bytes()
        );
    }

    // Tests flattened bytes are in r, g, b order for each color
    // Verified by emitting colors in reverse order
    #[test]
    fn test_rgb_bytes_layout() {
        let bytes = Palette::grayscale().to_rgb_bytes();
        assert_eq!(bytes.len(), PALETTE_LEVELS * 3);
        assert_eq!(bytes.get(0..3), Some(&[0u8, 0, 0][..]));
        assert_eq!(bytes.get(3..6), Some(&[0x11u8, 0x11, 0x11][..]));
        assert_eq!(bytes.last(), Some(&0xff));
    }

    // Tests nearest color lookup including exact hits and ties
    // Verified by picking the last index on ties
    #[test]
    fn test_nearest() {
        let palette = Palette::grayscale();
        assert_eq!(palette.nearest([0, 0, 0]), 0);
        assert_eq!(palette.nearest([0x11, 0x11, 0x11]), 1);
        assert_eq!(palette.nearest([255, 255, 255]), 15);
        assert_eq!(palette.nearest([20, 20, 20]), 1);
        assert_eq!(palette.nearest([30, 30, 30]), 2);
        // Midpoint between 0x00 and 0x11 is 8.5
        assert_eq!(palette.nearest([8, 8, 8]), 0);
        assert_eq!(palette.nearest([9, 9, 9]), 1);
        // Out of range values clamp to the ends
        assert_eq!(palette.nearest([-40, -40, -40]), 0);
        assert_eq!(palette.nearest([400, 400, 400]), 15);
    }
}
