//! Tests for GIF serialization of indexed animations

#[cfg(test)]
mod tests {
    use starloop::StarloopError;
    use starloop::animation::{Animation, AnimationSettings, assemble, build_thread_pool, encode_gif};
    use starloop::render::{Geometry, Palette};
    use starloop::scene::Star;
    use std::io::{self, Write};
    use std::path::Path;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::StorageFull, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn sample_animation(geometry: &Geometry, frame_count: usize) -> Animation {
        let pool = build_thread_pool(Some(2)).unwrap();
        let stars = vec![Star {
            x: 30.0,
            y: -12.0,
            depth: 2.0,
            radius: 3,
        }];
        let settings = AnimationSettings {
            frame_count,
            frame_delay: 4,
        };
        assemble(
            &stars,
            &Palette::grayscale(),
            geometry,
            &settings,
            &pool,
            |_| {},
        )
    }

    fn small_geometry() -> Geometry {
        Geometry {
            width: 48,
            height: 24,
            ..Geometry::default()
        }
    }

    // Tests the stream decodes back to the same frames, delays and global palette
    // Verified by writing a local palette on every frame
    #[test]
    fn test_encoded_gif_decodes() {
        let animation = sample_animation(&small_geometry(), 6);
        let mut bytes = Vec::new();
        encode_gif(&animation, &mut bytes, Path::new("memory.gif")).unwrap();

        let mut options = gif::DecodeOptions::new();
        options.set_color_output(gif::ColorOutput::Indexed);
        let mut decoder = options.read_info(bytes.as_slice()).unwrap();

        assert_eq!((decoder.width(), decoder.height()), (48, 24));
        assert_eq!(
            decoder.global_palette().map(<[u8]>::to_vec),
            Some(Palette::grayscale().to_rgb_bytes())
        );

        let mut decoded = Vec::new();
        while let Some(frame) = decoder.read_next_frame().unwrap() {
            assert!(frame.palette.is_none(), "frame carries a local palette");
            decoded.push((frame.delay, frame.buffer.to_vec()));
        }

        assert_eq!(decoded.len(), 6);
        for ((delay, buffer), frame) in decoded.iter().zip(animation.frames()) {
            assert_eq!(*delay, 4);
            assert_eq!(buffer, &frame.indices);
        }
    }

    // Tests looping animations carry the NETSCAPE repeat extension
    // Verified by skipping set_repeat
    #[test]
    fn test_loop_extension_present() {
        let animation = sample_animation(&small_geometry(), 2);
        let mut bytes = Vec::new();
        encode_gif(&animation, &mut bytes, Path::new("memory.gif")).unwrap();

        let marker = b"NETSCAPE2.0";
        assert!(bytes.windows(marker.len()).any(|window| window == marker));
        assert_eq!(bytes.get(0..6), Some(&b"GIF89a"[..]));
        assert_eq!(bytes.last(), Some(&0x3b));
    }

    // Tests writer failures surface as encoding errors naming the path
    // Verified by discarding writer errors
    #[test]
    fn test_writer_failure() {
        let animation = sample_animation(&small_geometry(), 1);
        let result = encode_gif(&animation, FailingWriter, Path::new("/out/space-x.gif"));

        match result {
            Err(StarloopError::Encoding { path, .. }) => {
                assert_eq!(path, Path::new("/out/space-x.gif"));
            }
            other => unreachable!("Expected Encoding error, got {other:?}"),
        }
    }

    // Tests canvases wider than the GIF limit are rejected before writing
    // Verified by truncating the width to 16 bits
    #[test]
    fn test_oversized_canvas_rejected() {
        let geometry = Geometry {
            width: 70_000,
            height: 1,
            ..Geometry::default()
        };
        let animation = sample_animation(&geometry, 1);
        let mut bytes = Vec::new();

        let result = encode_gif(&animation, &mut bytes, Path::new("wide.gif"));
        assert!(matches!(
            result,
            Err(StarloopError::InvalidParameter {
                parameter: "width",
                ..
            })
        ));
        assert!(bytes.is_empty());
    }
}
