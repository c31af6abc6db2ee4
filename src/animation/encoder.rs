//! GIF89a serialization of indexed animations

use crate::animation::assembler::Animation;
use crate::io::error::{Result, StarloopError, invalid_parameter};
use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

/// Write `animation` as a GIF stream
///
/// The palette becomes the global color table and no frame carries a local
/// one. Looping animations get an infinite repeat extension. `path` is only
/// used to label errors.
///
/// # Errors
///
/// Returns an error if:
/// - The canvas does not fit the 16-bit GIF screen size
/// - A frame's pixel count does not match its dimensions
/// - The underlying writer or encoder fails
pub fn encode_gif<W: Write>(animation: &Animation, writer: W, path: &Path) -> Result<()> {
    let width = gif_dimension("width", animation.width())?;
    let height = gif_dimension("height", animation.height())?;
    let encoding_error = |source| StarloopError::Encoding {
        path: path.to_path_buf(),
        source,
    };

    let palette = animation.palette().to_rgb_bytes();
    let mut encoder = gif::Encoder::new(writer, width, height, &palette).map_err(encoding_error)?;
    if animation.looping() {
        encoder
            .set_repeat(gif::Repeat::Infinite)
            .map_err(encoding_error)?;
    }

    for frame in animation.frames() {
        let frame_width = gif_dimension("width", frame.width)?;
        let frame_height = gif_dimension("height", frame.height)?;
        let expected = usize::from(frame_width) * usize::from(frame_height);
        if frame.indices.len() != expected {
            return Err(invalid_parameter(
                "frame",
                &frame.indices.len(),
                &format!("expected {expected} pixel indices"),
            ));
        }

        let gif_frame = gif::Frame {
            width: frame_width,
            height: frame_height,
            delay: frame.delay,
            buffer: Cow::Borrowed(&frame.indices),
            ..gif::Frame::default()
        };
        encoder.write_frame(&gif_frame).map_err(encoding_error)?;
    }

    // Writes the trailer
    encoder
        .into_inner()
        .map_err(|e| encoding_error(gif::EncodingError::from(e)))?;
    Ok(())
}

fn gif_dimension(parameter: &'static str, value: u32) -> Result<u16> {
    u16::try_from(value).map_err(|e| {
        invalid_parameter(
            parameter,
            &value,
            &format!("exceeds the GIF limit of 65535 ({e})"),
        )
    })
}
