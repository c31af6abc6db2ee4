//! Ordered parallel rendering of one animation cycle

use crate::io::configuration::{FRAME_COUNT, FRAME_DELAY_CS};
use crate::io::error::{Result, StarloopError, invalid_parameter};
use crate::render::{Geometry, Palette, dither, render_frame};
use crate::scene::Star;
use rayon::prelude::*;

/// Frame count and timing of an animation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationSettings {
    /// Frames rendered across one depth cycle
    pub frame_count: usize,
    /// Display time of each frame in hundredths of a second
    pub frame_delay: u16,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            frame_count: FRAME_COUNT,
            frame_delay: FRAME_DELAY_CS,
        }
    }
}

impl AnimationSettings {
    /// Check the settings describe a non-empty animation
    ///
    /// # Errors
    ///
    /// Returns an error if the frame count is zero
    pub fn validate(&self) -> Result<()> {
        if self.frame_count == 0 {
            return Err(invalid_parameter(
                "frame_count",
                &self.frame_count,
                &"must be at least 1",
            ));
        }
        Ok(())
    }

    /// Position of frame `index` within the cycle, in `[0, 1)`
    pub fn ratio(&self, index: usize) -> f64 {
        index as f64 / self.frame_count as f64
    }
}

/// One palette-indexed frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFrame {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Palette index of each pixel in row-major order
    pub indices: Vec<u8>,
    /// Display time in hundredths of a second
    pub delay: u16,
}

/// A looping sequence of frames sharing one palette
///
/// Frames only carry palette indices; the palette itself is stored once
/// here, so every frame is decoded against the same colors.
#[derive(Debug, Clone)]
pub struct Animation {
    width: u32,
    height: u32,
    palette: Palette,
    frames: Vec<IndexedFrame>,
    looping: bool,
}

impl Animation {
    /// Canvas width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Palette shared by all frames
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Frames in display order
    pub fn frames(&self) -> &[IndexedFrame] {
        &self.frames
    }

    /// Whether playback repeats forever
    pub const fn looping(&self) -> bool {
        self.looping
    }
}

/// Render and quantize every frame of one animation cycle
///
/// Frame `i` is rendered at ratio `i / frame_count`. Frames are rendered
/// in parallel on `pool` and collected in index order; `on_frame` is
/// called once per finished frame from whichever worker finished it.
pub fn assemble<F>(
    stars: &[Star],
    palette: &Palette,
    geometry: &Geometry,
    settings: &AnimationSettings,
    pool: &rayon::ThreadPool,
    on_frame: F,
) -> Animation
where
    F: Fn(usize) + Sync,
{
    let frames = pool.install(|| {
        (0..settings.frame_count)
            .into_par_iter()
            .map(|index| {
                let canvas = render_frame(stars, settings.ratio(index), geometry);
                let indices = dither(&canvas, palette);
                on_frame(index);
                IndexedFrame {
                    width: canvas.width(),
                    height: canvas.height(),
                    indices,
                    delay: settings.frame_delay,
                }
            })
            .collect::<Vec<_>>()
    });

    Animation {
        width: geometry.width,
        height: geometry.height,
        palette: palette.clone(),
        frames,
        looping: true,
    }
}

/// Build the worker pool frames are rendered on
///
/// `None` uses rayon's default thread count.
///
/// # Errors
///
/// Returns an error if `threads` is zero or the pool cannot be created
pub fn build_thread_pool(threads: Option<usize>) -> Result<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(invalid_parameter(
            "threads",
            &0,
            &"must be at least 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new().thread_name(|i| format!("starloop-{i}"));
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| StarloopError::ThreadPool {
        reason: e.to_string(),
    })
}
