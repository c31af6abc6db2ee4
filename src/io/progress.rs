//! Image and frame progress display for a generation run

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Coordinates the two progress bars of a run
///
/// The image bar counts delivered animations; the frame bar tracks the
/// frames of the animation currently being rendered and is reset for
/// each image.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    image_bar: Option<ProgressBar>,
    frame_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static IMAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Images: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a progress manager with no bars yet
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            image_bar: None,
            frame_bar: None,
        }
    }

    /// Create both bars for a run of `image_count` animations
    pub fn initialize(&mut self, image_count: usize, frame_count: usize) {
        let image_bar = ProgressBar::new(image_count as u64);
        image_bar.set_style(IMAGE_STYLE.clone());
        self.image_bar = Some(self.multi_progress.add(image_bar));

        let frame_bar = ProgressBar::new(frame_count as u64);
        frame_bar.set_style(FRAME_STYLE.clone());
        self.frame_bar = Some(self.multi_progress.add(frame_bar));
    }

    /// Reset the frame bar for the animation at `index`
    pub fn start_image(&self, index: usize) {
        if let Some(ref frame_bar) = self.frame_bar {
            frame_bar.reset();
            frame_bar.set_prefix(format!("image {}", index + 1));
        }
    }

    /// Record one finished frame
    ///
    /// Safe to call from rendering workers.
    pub fn frame_done(&self) {
        if let Some(ref frame_bar) = self.frame_bar {
            frame_bar.inc(1);
        }
    }

    /// Record a delivered animation
    pub fn complete_image(&self, path: &Path, _elapsed: Duration) {
        if let Some(ref image_bar) = self.image_bar {
            image_bar.inc(1);
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            image_bar.set_message(format!("✓ {name}"));
        }
    }

    /// Number of animations recorded so far
    pub fn completed_images(&self) -> u64 {
        self.image_bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref image_bar) = self.image_bar {
            image_bar.finish_with_message("All images written");
        }
        if let Some(ref frame_bar) = self.frame_bar {
            frame_bar.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }
}
