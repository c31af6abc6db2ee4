//! Frame rasterization and palette reduction
//!
//! This module contains the per-frame half of the pipeline:
//! - Perspective projection of stars with depth wrap-around
//! - Canvas rasterization
//! - The fixed grayscale palette and error-diffusion dithering

/// Circle rasterization onto RGB canvases
pub mod canvas;
/// Floyd-Steinberg reduction of RGB canvases to palette indices
pub mod dither;
/// Fixed grayscale output palette
pub mod palette;
/// Looping perspective projection of stars onto the screen
pub mod projection;

pub use canvas::render_frame;
pub use dither::dither;
pub use palette::Palette;
pub use projection::{Geometry, Projection, project};
