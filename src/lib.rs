//! Procedural generator of seamlessly looping starfield flythrough GIFs
//!
//! Each animation scatters a random set of stars through a cyclic depth
//! volume, projects them with a perspective divide while the camera moves
//! forward exactly one cycle, dithers every frame onto a fixed grayscale
//! palette and delivers the result atomically into an output directory.

#![forbid(unsafe_code)]

/// Frame sequencing and GIF serialization
pub mod animation;
/// Command line, configuration, output delivery and shutdown
pub mod io;
/// Perspective projection, rasterization and palette reduction
pub mod render;
/// Random star placement
pub mod scene;

pub use io::error::{Result, StarloopError};
