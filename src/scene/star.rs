//! Random star placement with a cleared vanishing point

use crate::io::configuration::{
    CANVAS_HEIGHT, CANVAS_WIDTH, DEPTH_CYCLE, EXCLUSION_HALF_SIZE, MAX_STAR_RADIUS, MAX_STARS,
    MIN_STARS, UNIT_EXTENT,
};
use crate::io::error::{Result, invalid_parameter};
use rand::Rng;
use std::ops::Range;

/// A point light placed in the scene volume
///
/// `x` and `y` are offsets from the vanishing point in canvas-scaled units,
/// so dividing them by a depth gives a pixel offset directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Horizontal offset
    pub x: f64,
    /// Vertical offset
    pub y: f64,
    /// Position along the cyclic depth axis, in `[0, cycle)`
    pub depth: f64,
    /// Size class, divided by depth when projected
    pub radius: u32,
}

/// Parameters controlling how many stars are placed and where
#[derive(Clone, Debug)]
pub struct SceneConfig {
    /// Star count range (end exclusive)
    pub star_count: Range<usize>,
    /// Unit coordinates are drawn from `[-unit_extent, unit_extent)`
    pub unit_extent: f64,
    /// Half-size of the central square no star may occupy
    pub exclusion_half_size: f64,
    /// Largest radius class (inclusive)
    pub max_radius: u32,
    /// Horizontal scale applied to unit coordinates
    pub scale_x: f64,
    /// Vertical scale applied to unit coordinates
    pub scale_y: f64,
    /// Length of the depth axis
    pub depth_cycle: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            star_count: MIN_STARS..MAX_STARS,
            unit_extent: UNIT_EXTENT,
            exclusion_half_size: EXCLUSION_HALF_SIZE,
            max_radius: MAX_STAR_RADIUS,
            scale_x: f64::from(CANVAS_WIDTH),
            scale_y: f64::from(CANVAS_HEIGHT),
            depth_cycle: DEPTH_CYCLE,
        }
    }
}

impl SceneConfig {
    /// Check that sampling with this configuration terminates
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The star count range is empty
    /// - The extent is not positive or the exclusion zone covers the whole square
    /// - The depth cycle is not positive
    pub fn validate(&self) -> Result<()> {
        if self.star_count.is_empty() {
            return Err(invalid_parameter(
                "star_count",
                &format!("{:?}", self.star_count),
                &"range must not be empty",
            ));
        }
        if !self.unit_extent.is_finite() || self.unit_extent <= 0.0 {
            return Err(invalid_parameter(
                "unit_extent",
                &self.unit_extent,
                &"must be positive and finite",
            ));
        }
        if self.exclusion_half_size.is_nan()
            || self.exclusion_half_size < 0.0
            || self.exclusion_half_size >= self.unit_extent
        {
            return Err(invalid_parameter(
                "exclusion_half_size",
                &self.exclusion_half_size,
                &"must be non-negative and smaller than the unit extent",
            ));
        }
        if !self.depth_cycle.is_finite() || self.depth_cycle <= 0.0 {
            return Err(invalid_parameter(
                "depth_cycle",
                &self.depth_cycle,
                &"must be positive and finite",
            ));
        }
        Ok(())
    }

    fn in_exclusion_zone(&self, ux: f64, uy: f64) -> bool {
        ux.abs() < self.exclusion_half_size && uy.abs() < self.exclusion_half_size
    }
}

/// Populate a scene with a random number of stars
///
/// Points landing in the central exclusion zone are redrawn until they
/// fall outside it. Stars are returned in creation order, which is also
/// the order they are painted in.
pub fn generate_stars<R: Rng + ?Sized>(rng: &mut R, config: &SceneConfig) -> Vec<Star> {
    let count = rng.random_range(config.star_count.clone());
    let extent = config.unit_extent;

    let mut stars = Vec::with_capacity(count);
    while stars.len() < count {
        let ux = rng.random_range(-extent..extent);
        let uy = rng.random_range(-extent..extent);
        if config.in_exclusion_zone(ux, uy) {
            continue;
        }

        let depth = rng.random::<f64>() * config.depth_cycle;
        let radius = rng.random_range(0..=config.max_radius);
        stars.push(Star {
            x: ux * config.scale_x,
            y: uy * config.scale_y,
            depth,
            radius,
        });
    }

    stars
}
