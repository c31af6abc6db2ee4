//! Perspective projection with depth wrap-around
//!
//! A star sits at a fixed depth on a cyclic axis. As the animation ratio
//! advances from 0 to 1 the camera moves forward one full cycle, so every
//! star ends the animation exactly where it started.

use crate::io::configuration::{CANVAS_HEIGHT, CANVAS_WIDTH, DEPTH_CYCLE, Z_MAX, Z_MIN};
use crate::io::error::{Result, invalid_parameter};
use crate::scene::Star;

/// Canvas size and visible depth window shared by all frames
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Depth travelled over one animation cycle
    pub depth_cycle: f64,
    /// Nearest visible depth (inclusive)
    pub z_min: f64,
    /// Farthest visible depth (exclusive)
    pub z_max: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            depth_cycle: DEPTH_CYCLE,
            z_min: Z_MIN,
            z_max: Z_MAX,
        }
    }
}

impl Geometry {
    /// Check that projection is well defined for this geometry
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either canvas dimension is zero or exceeds the GIF limit of 65535
    /// - The depth cycle is not positive and finite
    /// - The visible window is not `0 < z_min < z_max` with a finite `z_max`
    pub fn validate(&self) -> Result<()> {
        let max_side = u32::from(u16::MAX);
        if self.width == 0 || self.width > max_side {
            return Err(invalid_parameter(
                "width",
                &self.width,
                &format!("must be between 1 and {max_side}"),
            ));
        }
        if self.height == 0 || self.height > max_side {
            return Err(invalid_parameter(
                "height",
                &self.height,
                &format!("must be between 1 and {max_side}"),
            ));
        }
        if !self.depth_cycle.is_finite() || self.depth_cycle <= 0.0 {
            return Err(invalid_parameter(
                "depth_cycle",
                &self.depth_cycle,
                &"must be positive and finite",
            ));
        }
        if !self.z_min.is_finite() || self.z_min <= 0.0 {
            return Err(invalid_parameter(
                "z_min",
                &self.z_min,
                &"must be positive and finite",
            ));
        }
        if !self.z_max.is_finite() || self.z_max <= self.z_min {
            return Err(invalid_parameter(
                "z_max",
                &self.z_max,
                &"must be finite and greater than z_min",
            ));
        }
        Ok(())
    }

    /// Horizontal position of the vanishing point
    pub fn center_x(&self) -> f64 {
        f64::from(self.width) / 2.0
    }

    /// Vertical position of the vanishing point
    pub fn center_y(&self) -> f64 {
        f64::from(self.height) / 2.0
    }
}

/// A star as seen on screen for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Horizontal center in pixels
    pub x: f64,
    /// Vertical center in pixels
    pub y: f64,
    /// Radius in pixels
    pub radius: f64,
}

/// Lazy sequence of the visible images of one star in one frame
///
/// Created by [`project`].
#[derive(Debug, Clone)]
pub struct Projections<'a> {
    star: &'a Star,
    geometry: &'a Geometry,
    z: f64,
}

impl Iterator for Projections<'_> {
    type Item = Projection;

    fn next(&mut self) -> Option<Projection> {
        while self.z < self.geometry.z_max {
            let z = self.z;
            self.z += self.geometry.depth_cycle;
            if z >= self.geometry.z_min {
                return Some(Projection {
                    x: self.geometry.center_x() + self.star.x / z,
                    y: self.geometry.center_y() + self.star.y / z,
                    radius: f64::from(self.star.radius) / z,
                });
            }
        }
        None
    }
}

/// Project a star for the frame at `ratio` through the animation cycle
///
/// The ratio is wrapped into `[0, 1)`, so a ratio of 1 projects the same
/// as a ratio of 0. The star's effective depth is stepped forward by whole
/// cycles and every step landing in `[z_min, z_max)` yields one projection;
/// a visible window wider than the cycle yields several.
pub fn project<'a>(star: &'a Star, ratio: f64, geometry: &'a Geometry) -> Projections<'a> {
    let ratio = ratio.rem_euclid(1.0);
    Projections {
        star,
        geometry,
        z: ratio.mul_add(-geometry.depth_cycle, star.depth),
    }
}
