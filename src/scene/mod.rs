//! Procedural scene population
//!
//! A scene is the set of stars shared by every frame of one animation.

/// Star records and random placement within the depth volume
pub mod star;

pub use star::{SceneConfig, Star, generate_stars};
