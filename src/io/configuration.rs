//! Generation constants and runtime configuration defaults

// Canvas settings shared by every frame of every animation
/// Canvas width in pixels
pub const CANVAS_WIDTH: u32 = 500;
/// Canvas height in pixels
pub const CANVAS_HEIGHT: u32 = 250;

// Depth model driving the perspective projection
/// Depth travelled by the camera over one animation cycle
pub const DEPTH_CYCLE: f64 = 8.0;
/// Nearest visible depth (inclusive)
pub const Z_MIN: f64 = 1.0;
/// Farthest visible depth (exclusive)
pub const Z_MAX: f64 = 15.0;

// Scene population
/// Smallest star count per image (inclusive)
pub const MIN_STARS: usize = 500;
/// Largest star count per image (exclusive)
pub const MAX_STARS: usize = 4500;
/// Half-width of the unit interval stars are drawn from, before canvas scaling
pub const UNIT_EXTENT: f64 = 4.0;
// Keeps stars from spawning on the vanishing point
/// Half-size of the central exclusion square, in unit coordinates
pub const EXCLUSION_HALF_SIZE: f64 = 0.5;
/// Largest star radius class
pub const MAX_STAR_RADIUS: u32 = 4;

// Colors
/// Gray level of the canvas background
pub const BACKGROUND_GRAY: u8 = 0x11;
/// Gray level stars are filled with
pub const STAR_GRAY: u8 = 0xff;
/// Number of evenly spaced grays in the output palette
pub const PALETTE_LEVELS: usize = 16;

// Animation settings
/// Frames per animation cycle
pub const FRAME_COUNT: usize = 30;
/// Display time of each frame in hundredths of a second
pub const FRAME_DELAY_CS: u16 = 4;

// Default values for configurable parameters
/// Number of animations produced per run
pub const DEFAULT_IMAGE_NUMBER: u32 = 50;
/// Seconds between a termination signal and the loop stopping
pub const DEFAULT_GRACE_SECS: u64 = 5;

// Output settings
/// Prefix of every delivered animation file
pub const OUTPUT_PREFIX: &str = "space-";
/// Extension of every delivered animation file
pub const OUTPUT_EXTENSION: &str = "gif";
/// Suffix marking a file that is still being written
pub const PARTIAL_SUFFIX: &str = ".part";
