//! Command line, configuration, delivery and shutdown plumbing

/// Command line parsing and the image production loop
pub mod cli;
/// Generation constants and runtime defaults
pub mod configuration;
/// Error types and path context
pub mod error;
/// Atomic output file delivery
pub mod output;
/// Progress bars for image and frame production
pub mod progress;
/// Cancellation token and signal watcher
pub mod shutdown;
