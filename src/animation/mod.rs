//! Frame sequencing and GIF serialization

/// Parallel frame rendering and ordered collection into an animation
pub mod assembler;
/// GIF89a serialization with a single global palette
pub mod encoder;

pub use assembler::{Animation, AnimationSettings, IndexedFrame, assemble, build_thread_pool};
pub use encoder::encode_gif;
