//! rawclip-export library
//!
//! Writes a skeleton and its raw animation clip as a deterministic,
//! human-readable text document for use by other tools (compressor
//! regression suites, clip inspection, diffing).

pub mod error;
pub mod writer;

pub use error::ExportError;
pub use writer::{CLIP_TEXT_EXT, CLIP_TEXT_VERSION, write_clip_file, write_clip_text};

// Re-export the data model for convenience
pub use rawclip_common::{AnimatedBone, AnimationClip, RigidBone, RigidSkeleton};
