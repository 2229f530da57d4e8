//! Shared types for the rawclip text format
//!
//! This crate provides the data model shared between:
//! - `rawclip-export` (clip text writer)
//! - downstream compression and inspection tools
//!
//! # Modules
//!
//! - [`skeleton`] - Rig hierarchy and bind-pose types
//! - [`clip`] - Raw (uncompressed) animation clip data
//! - [`math`] - Tolerance comparisons for default-value elision

pub mod clip;
pub mod math;
pub mod skeleton;

// Re-export commonly used items
pub use clip::{AnimatedBone, AnimationClip};
pub use math::{DEFAULT_TOLERANCE, quat_near_identity, vec3_near_zero};
pub use skeleton::{RigidBone, RigidSkeleton};
