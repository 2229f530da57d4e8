//! Raw (uncompressed) animation clip data.
//!
//! A clip stores one [`AnimatedBone`] per skeleton bone, in the same
//! order (the entry at index `i` animates the skeleton bone at index
//! `i`). Track lengths are caller-determined; consumers emit or
//! process exactly the samples present in each track.

use glam::{DQuat, DVec3};

/// Per-bone sample tracks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimatedBone {
    /// Rotation samples, one per time sample
    pub rotation_track: Vec<DQuat>,
    /// Translation samples, one per time sample
    pub translation_track: Vec<DVec3>,
}

/// An uncompressed animation clip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationClip {
    /// Clip name, written verbatim to the text format
    pub name: String,
    /// Number of time samples shared by the clip's tracks
    pub num_samples: u32,
    /// Samples per second
    pub sample_rate: u32,
    /// Error threshold for downstream compression, informational here
    pub error_threshold: f32,
    /// One entry per skeleton bone, same order as the skeleton
    pub bones: Vec<AnimatedBone>,
}

impl AnimationClip {
    /// Number of animated bones in the clip
    pub fn num_animated_bones(&self) -> u16 {
        self.bones.len() as u16
    }

    /// Animated bone at `index`
    ///
    /// Panics if `index` is out of bounds.
    pub fn animated_bone(&self, index: u16) -> &AnimatedBone {
        &self.bones[index as usize]
    }

    /// Clip duration in seconds.
    ///
    /// A clip of N samples spans N-1 intervals; an empty clip or a zero
    /// sample rate yields a zero duration.
    pub fn duration_seconds(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_samples.saturating_sub(1) as f32 / self.sample_rate as f32
    }
}
