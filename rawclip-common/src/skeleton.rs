//! Rig hierarchy and bind-pose types.
//!
//! Bones live in a flat array; a bone's index is its position in that
//! array. Every non-root bone's parent sits at a smaller index, so the
//! array is already in parent-before-child order. Parent lookups go
//! through the stored index, never a name search.

use glam::{DQuat, DVec3};

/// A single bone of a rigid skeleton.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBone {
    /// Bone name, used as the record key in the text format
    pub name: String,
    /// Index of the parent bone, `None` for a root bone
    pub parent_index: Option<u16>,
    /// Distance to the furthest skinned vertex, used for error-metric weighting
    pub vertex_distance: f32,
    /// Bind-pose rotation
    pub bind_rotation: DQuat,
    /// Bind-pose translation
    pub bind_translation: DVec3,
}

impl RigidBone {
    /// Whether this bone has no parent
    pub fn is_root(&self) -> bool {
        self.parent_index.is_none()
    }
}

impl Default for RigidBone {
    fn default() -> Self {
        Self {
            name: String::new(),
            parent_index: None,
            vertex_distance: 0.0,
            bind_rotation: DQuat::IDENTITY,
            bind_translation: DVec3::ZERO,
        }
    }
}

/// An ordered bone hierarchy.
///
/// Invariant (supplied by the caller, not re-validated here): every
/// non-root bone's parent index is smaller than the bone's own index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RigidSkeleton {
    bones: Vec<RigidBone>,
}

impl RigidSkeleton {
    pub fn new(bones: Vec<RigidBone>) -> Self {
        Self { bones }
    }

    /// Number of bones in the skeleton
    pub fn num_bones(&self) -> u16 {
        self.bones.len() as u16
    }

    /// Bone at `index`
    ///
    /// Panics if `index` is out of bounds.
    pub fn bone(&self, index: u16) -> &RigidBone {
        &self.bones[index as usize]
    }

    /// All bones, in hierarchy order
    pub fn bones(&self) -> &[RigidBone] {
        &self.bones
    }

    /// Name of the parent of the bone at `index`, `None` for a root bone
    pub fn parent_name(&self, index: u16) -> Option<&str> {
        let parent_index = self.bone(index).parent_index?;
        Some(self.bone(parent_index).name.as_str())
    }
}
