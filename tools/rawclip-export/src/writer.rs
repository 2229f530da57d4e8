//! Clip text writer (in-memory clip -> .rawclip)
//!
//! Emits a skeleton and its raw animation clip as deterministic text:
//! a version header, a clip metadata block, one bone record per
//! skeleton bone, then one track record per skeleton bone. Bind-pose
//! fields that are the default within tolerance (identity rotation,
//! zero translation) are omitted entirely; a reader supplies the
//! defaults for absent fields. Track arrays are always present, even
//! when empty.
//!
//! Two precisions coexist on purpose: scalar metadata
//! (`error_threshold`, `vertex_distance`) uses default float
//! formatting, while every rotation/translation component prints with
//! 16 fractional digits so sample data round-trips at full working
//! precision.
//!
//! Names are written verbatim; an embedded quote character corrupts
//! the document. This is a known limitation of the format, not
//! something the writer papers over.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glam::{DQuat, DVec3};
use rawclip_common::math::{DEFAULT_TOLERANCE, quat_near_identity, vec3_near_zero};
use rawclip_common::{AnimationClip, RigidSkeleton};

use crate::error::ExportError;

/// Version tag written at the top of every document
pub const CLIP_TEXT_VERSION: u32 = 1;

/// File extension for clip text files
pub const CLIP_TEXT_EXT: &str = "rawclip";

/// Write a complete clip text document to any sink.
///
/// The skeleton's bone array and the clip's animated-bone array must
/// be index-aligned; mismatched lengths fail with
/// [`ExportError::InvalidArgument`] before anything is written.
pub fn write_clip_text<W: Write>(
    w: &mut W,
    skeleton: &RigidSkeleton,
    clip: &AnimationClip,
) -> Result<(), ExportError> {
    check_bone_alignment(skeleton, clip)?;

    write_header(w, clip)?;
    write_bones(w, skeleton)?;
    write_tracks(w, skeleton, clip)?;
    Ok(())
}

/// Write a clip text document to `path`.
///
/// Preconditions (non-empty path, index-aligned inputs) are checked
/// before the file is opened, so a rejected call never creates an
/// output artifact. Once the file is open, emission is line by line
/// with no rollback: a mid-stream write failure leaves a partial
/// document behind and surfaces as [`ExportError::Io`].
pub fn write_clip_file(
    skeleton: &RigidSkeleton,
    clip: &AnimationClip,
    path: &Path,
) -> Result<(), ExportError> {
    if path.as_os_str().is_empty() {
        return Err(ExportError::InvalidArgument(
            "destination path is empty".to_string(),
        ));
    }
    check_bone_alignment(skeleton, clip)?;

    let file = File::create(path)?;
    let mut w = BufWriter::new(file);
    write_clip_text(&mut w, skeleton, clip)?;
    w.flush()?;

    tracing::info!(
        "Exported clip '{}': {} bones, {} samples to {:?}",
        clip.name,
        skeleton.num_bones(),
        clip.num_samples,
        path
    );

    Ok(())
}

/// The animated bone at index `i` animates the skeleton bone at index
/// `i`; reject mismatched lengths once here instead of assuming the
/// alignment per iteration.
fn check_bone_alignment(
    skeleton: &RigidSkeleton,
    clip: &AnimationClip,
) -> Result<(), ExportError> {
    if clip.num_animated_bones() != skeleton.num_bones() {
        return Err(ExportError::InvalidArgument(format!(
            "clip '{}' animates {} bones, skeleton has {}",
            clip.name,
            clip.num_animated_bones(),
            skeleton.num_bones()
        )));
    }
    Ok(())
}

fn write_header<W: Write>(w: &mut W, clip: &AnimationClip) -> Result<(), ExportError> {
    writeln!(w, "version = {CLIP_TEXT_VERSION}")?;
    writeln!(w, "clip =")?;
    writeln!(w, "{{")?;
    writeln!(w, "\tname = \"{}\"", clip.name)?;
    writeln!(w, "\tnum_samples = {}", clip.num_samples)?;
    writeln!(w, "\tsample_rate = {}", clip.sample_rate)?;
    writeln!(w, "\terror_threshold = {}", clip.error_threshold)?;
    writeln!(w, "}}")?;
    Ok(())
}

fn write_bones<W: Write>(w: &mut W, skeleton: &RigidSkeleton) -> Result<(), ExportError> {
    writeln!(w, "bones =")?;
    writeln!(w, "[")?;
    for bone_index in 0..skeleton.num_bones() {
        let bone = skeleton.bone(bone_index);
        let parent_name = skeleton.parent_name(bone_index).unwrap_or("");

        writeln!(w, "\t{{")?;
        writeln!(w, "\t\tname = \"{}\"", bone.name)?;
        writeln!(w, "\t\tparent = \"{parent_name}\"")?;
        writeln!(w, "\t\tvertex_distance = {}", bone.vertex_distance)?;
        if !quat_near_identity(bone.bind_rotation, DEFAULT_TOLERANCE) {
            writeln!(w, "\t\tbind_rotation = [ {} ]", format_quat(bone.bind_rotation))?;
        }
        if !vec3_near_zero(bone.bind_translation, DEFAULT_TOLERANCE) {
            writeln!(
                w,
                "\t\tbind_translation = [ {} ]",
                format_vec3(bone.bind_translation)
            )?;
        }
        writeln!(w, "\t}}")?;
    }
    writeln!(w, "]")?;
    Ok(())
}

fn write_tracks<W: Write>(
    w: &mut W,
    skeleton: &RigidSkeleton,
    clip: &AnimationClip,
) -> Result<(), ExportError> {
    writeln!(w, "tracks =")?;
    writeln!(w, "[")?;
    for bone_index in 0..skeleton.num_bones() {
        // Track records are keyed by the rigid bone's name
        let rigid_bone = skeleton.bone(bone_index);
        let bone = clip.animated_bone(bone_index);

        writeln!(w, "\t{{")?;
        writeln!(w, "\t\tname = \"{}\"", rigid_bone.name)?;
        writeln!(w, "\t\trotations =")?;
        writeln!(w, "\t\t[")?;
        for rotation in &bone.rotation_track {
            writeln!(w, "\t\t\t[ {} ]", format_quat(*rotation))?;
        }
        writeln!(w, "\t\t]")?;
        writeln!(w, "\t\ttranslations =")?;
        writeln!(w, "\t\t[")?;
        for translation in &bone.translation_track {
            writeln!(w, "\t\t\t[ {} ]", format_vec3(*translation))?;
        }
        writeln!(w, "\t\t]")?;
        writeln!(w, "\t}}")?;
    }
    writeln!(w, "]")?;
    Ok(())
}

/// 16 fractional digits, x y z w order
fn format_quat(q: DQuat) -> String {
    format!("{:.16}, {:.16}, {:.16}, {:.16}", q.x, q.y, q.z, q.w)
}

/// 16 fractional digits, x y z order
fn format_vec3(v: DVec3) -> String {
    format!("{:.16}, {:.16}, {:.16}", v.x, v.y, v.z)
}
