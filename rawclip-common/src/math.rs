//! Tolerance comparisons for default-value elision.
//!
//! The text writer omits bind-pose fields that are the default value
//! (identity rotation, zero translation) within a fixed tolerance.
//! These predicates are pure so the elision rule stays testable
//! without going through the writer.

use glam::{DQuat, DVec3};

/// Fixed tolerance used when deciding whether a bind-pose value is the
/// default. Shared by the quaternion and vector predicates.
pub const DEFAULT_TOLERANCE: f64 = 1.0e-8;

/// True when `q` rotates by no more than `tolerance` radians.
///
/// Compares the rotation angle, so `q` and `-q` (the same rotation on
/// the quaternion double cover) give the same answer.
pub fn quat_near_identity(q: DQuat, tolerance: f64) -> bool {
    let positive_w = q.w.abs().min(1.0);
    let angle = 2.0 * positive_w.acos();
    angle <= tolerance
}

/// True when every component of `v` is within `tolerance` of zero.
pub fn vec3_near_zero(v: DVec3, tolerance: f64) -> bool {
    v.x.abs() <= tolerance && v.y.abs() <= tolerance && v.z.abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_near_identity() {
        assert!(quat_near_identity(DQuat::IDENTITY, DEFAULT_TOLERANCE));
    }

    #[test]
    fn negated_identity_is_near_identity() {
        let negated = DQuat::from_xyzw(0.0, 0.0, 0.0, -1.0);
        assert!(quat_near_identity(negated, DEFAULT_TOLERANCE));
    }

    #[test]
    fn tiny_rotation_is_near_identity() {
        let tiny = DQuat::from_rotation_z(1.0e-10);
        assert!(quat_near_identity(tiny, DEFAULT_TOLERANCE));
    }

    #[test]
    fn small_but_real_rotation_is_not_near_identity() {
        let small = DQuat::from_rotation_z(1.0e-7);
        assert!(!quat_near_identity(small, DEFAULT_TOLERANCE));

        let quarter_turn = DQuat::from_rotation_z(std::f64::consts::FRAC_PI_2);
        assert!(!quat_near_identity(quarter_turn, DEFAULT_TOLERANCE));
    }

    #[test]
    fn zero_vector_is_near_zero() {
        assert!(vec3_near_zero(DVec3::ZERO, DEFAULT_TOLERANCE));
        assert!(vec3_near_zero(
            DVec3::new(0.0, 1.0e-9, -1.0e-9),
            DEFAULT_TOLERANCE
        ));
    }

    #[test]
    fn displaced_vector_is_not_near_zero() {
        assert!(!vec3_near_zero(DVec3::X, DEFAULT_TOLERANCE));
        assert!(!vec3_near_zero(
            DVec3::new(0.0, 0.0, 1.0e-7),
            DEFAULT_TOLERANCE
        ));
    }
}
