//! Per-axis swing clamping for rotations.
//!
//! A rotation is split into three independent swing components using the
//! tangent-half-angle parametrization `x/w = tan(angle_x / 2)` (same for y and
//! z). Each component's angle is clamped to `[-bound, bound]` and the rotation
//! is re-encoded from the clamped tangents.
//!
//! # Degenerate input
//!
//! The decomposition divides by `w`. A rotation with `w == 0` (a half turn)
//! has no finite tangent and yields infinite or NaN components; this is not
//! guarded against.

use crate::float::Float;
use crate::quat::Quat;
use crate::vec::Vec3;

/// Clamp each axis' swing angle of `q` to the matching bound in `bounds_deg`.
///
/// Bounds are in degrees and symmetric. The re-encoded rotation is returned
/// normalized; normalizing does not change the ratios `x/w`, `y/w`, `z/w`, so
/// [`swing_angles`] of the result reports the clamped angles exactly.
pub fn clamp_rotation<F: Float>(q: Quat<F>, bounds_deg: Vec3<F>) -> Quat<F> {
    let x = clamp_axis(q.x / q.w, bounds_deg.x);
    let y = clamp_axis(q.y / q.w, bounds_deg.y);
    let z = clamp_axis(q.z / q.w, bounds_deg.z);
    Quat::from_xyzw(x, y, z, F::one()).normalize()
}

/// Per-axis swing angles of `q` in degrees, `2 * atan(component / w)`.
pub fn swing_angles<F: Float>(q: Quat<F>) -> Vec3<F> {
    Vec3::new(
        half_tangent_to_degrees(q.x / q.w),
        half_tangent_to_degrees(q.y / q.w),
        half_tangent_to_degrees(q.z / q.w),
    )
}

fn clamp_axis<F: Float>(half_tangent: F, bound_deg: F) -> F {
    let angle = half_tangent_to_degrees(half_tangent).clamp(-bound_deg, bound_deg);
    (F::half() * angle.to_radians()).tan()
}

fn half_tangent_to_degrees<F: Float>(half_tangent: F) -> F {
    (F::two() * half_tangent.atan()).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_bounds_rotation_unchanged() {
        let q = Quat::from_axis_angle(Vec3::up(), 40.0f32.to_radians());
        let c = clamp_rotation(q, Vec3::new(150.0, 150.0, 150.0));
        assert!(c.angle_between(q) < 1e-2);
    }

    #[test]
    fn clamps_single_axis() {
        let q = Quat::from_axis_angle(Vec3::right(), 170.0f32.to_radians());
        let angles = swing_angles(clamp_rotation(q, Vec3::new(150.0, 150.0, 150.0)));
        assert!((angles.x - 150.0).abs() < 1e-3, "x = {}", angles.x);
        assert_eq!(angles.y, 0.0);
        assert_eq!(angles.z, 0.0);
    }

    #[test]
    fn negative_angles_clamp_to_negative_bound() {
        let q = Quat::from_axis_angle(Vec3::forward(), -100.0f64.to_radians());
        let angles = swing_angles(clamp_rotation(q, Vec3::new(30.0, 30.0, 30.0)));
        assert!((angles.z + 30.0).abs() < 1e-9);
    }

    #[test]
    fn zero_w_is_not_finite() {
        let half_turn = Quat::from_xyzw(0.0f32, 0.0, 0.0, 0.0);
        assert!(!swing_angles(half_turn).x.is_finite());
    }
}
