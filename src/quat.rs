//! Quaternion rotations.

use crate::float::Float;
use crate::vec::{Vec, Vec3};
use core::ops::Mul;

/// Rotation quaternion `(x, y, z, w)` with `w` the scalar part.
///
/// Most operations assume unit length. [`Quat::inverse`] and
/// [`Quat::normalize`] also accept non-unit input, which is what
/// [`clamp_rotation`](crate::clamp::clamp_rotation) produces before
/// renormalizing.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
    pub w: F,
}

impl<F: Float> Default for Quat<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> Quat<F> {
    /// Create a quaternion from raw components. Not normalized.
    pub fn from_xyzw(x: F, y: F, z: F, w: F) -> Self {
        Quat { x, y, z, w }
    }

    /// The identity rotation.
    pub fn identity() -> Self {
        Quat { x: F::zero(), y: F::zero(), z: F::zero(), w: F::one() }
    }

    /// Rotation of `radians` around `axis`. The axis is normalized first.
    pub fn from_axis_angle(axis: Vec3<F>, radians: F) -> Self {
        let axis = axis.normalize();
        let half = radians * F::half();
        let s = half.sin();
        Quat { x: axis.x * s, y: axis.y * s, z: axis.z * s, w: half.cos() }
    }

    /// Vector part.
    pub fn xyz(self) -> Vec3<F> {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Normalize to unit length. Returns identity if length is near zero.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len.is_near_zero(F::from_f32(1e-10)) {
            return Self::identity();
        }
        let inv = F::one() / len;
        Quat { x: self.x * inv, y: self.y * inv, z: self.z * inv, w: self.w * inv }
    }

    pub fn conjugate(self) -> Self {
        Quat { x: -self.x, y: -self.y, z: -self.z, w: self.w }
    }

    /// Multiplicative inverse. Equal to the conjugate for unit quaternions.
    pub fn inverse(self) -> Self {
        let len_sq = self.length_sq();
        if len_sq.is_near_zero(F::from_f32(1e-20)) {
            return Self::identity();
        }
        let inv = F::one() / len_sq;
        let c = self.conjugate();
        Quat { x: c.x * inv, y: c.y * inv, z: c.z * inv, w: c.w * inv }
    }

    /// Rotate a vector by this (unit) quaternion.
    pub fn mul_vec3(self, v: Vec3<F>) -> Vec3<F> {
        let q = self.xyz();
        let t = q.cross(v).scale(F::two());
        v + t.scale(self.w) + q.cross(t)
    }

    /// Local +Z axis in the rotated frame.
    pub fn forward(self) -> Vec3<F> {
        self.mul_vec3(Vec3::forward())
    }

    /// Local +Y axis in the rotated frame.
    pub fn up(self) -> Vec3<F> {
        self.mul_vec3(Vec3::up())
    }

    /// Local +X axis in the rotated frame.
    pub fn right(self) -> Vec3<F> {
        self.mul_vec3(Vec3::right())
    }

    /// Angle in radians between two unit rotations.
    pub fn angle_between(self, other: Self) -> F {
        let d = self.dot(other).abs().min(F::one());
        F::two() * d.acos()
    }

    /// Shortest-arc rotation taking unit vector `from` onto unit vector `to`.
    pub fn from_rotation_arc(from: Vec3<F>, to: Vec3<F>) -> Self {
        let d = from.dot(to);
        if d < F::from_f32(-0.999_999) {
            // Opposite vectors: any perpendicular axis works.
            let mut axis = Vec3::right().cross(from);
            if axis.length_sq() < F::from_f32(1e-6) {
                axis = Vec3::up().cross(from);
            }
            return Self::from_axis_angle(axis, F::pi());
        }
        let c = from.cross(to);
        Quat { x: c.x, y: c.y, z: c.z, w: F::one() + d }.normalize()
    }

    /// Rotation whose +Z axis points along `forward` and whose +Y axis is as
    /// close to `up` as possible.
    ///
    /// Returns `None` when `forward` has zero length. When `up` is parallel
    /// to `forward` the shortest arc from +Z is used instead.
    pub fn look_rotation(forward: Vec3<F>, up: Vec3<F>) -> Option<Self> {
        let f = forward.normalize();
        if f.length_sq().is_near_zero(F::from_f32(1e-12)) {
            return None;
        }
        let r = up.cross(f);
        if r.length_sq() < F::from_f32(1e-12) {
            return Some(Self::from_rotation_arc(Vec3::forward(), f));
        }
        let r = r.normalize();
        let u = f.cross(r);
        Some(Self::from_basis(r, u, f))
    }

    /// Rotation taking the unit axes onto the orthonormal columns `r`, `u`, `f`.
    fn from_basis(r: Vec3<F>, u: Vec3<F>, f: Vec3<F>) -> Self {
        let one = F::one();
        let quarter = F::from_f32(0.25);
        let trace = r.x + u.y + f.z;
        let q = if trace > F::zero() {
            let s = (trace + one).sqrt() * F::two();
            Quat {
                w: quarter * s,
                x: (u.z - f.y) / s,
                y: (f.x - r.z) / s,
                z: (r.y - u.x) / s,
            }
        } else if r.x > u.y && r.x > f.z {
            let s = (one + r.x - u.y - f.z).sqrt() * F::two();
            Quat {
                w: (u.z - f.y) / s,
                x: quarter * s,
                y: (u.x + r.y) / s,
                z: (f.x + r.z) / s,
            }
        } else if u.y > f.z {
            let s = (one + u.y - r.x - f.z).sqrt() * F::two();
            Quat {
                w: (f.x - r.z) / s,
                x: (u.x + r.y) / s,
                y: quarter * s,
                z: (f.y + u.z) / s,
            }
        } else {
            let s = (one + f.z - r.x - u.y).sqrt() * F::two();
            Quat {
                w: (r.y - u.x) / s,
                x: (f.x + r.z) / s,
                y: (f.y + u.z) / s,
                z: quarter * s,
            }
        };
        q.normalize()
    }

    /// Spherical interpolation along the shorter arc. `t` is clamped to [0, 1].
    pub fn slerp(self, other: Self, t: F) -> Self {
        let t = t.clamp01();
        let mut end = other;
        let mut cos = self.dot(other);
        if cos < F::zero() {
            end = Quat { x: -other.x, y: -other.y, z: -other.z, w: -other.w };
            cos = -cos;
        }
        if cos > F::from_f32(0.9995) {
            return Quat {
                x: self.x.lerp(end.x, t),
                y: self.y.lerp(end.y, t),
                z: self.z.lerp(end.z, t),
                w: self.w.lerp(end.w, t),
            }
            .normalize();
        }
        let theta = cos.min(F::one()).acos();
        let sin = theta.sin();
        let a = ((F::one() - t) * theta).sin() / sin;
        let b = (t * theta).sin() / sin;
        Quat {
            x: self.x * a + end.x * b,
            y: self.y * a + end.y * b,
            z: self.z * a + end.z * b,
            w: self.w * a + end.w * b,
        }
    }

    /// True when every component is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

impl<F: Float> Mul for Quat<F> {
    type Output = Self;
    /// Hamilton product: `self * rhs` applies `rhs` first, then `self`.
    fn mul(self, rhs: Self) -> Self {
        Quat {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}
