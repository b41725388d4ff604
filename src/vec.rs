//! Vector types and traits for simulation and screen-space math.

use crate::float::Float;
use core::ops::{Add, Sub, Neg};

/// Trait for vector types used in physics calculations.
///
/// Abstracts over dimensionality so screen-space (2D) and world-space (3D)
/// code share the same helpers.
pub trait Vec:
    Copy
    + Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + PartialEq
    + Default
    + core::fmt::Debug
{
    /// The scalar (float) type for this vector.
    type Scalar: Float;

    /// Zero vector.
    fn zero() -> Self;

    /// Dot product.
    fn dot(self, other: Self) -> Self::Scalar;

    /// Squared length (avoids sqrt).
    fn length_sq(self) -> Self::Scalar {
        self.dot(self)
    }

    /// Length (magnitude).
    fn length(self) -> Self::Scalar {
        self.length_sq().sqrt()
    }

    /// Normalize to unit length. Returns zero vector if length is near zero.
    fn normalize(self) -> Self {
        let len = self.length();
        if len.is_near_zero(Self::Scalar::from_f32(1e-10)) {
            Self::zero()
        } else {
            self.scale(Self::Scalar::one() / len)
        }
    }

    /// Scale all components by a scalar.
    fn scale(self, s: Self::Scalar) -> Self;

    /// Distance between two points.
    fn distance(self, other: Self) -> Self::Scalar {
        (self - other).length()
    }

    /// Linear interpolation between self and other.
    fn lerp(self, other: Self, t: Self::Scalar) -> Self {
        self + (other - self).scale(t)
    }

    /// Shorten the vector to `max_length` if it is longer, keeping direction.
    fn clamp_length(self, max_length: Self::Scalar) -> Self {
        let len_sq = self.length_sq();
        if len_sq > max_length * max_length {
            self.scale(max_length / len_sq.sqrt())
        } else {
            self
        }
    }

    /// True when every component is finite.
    fn is_finite(self) -> bool;
}

// --------------------------------------------------------------------------
// Vec2<F>: 2D vector
// --------------------------------------------------------------------------

/// 2D vector in screen space (floating damage numbers).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> Vec for Vec2<F> {
    type Scalar = F;
    fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }
    fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }
    fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }
    fn is_finite(self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

// --------------------------------------------------------------------------
// Vec3<F>: 3D vector
// --------------------------------------------------------------------------

/// 3D vector in world space.
///
/// Axis convention follows the host: +X right, +Y up, +Z forward.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Create a new 3D vector.
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }

    /// +X.
    pub fn right() -> Self { Vec3::new(F::one(), F::zero(), F::zero()) }

    /// +Y.
    pub fn up() -> Self { Vec3::new(F::zero(), F::one(), F::zero()) }

    /// +Z.
    pub fn forward() -> Self { Vec3::new(F::zero(), F::zero(), F::one()) }

    /// 3D cross product.
    pub fn cross(self, other: Self) -> Self {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}

impl<F: Float> Vec for Vec3<F> {
    type Scalar = F;
    fn zero() -> Self { Vec3 { x: F::zero(), y: F::zero(), z: F::zero() } }
    fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    fn scale(self, s: F) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }
    fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_length() {
        let v = Vec2::new(3.0f32, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn vec3_cross() {
        let i = Vec3::new(1.0f32, 0.0, 0.0);
        let j = Vec3::new(0.0f32, 1.0, 0.0);
        let k = i.cross(j);
        assert!((k.x - 0.0).abs() < 1e-6);
        assert!((k.y - 0.0).abs() < 1e-6);
        assert!((k.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn clamp_length_keeps_direction() {
        let v = Vec3::new(0.0f32, 30.0, 40.0);
        let c = v.clamp_length(15.0);
        assert!((c.length() - 15.0).abs() < 1e-5);
        assert!((c.y / c.z - 0.75).abs() < 1e-6);
        assert_eq!(Vec3::new(1.0f32, 0.0, 0.0).clamp_length(15.0), Vec3::right());
    }

    #[test]
    fn non_finite_detected() {
        assert!(!Vec3::new(0.0f32, f32::NAN, 0.0).is_finite());
        assert!(Vec2::new(1.0f32, 2.0).is_finite());
    }

    #[test]
    fn normalize_zero_vector() {
        let v = Vec2::<f32>::zero();
        let n = v.normalize();
        assert_eq!(n, Vec2::zero());
    }

    #[test]
    fn lerp_midpoint() {
        let a = Vec2::new(0.0f32, 0.0);
        let b = Vec2::new(10.0f32, 10.0);
        let mid = a.lerp(b, 0.5);
        assert!((mid.x - 5.0).abs() < 1e-6);
        assert!((mid.y - 5.0).abs() < 1e-6);
    }

    #[test]
    fn distance_calculation() {
        let a = Vec2::new(0.0f32, 0.0);
        let b = Vec2::new(3.0f32, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }
}
