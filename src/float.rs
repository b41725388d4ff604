//! Floating-point abstraction trait for generic numeric operations.

use core::cmp::PartialOrd;
use core::ops::{Add, Sub, Mul, Div, Neg};

/// Trait abstracting floating-point operations needed by the simulation.
///
/// Implemented for `f32` and `f64`. All angles passed to the trigonometric
/// methods are in radians; use [`Float::to_radians`] / [`Float::to_degrees`]
/// at the degree-based configuration boundary.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Two (2.0).
    fn two() -> Self;
    /// Pi (~3.14159).
    fn pi() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Sine.
    fn sin(self) -> Self;
    /// Cosine.
    fn cos(self) -> Self;
    /// Tangent.
    fn tan(self) -> Self;
    /// Arctangent, in `(-pi/2, pi/2)`.
    fn atan(self) -> Self;
    /// Arccosine, in `[0, pi]`.
    fn acos(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Minimum of two values.
    fn min(self, other: Self) -> Self;
    /// Maximum of two values.
    fn max(self, other: Self) -> Self;
    /// Convert from f32 (for constants and configuration).
    fn from_f32(v: f32) -> Self;
    /// Lossy conversion to f32 (for presentation and logging).
    fn to_f32(self) -> f32;
    /// Round half away from zero.
    fn round(self) -> Self;
    /// Floor.
    fn floor(self) -> Self;
    /// True when neither NaN nor infinite.
    fn is_finite(self) -> bool;

    /// Clamp self to [min, max].
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Clamp self to [0, 1].
    fn clamp01(self) -> Self {
        self.clamp(Self::zero(), Self::one())
    }

    /// Linear interpolation: self + (other - self) * t
    fn lerp(self, other: Self, t: Self) -> Self {
        self + (other - self) * t
    }

    /// Check if approximately zero within epsilon.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }

    /// Bounce between 0 and `length` as self increases.
    fn ping_pong(self, length: Self) -> Self {
        let period = length * Self::two();
        let m = self - (self / period).floor() * period;
        length - (m - length).abs()
    }

    /// Round to the nearest integer, ties to even.
    fn round_half_even(self) -> Self {
        let r = self.round();
        if (r - self).abs() != Self::half() {
            return r;
        }
        // `round` broke the tie away from zero; step back if that landed on odd
        if (r * Self::half()).floor() * Self::two() == r {
            r
        } else {
            self * Self::two() - r
        }
    }

    /// Degrees to radians.
    fn to_radians(self) -> Self {
        self * Self::pi() / Self::from_f32(180.0)
    }

    /// Radians to degrees.
    fn to_degrees(self) -> Self {
        self * Self::from_f32(180.0) / Self::pi()
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f32::consts::PI }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn sin(self) -> Self { libm::sinf(self) }
    fn cos(self) -> Self { libm::cosf(self) }
    fn tan(self) -> Self { libm::tanf(self) }
    fn atan(self) -> Self { libm::atanf(self) }
    fn acos(self) -> Self { libm::acosf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn from_f32(v: f32) -> Self { v }
    fn to_f32(self) -> f32 { self }
    fn round(self) -> Self { libm::roundf(self) }
    fn floor(self) -> Self { libm::floorf(self) }
    fn is_finite(self) -> bool { f32::is_finite(self) }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f64::consts::PI }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn sin(self) -> Self { libm::sin(self) }
    fn cos(self) -> Self { libm::cos(self) }
    fn tan(self) -> Self { libm::tan(self) }
    fn atan(self) -> Self { libm::atan(self) }
    fn acos(self) -> Self { libm::acos(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn to_f32(self) -> f32 { self as f32 }
    fn round(self) -> Self { libm::round(self) }
    fn floor(self) -> Self { libm::floor(self) }
    fn is_finite(self) -> bool { f64::is_finite(self) }
}
