//! Configuration for the jiggle-bone simulation.

use crate::error::JiggleError;
use crate::float::Float;
use crate::vec::Vec3;

/// Smallest mass the integrator will divide by.
pub const MIN_MASS: f32 = 0.01;

/// Tunable parameters of a jiggle bone.
///
/// # Builder Pattern
/// ```
/// use jiggly::config::JiggleConfig;
///
/// let config: JiggleConfig<f32> = JiggleConfig::new()
///     .with_stiffness(300.0)
///     .with_damping(8.0)
///     .with_rest_distance(2.0)
///     .with_rotation_bound(90.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JiggleConfig<F: Float> {
    /// Spring constant pulling the mass point toward its target. Default: 500.
    pub stiffness: F,
    /// Mass of the simulated point. Floored to [`MIN_MASS`] each tick. Default: 1.
    pub mass: F,
    /// Velocity decay rate per second. Floored to 0 each tick. Default: 15.
    pub damping: F,
    /// Distance of the target point along the parent's forward axis. Default: 3.
    pub rest_distance: F,
    /// Symmetric per-axis swing limit in degrees. Default: 150.
    pub rotation_bound: F,
    /// Compose the clamped rotation with itself before output, doubling the
    /// swing. Default: true.
    pub doubled_swing: bool,
    /// Log per-tick debug rays at trace level. Default: false.
    pub debug_render: bool,
}

impl<F: Float> JiggleConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        JiggleConfig {
            stiffness: F::from_f32(500.0),
            mass: F::one(),
            damping: F::from_f32(15.0),
            rest_distance: F::from_f32(3.0),
            rotation_bound: F::from_f32(150.0),
            doubled_swing: true,
            debug_render: false,
        }
    }

    /// Set the spring constant.
    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set the point mass.
    pub fn with_mass(mut self, mass: F) -> Self {
        self.mass = mass;
        self
    }

    /// Set the velocity damping rate.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the target distance along the parent's forward axis.
    pub fn with_rest_distance(mut self, rest_distance: F) -> Self {
        self.rest_distance = rest_distance;
        self
    }

    /// Set the per-axis swing limit in degrees.
    pub fn with_rotation_bound(mut self, degrees: F) -> Self {
        self.rotation_bound = degrees;
        self
    }

    /// Enable or disable the doubled swing composition.
    pub fn with_doubled_swing(mut self, enabled: bool) -> Self {
        self.doubled_swing = enabled;
        self
    }

    /// Enable or disable debug ray logging.
    pub fn with_debug_render(mut self, enabled: bool) -> Self {
        self.debug_render = enabled;
        self
    }

    /// Floor mass and damping to values the integrator can use.
    ///
    /// Invalid values are corrected in place rather than rejected.
    pub fn sanitize(&mut self) {
        self.damping = self.damping.max(F::zero());
        self.mass = self.effective_mass();
    }

    /// Mass with the [`MIN_MASS`] floor applied, without mutating the config.
    pub fn effective_mass(&self) -> F {
        self.mass.max(F::from_f32(MIN_MASS))
    }

    /// The clamp bounds as a per-axis vector.
    pub fn bounds(&self) -> Vec3<F> {
        Vec3::new(self.rotation_bound, self.rotation_bound, self.rotation_bound)
    }

    /// Check that the rotation bound is usable.
    ///
    /// Mass and damping are not checked here since [`sanitize`](Self::sanitize)
    /// recovers them every tick.
    pub fn validate(&self) -> Result<(), JiggleError> {
        let bound = self.rotation_bound;
        if !bound.is_finite() || bound <= F::zero() || bound >= F::from_f32(180.0) {
            return Err(JiggleError::InvalidBound);
        }
        Ok(())
    }
}

impl<F: Float> Default for JiggleConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
