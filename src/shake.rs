//! Camera shake on impact.
//!
//! A fixed-length shake: while the timer runs the camera is offset by a
//! random point in a sphere whose radius falls off linearly to zero, then it
//! eases back to its rest position.

use crate::float::Float;
use crate::vec::{Vec, Vec3};
use rand::Rng;

/// Shake tuning.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShakeConfig<F: Float> {
    /// Maximum offset at the start of a shake. Default: 0.3.
    pub intensity: F,
    /// Shake length in seconds. Default: 0.2.
    pub duration: F,
    /// Rate of easing back to rest afterwards, per second. Default: 10.
    pub settle_rate: F,
}

impl<F: Float> ShakeConfig<F> {
    pub fn new() -> Self {
        ShakeConfig {
            intensity: F::from_f32(0.3),
            duration: F::from_f32(0.2),
            settle_rate: F::from_f32(10.0),
        }
    }

    pub fn with_intensity(mut self, intensity: F) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn with_duration(mut self, duration: F) -> Self {
        self.duration = duration;
        self
    }
}

impl<F: Float> Default for ShakeConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shake state for one camera.
#[derive(Clone, Debug)]
pub struct CameraShake<F: Float> {
    config: ShakeConfig<F>,
    /// Camera local position at rest.
    origin: Vec3<F>,
    timer: F,
}

impl<F: Float> CameraShake<F> {
    pub fn new(config: ShakeConfig<F>, origin: Vec3<F>) -> Self {
        CameraShake { config, origin, timer: F::zero() }
    }

    /// Restart the shake at full strength.
    pub fn start(&mut self) {
        self.timer = self.config.duration;
    }

    pub fn is_shaking(&self) -> bool {
        self.timer > F::zero()
    }

    pub fn origin(&self) -> Vec3<F> {
        self.origin
    }

    /// Advance by `delta_time` and return the camera's new local position.
    ///
    /// `current` is where the camera is now; it is only used while settling.
    pub fn update<R: Rng + ?Sized>(&mut self, delta_time: F, current: Vec3<F>, rng: &mut R) -> Vec3<F> {
        if self.is_shaking() {
            self.timer = self.timer - delta_time;
            let falloff = (self.timer / self.config.duration).max(F::zero());
            let offset = random_in_unit_sphere::<F, R>(rng).scale(self.config.intensity * falloff);
            self.origin + offset
        } else {
            let t = (delta_time * self.config.settle_rate).clamp01();
            current.lerp(self.origin, t)
        }
    }
}

/// Uniform random point inside the unit sphere.
pub fn random_in_unit_sphere<F: Float, R: Rng + ?Sized>(rng: &mut R) -> Vec3<F> {
    loop {
        let x: f32 = rng.random_range(-1.0..=1.0);
        let y: f32 = rng.random_range(-1.0..=1.0);
        let z: f32 = rng.random_range(-1.0..=1.0);
        if x * x + y * y + z * z <= 1.0 {
            return Vec3::new(F::from_f32(x), F::from_f32(y), F::from_f32(z));
        }
    }
}
