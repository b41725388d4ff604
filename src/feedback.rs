//! Hit feedback: tint colours and randomized sound cues.
//!
//! Nothing here plays audio or touches materials. Components hand back
//! [`Color`] and [`SoundCue`] values for the host to apply.

use crate::error::JiggleError;
use crate::float::Float;
use rand::Rng;

/// Linear RGBA colour.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color<F: Float> {
    pub r: F,
    pub g: F,
    pub b: F,
    pub a: F,
}

impl<F: Float> Color<F> {
    pub fn rgba(r: F, g: F, b: F, a: F) -> Self {
        Color { r, g, b, a }
    }

    pub fn white() -> Self {
        Color::rgba(F::one(), F::one(), F::one(), F::one())
    }

    pub fn red() -> Self {
        Color::rgba(F::one(), F::zero(), F::zero(), F::one())
    }

    pub fn yellow() -> Self {
        Color::rgba(F::one(), F::from_f32(0.92), F::from_f32(0.016), F::one())
    }

    /// Interpolate toward `other`; `t` is clamped to [0, 1].
    pub fn lerp(self, other: Self, t: F) -> Self {
        let t = t.clamp01();
        Color {
            r: self.r.lerp(other.r, t),
            g: self.g.lerp(other.g, t),
            b: self.b.lerp(other.b, t),
            a: self.a.lerp(other.a, t),
        }
    }
}

/// One sound to play: which clip, at what pitch and volume.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SoundCue<F: Float> {
    pub clip: usize,
    pub pitch: F,
    pub volume: F,
}

/// A set of interchangeable clips with a pitch jitter range.
///
/// Clips are referred to by index; the host maps indices to assets.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoundBank<F: Float> {
    pub clip_count: usize,
    pub pitch_min: F,
    pub pitch_max: F,
}

impl<F: Float> SoundBank<F> {
    pub fn new(clip_count: usize, pitch_min: F, pitch_max: F) -> Self {
        SoundBank { clip_count, pitch_min, pitch_max }
    }

    /// A bank with no clips. [`pick`](Self::pick) always returns `None`.
    pub fn empty() -> Self {
        SoundBank::new(0, F::one(), F::one())
    }

    /// Weapon swing whooshes, pitch 0.8 to 1.2.
    pub fn swings(clip_count: usize) -> Self {
        SoundBank::new(clip_count, F::from_f32(0.8), F::from_f32(1.2))
    }

    /// Impacts played by the weapon, pitch 0.9 to 1.1.
    pub fn weapon_hits(clip_count: usize) -> Self {
        SoundBank::new(clip_count, F::from_f32(0.9), F::from_f32(1.1))
    }

    /// Impacts played by a struck target, pitch 0.8 to 1.2.
    pub fn target_hits(clip_count: usize) -> Self {
        SoundBank::new(clip_count, F::from_f32(0.8), F::from_f32(1.2))
    }

    pub fn is_empty(&self) -> bool {
        self.clip_count == 0
    }

    pub fn validate(&self) -> Result<(), JiggleError> {
        if self.is_empty() {
            return Err(JiggleError::EmptySoundBank);
        }
        Ok(())
    }

    /// Pick a uniformly random clip and pitch. `None` for an empty bank.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R, volume: F) -> Option<SoundCue<F>> {
        if self.is_empty() {
            return None;
        }
        let clip = rng.random_range(0..self.clip_count);
        let t: f32 = rng.random();
        Some(SoundCue {
            clip,
            pitch: self.pitch_min.lerp(self.pitch_max, F::from_f32(t)),
            volume,
        })
    }
}

/// Impact volume for a hit of the given strength.
pub fn hit_volume<F: Float>(intensity: F) -> F {
    (intensity / F::from_f32(10.0)).clamp01()
}
