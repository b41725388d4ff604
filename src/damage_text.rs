//! Floating damage numbers.
//!
//! Each hit spawns a label at a screen position. Labels rise, drift sideways
//! by a random amount chosen at spawn, fade out and are removed once fully
//! transparent. World-to-screen projection and text rendering belong to the
//! host.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec as AllocVec;

use crate::float::Float;
use crate::vec::{Vec, Vec2};
use rand::Rng;

/// Motion and fade tuning for damage numbers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageTextConfig<F: Float> {
    /// Upward speed in screen units; horizontal drift is drawn from
    /// `[-speed/2, speed/2]`. Default: 25.
    pub speed: F,
    /// Alpha lost per second. Default: 2.
    pub fade_rate: F,
    /// How quickly a label closes in on its next offset, per second. Default: 10.
    pub follow_rate: F,
}

impl<F: Float> DamageTextConfig<F> {
    pub fn new() -> Self {
        DamageTextConfig {
            speed: F::from_f32(25.0),
            fade_rate: F::two(),
            follow_rate: F::from_f32(10.0),
        }
    }

    pub fn with_speed(mut self, speed: F) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_fade_rate(mut self, fade_rate: F) -> Self {
        self.fade_rate = fade_rate;
        self
    }
}

impl<F: Float> Default for DamageTextConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// One live damage label.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingText<F: Float> {
    pub label: String,
    /// Screen-space position.
    pub position: Vec2<F>,
    /// Opacity; the label is removed once this reaches zero.
    pub alpha: F,
    /// Horizontal drift, fixed at spawn.
    pub drift: F,
}

/// Pool of floating damage labels plus a running hit counter.
#[derive(Clone, Debug, Default)]
pub struct DamageNumbers<F: Float> {
    config: DamageTextConfig<F>,
    texts: AllocVec<FloatingText<F>>,
    punches: u32,
}

impl<F: Float> DamageNumbers<F> {
    pub fn new(config: DamageTextConfig<F>) -> Self {
        DamageNumbers { config, texts: AllocVec::new(), punches: 0 }
    }

    /// Spawn a label at `screen_position` and count the hit.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        label: impl Into<String>,
        screen_position: Vec2<F>,
        rng: &mut R,
    ) -> &FloatingText<F> {
        let t: f32 = rng.random();
        let half = self.config.speed * F::half();
        let drift = (-half).lerp(half, F::from_f32(t));
        self.texts.push(FloatingText {
            label: label.into(),
            position: screen_position,
            alpha: F::one(),
            drift,
        });
        self.punches += 1;
        &self.texts[self.texts.len() - 1]
    }

    /// Move and fade every label, dropping those that have faded out.
    /// Returns how many were removed.
    pub fn update(&mut self, delta_time: F) -> usize {
        let fade = self.config.fade_rate * delta_time;
        let follow = (self.config.follow_rate * delta_time).clamp01();
        let rise = self.config.speed;
        for text in self.texts.iter_mut() {
            text.alpha = text.alpha - fade;
            let next = text.position + Vec2::new(text.drift, rise);
            text.position = text.position.lerp(next, follow);
        }
        let before = self.texts.len();
        self.texts.retain(|text| text.alpha > F::zero());
        before - self.texts.len()
    }

    pub fn texts(&self) -> &[FloatingText<F>] {
        &self.texts
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn punch_count(&self) -> u32 {
        self.punches
    }

    /// Text for the on-screen hit counter.
    pub fn counter_label(&self) -> String {
        format!("Hits: {}", self.punches)
    }
}
