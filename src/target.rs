//! Damageable training targets.
//!
//! A [`HitTarget`] tracks health, flashes a damage tint, and kicks its jiggle
//! bone when struck. Rendering, particles and audio stay with the host: each
//! hit returns a [`HitReport`] describing what happened.

use alloc::format;
use alloc::string::String;

use crate::error::JiggleError;
use crate::feedback::{Color, SoundBank, SoundCue};
use crate::float::Float;
use crate::host::HostBinding;
use crate::jiggle::ImpulseSink;
use crate::quat::Quat;
use crate::vec::{Vec, Vec3};
use rand::Rng;

/// Anything that can take damage from a weapon hit.
///
/// `rng` picks the hit sound, if the object has any.
pub trait Damageable<F: Float> {
    /// Apply damage at the object's own position with a default upward force.
    fn take_damage<R: Rng + ?Sized>(&mut self, damage: F, rng: &mut R) -> HitReport<F>;

    /// Apply damage from a hit at `hit_point` carrying `hit_force`.
    fn take_damage_at<R: Rng + ?Sized>(
        &mut self,
        damage: F,
        hit_point: Vec3<F>,
        hit_force: Vec3<F>,
        rng: &mut R,
    ) -> HitReport<F>;
}

/// What the host should do once a target runs out of health.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DeathAction<F: Float> {
    /// Remove the object after `delay` seconds.
    Destroy { delay: F },
    /// Keep the object but deactivate it.
    Deactivate,
}

/// Outcome of one hit.
#[derive(Clone, Debug, PartialEq)]
pub struct HitReport<F: Float> {
    /// Damage dealt.
    pub damage: F,
    /// Health after the hit, never below zero.
    pub remaining_health: F,
    /// Damage rounded to a whole number (ties to even), for floating damage text.
    pub label: String,
    pub hit_point: Vec3<F>,
    /// Impulse forwarded to the jiggle bone, if one is attached.
    pub impulse: Option<Vec3<F>>,
    /// Set on the hit that takes health to zero.
    pub death: Option<DeathAction<F>>,
    /// Impact sound to play at full volume. `None` when the target has no clips.
    pub sound: Option<SoundCue<F>>,
}

/// Target tuning.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitTargetConfig<F: Float> {
    /// Default: 100.
    pub max_health: F,
    /// Destroy on death instead of deactivating. Default: true.
    pub destroy_on_death: bool,
    /// Delay before a destroyed target disappears. Default: 2 seconds.
    pub destroy_delay: F,
    /// Scale applied to impulses forwarded to the jiggle bone. Default: 1.
    pub jiggle_impulse_multiplier: F,
    pub normal_color: Color<F>,
    pub damaged_color: Color<F>,
    /// Seconds the damage tint takes to fade. Default: 0.2.
    pub color_flash_duration: F,
    /// Clips played when struck. Default: no clips, pitch 0.8 to 1.2.
    pub hit_sounds: SoundBank<F>,
}

impl<F: Float> HitTargetConfig<F> {
    pub fn new() -> Self {
        HitTargetConfig {
            max_health: F::from_f32(100.0),
            destroy_on_death: true,
            destroy_delay: F::two(),
            jiggle_impulse_multiplier: F::one(),
            normal_color: Color::white(),
            damaged_color: Color::red(),
            color_flash_duration: F::from_f32(0.2),
            hit_sounds: SoundBank::target_hits(0),
        }
    }

    pub fn with_max_health(mut self, max_health: F) -> Self {
        self.max_health = max_health;
        self
    }

    pub fn with_destroy_on_death(mut self, destroy: bool) -> Self {
        self.destroy_on_death = destroy;
        self
    }

    pub fn with_jiggle_impulse_multiplier(mut self, multiplier: F) -> Self {
        self.jiggle_impulse_multiplier = multiplier;
        self
    }

    pub fn with_colors(mut self, normal: Color<F>, damaged: Color<F>) -> Self {
        self.normal_color = normal;
        self.damaged_color = damaged;
        self
    }

    pub fn with_color_flash_duration(mut self, seconds: F) -> Self {
        self.color_flash_duration = seconds;
        self
    }

    pub fn with_hit_sounds(mut self, bank: SoundBank<F>) -> Self {
        self.hit_sounds = bank;
        self
    }

    pub fn validate(&self) -> Result<(), JiggleError> {
        if !self.max_health.is_finite() || self.max_health <= F::zero() {
            return Err(JiggleError::InvalidHealth);
        }
        Ok(())
    }
}

impl<F: Float> Default for HitTargetConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Line segments for a world-space health bar above a target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HealthBar<F: Float> {
    /// Left end of the bar.
    pub start: Vec3<F>,
    /// Right end of the full-length background.
    pub end: Vec3<F>,
    /// Right end of the filled portion.
    pub fill_end: Vec3<F>,
}

/// A damageable object with an optional jiggle bone.
#[derive(Clone, Debug)]
pub struct HitTarget<F: Float> {
    config: HitTargetConfig<F>,
    current_health: F,
    position: Vec3<F>,
    rotation: Quat<F>,
    original_position: Vec3<F>,
    original_rotation: Quat<F>,
    flash_timer: F,
    dead: bool,
    jiggle: Option<HostBinding<F>>,
}

impl<F: Float> HitTarget<F> {
    /// Create a target at full health.
    ///
    /// A missing or inert jiggle binding is allowed but logged, since hits
    /// will then have no visible wobble.
    pub fn new(
        config: HitTargetConfig<F>,
        position: Vec3<F>,
        rotation: Quat<F>,
        jiggle: Option<HostBinding<F>>,
    ) -> Self {
        if jiggle.as_ref().map_or(true, HostBinding::is_inert) {
            log::warn!("hit target has no jiggle bone; jiggle effect will not work");
        }
        HitTarget {
            current_health: config.max_health,
            config,
            position,
            rotation,
            original_position: position,
            original_rotation: rotation,
            flash_timer: F::zero(),
            dead: false,
            jiggle,
        }
    }

    pub fn config(&self) -> &HitTargetConfig<F> {
        &self.config
    }

    pub fn current_health(&self) -> F {
        self.current_health
    }

    pub fn max_health(&self) -> F {
        self.config.max_health
    }

    /// Health as a fraction of max, in [0, 1].
    pub fn health_fraction(&self) -> F {
        (self.current_health / self.config.max_health).clamp01()
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn position(&self) -> Vec3<F> {
        self.position
    }

    pub fn rotation(&self) -> Quat<F> {
        self.rotation
    }

    /// Sync the target's pose from the host (e.g. after physics moved it).
    pub fn set_pose(&mut self, position: Vec3<F>, rotation: Quat<F>) {
        self.position = position;
        self.rotation = rotation;
    }

    pub fn jiggle(&self) -> Option<&HostBinding<F>> {
        self.jiggle.as_ref()
    }

    pub fn jiggle_mut(&mut self) -> Option<&mut HostBinding<F>> {
        self.jiggle.as_mut()
    }

    /// Advance the damage flash and return the tint to display.
    pub fn update(&mut self, delta_time: F) -> Color<F> {
        let normal = self.config.normal_color;
        if self.flash_timer > F::zero() {
            self.flash_timer = self.flash_timer - delta_time;
            let t = self.flash_timer / self.config.color_flash_duration;
            normal.lerp(self.config.damaged_color, t)
        } else {
            normal
        }
    }

    /// Restore health, the original pose and the jiggle bone's rest state.
    pub fn reset(&mut self) {
        self.position = self.original_position;
        self.rotation = self.original_rotation;
        self.current_health = self.config.max_health;
        self.flash_timer = F::zero();
        self.dead = false;
        if let Some(bone) = self.jiggle.as_mut().and_then(HostBinding::bone_mut) {
            bone.reset_to_initial();
        }
    }

    /// Health bar segments hovering two units above the target.
    pub fn health_bar(&self) -> HealthBar<F> {
        let center = self.position + Vec3::up().scale(F::two());
        let start = center - Vec3::right();
        let end = center + Vec3::right();
        HealthBar { start, end, fill_end: start.lerp(end, self.health_fraction()) }
    }
}

impl<F: Float> Damageable<F> for HitTarget<F> {
    fn take_damage<R: Rng + ?Sized>(&mut self, damage: F, rng: &mut R) -> HitReport<F> {
        self.take_damage_at(damage, self.position, Vec3::up(), rng)
    }

    fn take_damage_at<R: Rng + ?Sized>(
        &mut self,
        damage: F,
        hit_point: Vec3<F>,
        hit_force: Vec3<F>,
        rng: &mut R,
    ) -> HitReport<F> {
        self.current_health = (self.current_health - damage).max(F::zero());
        self.flash_timer = self.config.color_flash_duration;

        let impulse = match self.jiggle.as_mut() {
            Some(jiggle) if !jiggle.is_inert() => {
                let direction = (self.position - hit_point).normalize();
                let impulse = direction
                    .scale(hit_force.length() * self.config.jiggle_impulse_multiplier);
                jiggle.apply_impulse(impulse);
                Some(impulse)
            }
            _ => None,
        };

        log::debug!(
            "target took {:?} damage, health {:?}/{:?}",
            damage, self.current_health, self.config.max_health
        );

        let death = if !self.dead && self.current_health <= F::zero() {
            self.dead = true;
            let action = if self.config.destroy_on_death {
                DeathAction::Destroy { delay: self.config.destroy_delay }
            } else {
                DeathAction::Deactivate
            };
            log::debug!("target destroyed: {:?}", action);
            Some(action)
        } else {
            None
        };

        HitReport {
            damage,
            remaining_health: self.current_health,
            label: format!("{}", damage.round_half_even().to_f32() as i64),
            hit_point,
            impulse,
            death,
            sound: self.config.hit_sounds.pick(rng, F::one()),
        }
    }
}
