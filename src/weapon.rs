//! Pointer-driven melee weapon.
//!
//! The weapon lies on the ground until the player presses on it, follows the
//! pointer while the button is held, and drops when it is released. While
//! held it is pulled toward the pointer by a clamped spring-like force,
//! turned to face its direction of travel, and turns collisions into
//! [`WeaponHit`]s scaled by how fast it was moving.
//!
//! The rigid body itself is simulated by the host and reached through the
//! [`WeaponBody`] trait.

use crate::feedback::{hit_volume, Color, SoundBank, SoundCue};
use crate::float::Float;
use crate::quat::Quat;
use crate::target::{Damageable, HitReport};
use crate::vec::{Vec, Vec3};
use rand::Rng;

/// Rigid-body settings swapped between the held and dropped states.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicsProfile<F: Float> {
    pub use_gravity: bool,
    pub drag: F,
    pub angular_drag: F,
}

/// Weapon tuning.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponConfig<F: Float> {
    /// Scales swing speed into hit strength. Default: 1.
    pub damage_multiplier: F,
    /// Follow force per unit of distance to the pointer. Default: 10.
    pub follow_speed: F,
    /// Cap on the follow force magnitude. Default: 15.
    pub max_force: F,
    /// Per-step multiplier on linear and angular velocity while held. Default: 0.95.
    pub damping: F,
    /// No follow force inside this distance. Default: 0.1.
    pub follow_deadzone: F,
    /// Rate at which the weapon turns toward its velocity. Default: 5.
    pub turn_rate: F,
    /// Below this speed the weapon keeps its orientation. Default: 0.5.
    pub min_turn_speed: F,
    /// Maximum pointer ray distance for picking up. Default: 10.
    pub pickup_range: F,
    /// Pointer travel per update above which the weapon counts as swinging. Default: 0.1.
    pub swing_threshold: F,
    /// Minimum weapon speed for a swing sound. Default: 2.
    pub min_swing_velocity: F,
    /// Seconds between swing sounds. Default: 0.3.
    pub swing_sound_cooldown: F,
    /// Impulse per unit of hit strength pushed into struck bodies. Default: 500.
    pub hit_force_multiplier: F,
    /// Torque per unit of hit strength. Default: 50.
    pub torque_multiplier: F,
    /// Damage per unit of hit strength. Default: 10.
    pub damage_per_strength: F,
    /// Layers the weapon deals damage to. Default: all.
    pub hit_layers: LayerMask,
    pub highlight_color: Color<F>,
    pub held: PhysicsProfile<F>,
    pub dropped: PhysicsProfile<F>,
}

impl<F: Float> WeaponConfig<F> {
    pub fn new() -> Self {
        WeaponConfig {
            damage_multiplier: F::one(),
            follow_speed: F::from_f32(10.0),
            max_force: F::from_f32(15.0),
            damping: F::from_f32(0.95),
            follow_deadzone: F::from_f32(0.1),
            turn_rate: F::from_f32(5.0),
            min_turn_speed: F::half(),
            pickup_range: F::from_f32(10.0),
            swing_threshold: F::from_f32(0.1),
            min_swing_velocity: F::two(),
            swing_sound_cooldown: F::from_f32(0.3),
            hit_force_multiplier: F::from_f32(500.0),
            torque_multiplier: F::from_f32(50.0),
            damage_per_strength: F::from_f32(10.0),
            hit_layers: LayerMask::ALL,
            highlight_color: Color::yellow(),
            held: PhysicsProfile { use_gravity: false, drag: F::two(), angular_drag: F::from_f32(5.0) },
            dropped: PhysicsProfile { use_gravity: true, drag: F::half(), angular_drag: F::half() },
        }
    }

    pub fn with_damage_multiplier(mut self, multiplier: F) -> Self {
        self.damage_multiplier = multiplier;
        self
    }

    pub fn with_follow_speed(mut self, follow_speed: F) -> Self {
        self.follow_speed = follow_speed;
        self
    }

    pub fn with_max_force(mut self, max_force: F) -> Self {
        self.max_force = max_force;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_hit_layers(mut self, layers: LayerMask) -> Self {
        self.hit_layers = layers;
        self
    }
}

impl<F: Float> Default for WeaponConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Bitmask of collision layers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const ALL: LayerMask = LayerMask(u32::MAX);
    pub const NONE: LayerMask = LayerMask(0);

    /// True if `layer` (0..32) is in the mask. Out-of-range layers never match.
    pub fn contains(self, layer: u32) -> bool {
        layer < 32 && ((1u32 << layer) & self.0) != 0
    }
}

/// The host's rigid body for the weapon.
pub trait WeaponBody<F: Float> {
    fn position(&self) -> Vec3<F>;
    fn rotation(&self) -> Quat<F>;
    fn set_rotation(&mut self, rotation: Quat<F>);
    fn velocity(&self) -> Vec3<F>;
    fn set_velocity(&mut self, velocity: Vec3<F>);
    fn angular_velocity(&self) -> Vec3<F>;
    fn set_angular_velocity(&mut self, angular_velocity: Vec3<F>);
    /// Accumulate a continuous force for the next physics step.
    fn add_force(&mut self, force: Vec3<F>);
    fn set_profile(&mut self, profile: PhysicsProfile<F>);
}

/// Whether the player is holding the weapon.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Grip {
    Dropped,
    Held,
}

/// State changes reported back to the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WeaponEvent {
    PickedUp,
    Dropped,
}

/// Primary pointer button for one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerInput<F: Float> {
    /// Went down this frame.
    pub pressed: bool,
    /// Is down.
    pub down: bool,
    /// Went up this frame.
    pub released: bool,
    /// Pointer projected into the world at the grab depth.
    pub world_point: Vec3<F>,
}

/// A collision the weapon took part in.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact<F: Float> {
    pub point: Vec3<F>,
    /// Contact normal pointing out of the struck object.
    pub normal: Vec3<F>,
    pub layer: u32,
    /// World centre of mass of the struck object, if it is a rigid body.
    pub center_of_mass: Option<Vec3<F>>,
}

/// A landed hit, for the host to push into physics and damage systems.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WeaponHit<F: Float> {
    /// Weapon speed times the damage multiplier.
    pub strength: F,
    pub point: Vec3<F>,
    /// Direction into the struck object.
    pub direction: Vec3<F>,
    /// Impulse at `point` for a struck rigid body.
    pub impulse: Option<Vec3<F>>,
    /// Angular impulse for a struck rigid body.
    pub torque: Option<Vec3<F>>,
    pub damage: F,
    /// Force handed to [`Damageable::take_damage_at`].
    pub hit_force: Vec3<F>,
    /// Impact sound volume.
    pub volume: F,
    /// Impact sound played by the weapon at `volume`. `None` for an empty bank.
    pub sound: Option<SoundCue<F>>,
}

impl<F: Float> WeaponHit<F> {
    /// Deal this hit's damage to `target`.
    pub fn apply_to<D, R>(&self, target: &mut D, rng: &mut R) -> HitReport<F>
    where
        D: Damageable<F>,
        R: Rng + ?Sized,
    {
        target.take_damage_at(self.damage, self.point, self.hit_force, rng)
    }
}

/// Pick-up, follow and hit logic for a swingable weapon.
#[derive(Clone, Debug)]
pub struct WeaponController<F: Float> {
    config: WeaponConfig<F>,
    grip: Grip,
    can_be_picked_up: bool,
    target_position: Vec3<F>,
    last_pointer: Vec3<F>,
    weapon_velocity: Vec3<F>,
    last_sound_time: F,
    is_swinging: bool,
}

impl<F: Float> WeaponController<F> {
    /// Create a dropped weapon and put `body` in the dropped profile.
    pub fn new<B: WeaponBody<F>>(config: WeaponConfig<F>, body: &mut B) -> Self {
        body.set_profile(config.dropped);
        let position = body.position();
        WeaponController {
            config,
            grip: Grip::Dropped,
            can_be_picked_up: false,
            target_position: position,
            last_pointer: position,
            weapon_velocity: Vec3::zero(),
            last_sound_time: F::zero(),
            is_swinging: false,
        }
    }

    pub fn config(&self) -> &WeaponConfig<F> {
        &self.config
    }

    pub fn grip(&self) -> Grip {
        self.grip
    }

    pub fn is_held(&self) -> bool {
        self.grip == Grip::Held
    }

    pub fn is_swinging(&self) -> bool {
        self.is_swinging
    }

    pub fn can_be_picked_up(&self) -> bool {
        self.can_be_picked_up
    }

    pub fn target_position(&self) -> Vec3<F> {
        self.target_position
    }

    /// Velocity sampled at the end of the last fixed step.
    pub fn weapon_velocity(&self) -> Vec3<F> {
        self.weapon_velocity
    }

    /// Record whether the pointer ray hit the weapon, and at what distance.
    pub fn update_hover(&mut self, hit_distance: Option<F>) {
        if self.is_held() {
            return;
        }
        self.can_be_picked_up = hit_distance.is_some_and(|d| d <= self.config.pickup_range);
    }

    /// Apply one frame of pointer input.
    pub fn handle_pointer<B: WeaponBody<F>>(
        &mut self,
        input: &PointerInput<F>,
        body: &mut B,
    ) -> Option<WeaponEvent> {
        if input.pressed && !self.is_held() && self.can_be_picked_up {
            self.pick_up(input.world_point, body);
            return Some(WeaponEvent::PickedUp);
        }
        if input.down && self.is_held() {
            self.track_pointer(input.world_point);
        }
        if input.released && self.is_held() {
            self.drop_weapon(body);
            return Some(WeaponEvent::Dropped);
        }
        None
    }

    fn pick_up<B: WeaponBody<F>>(&mut self, world_point: Vec3<F>, body: &mut B) {
        self.grip = Grip::Held;
        self.can_be_picked_up = false;
        body.set_profile(self.config.held);
        self.target_position = world_point;
        self.last_pointer = world_point;
        log::debug!("weapon picked up");
    }

    fn drop_weapon<B: WeaponBody<F>>(&mut self, body: &mut B) {
        self.grip = Grip::Dropped;
        self.is_swinging = false;
        body.set_profile(self.config.dropped);
        log::debug!("weapon dropped");
    }

    fn track_pointer(&mut self, world_point: Vec3<F>) {
        self.target_position = world_point;
        self.is_swinging = world_point.distance(self.last_pointer) > self.config.swing_threshold;
        self.last_pointer = world_point;
    }

    /// Drive the held weapon for one physics step.
    ///
    /// `time` is the host clock in seconds, used to rate-limit swing sounds.
    /// Returns a swing sound to play, if any. Does nothing while dropped.
    pub fn fixed_step<B, R>(
        &mut self,
        body: &mut B,
        delta_time: F,
        time: F,
        swing_sounds: &SoundBank<F>,
        rng: &mut R,
    ) -> Option<SoundCue<F>>
    where
        B: WeaponBody<F>,
        R: Rng + ?Sized,
    {
        if !self.is_held() {
            return None;
        }
        self.follow_target(body, delta_time);
        self.weapon_velocity = body.velocity();

        let fast_enough = self.weapon_velocity.length() > self.config.min_swing_velocity;
        let cooled_down = time - self.last_sound_time > self.config.swing_sound_cooldown;
        if self.is_swinging && fast_enough && cooled_down {
            let cue = swing_sounds.pick(rng, F::half())?;
            self.last_sound_time = time;
            return Some(cue);
        }
        None
    }

    fn follow_target<B: WeaponBody<F>>(&mut self, body: &mut B, delta_time: F) {
        let direction = self.target_position - body.position();
        let distance = direction.length();

        if distance > self.config.follow_deadzone {
            let force = direction
                .normalize()
                .scale(self.config.follow_speed * distance)
                .clamp_length(self.config.max_force);
            body.add_force(force);

            let velocity = body.velocity();
            if velocity.length() > self.config.min_turn_speed {
                if let Some(look) = Quat::look_rotation(velocity.normalize(), Vec3::up()) {
                    let t = delta_time * self.config.turn_rate;
                    body.set_rotation(body.rotation().slerp(look, t));
                }
            }
        }

        body.set_velocity(body.velocity().scale(self.config.damping));
        body.set_angular_velocity(body.angular_velocity().scale(self.config.damping));
    }

    /// Turn a collision into a hit. Only a held weapon hits, and only objects
    /// on [`WeaponConfig::hit_layers`].
    ///
    /// The impact sound is drawn from `hit_sounds`, usually a
    /// [`SoundBank::weapon_hits`] bank.
    pub fn on_collision<R: Rng + ?Sized>(
        &self,
        contact: &Contact<F>,
        hit_sounds: &SoundBank<F>,
        rng: &mut R,
    ) -> Option<WeaponHit<F>> {
        if !self.is_held() || !self.config.hit_layers.contains(contact.layer) {
            return None;
        }
        let strength = self.weapon_velocity.length() * self.config.damage_multiplier;
        let direction = -contact.normal;

        let impulse = contact
            .center_of_mass
            .map(|_| direction.scale(strength * self.config.hit_force_multiplier));
        let torque = contact.center_of_mass.map(|com| {
            (contact.point - com)
                .cross(direction)
                .scale(strength * self.config.torque_multiplier)
        });

        log::debug!("weapon hit layer {} with strength {:?}", contact.layer, strength);
        let volume = hit_volume(strength);

        Some(WeaponHit {
            strength,
            point: contact.point,
            direction,
            impulse,
            torque,
            damage: strength * self.config.damage_per_strength,
            hit_force: direction.scale(strength),
            volume,
            sound: hit_sounds.pick(rng, volume),
        })
    }

    /// Tint for the weapon: pulses toward the highlight colour while it can
    /// be picked up, otherwise `base`.
    pub fn highlight(&self, base: Color<F>, time: F) -> Color<F> {
        if self.can_be_picked_up && !self.is_held() {
            base.lerp(self.config.highlight_color, (time * F::two()).ping_pong(F::one()))
        } else {
            base
        }
    }
}
