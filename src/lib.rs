//! Jiggle-bone secondary motion and melee hit feedback for games.
//!
//! `jiggly` drives the wobble of a bone-like transform with a damped spring
//! and wires it to the gameplay around a physics melee prototype: damageable
//! targets that kick their jiggle bones when struck, a pointer-driven weapon,
//! floating damage numbers and camera shake. Engine work (rendering, audio,
//! rigid bodies, input) stays with the host behind small traits and plain
//! values.
//!
//! # Features
//!
//! - **Jiggle bones**: Damped spring on a virtual mass point, look-at
//!   orientation, per-axis swing clamp
//! - **Impulses**: Collision and damage events kick the spring through `ImpulseSink`
//! - **Host binding**: Reads and writes a live transform; inert when unbound
//! - **Targets**: Health, damage flash, death handling, health bars
//! - **Weapon**: Pick-up/drop state machine, follow force, hit strength
//! - **Feedback**: Damage numbers, camera shake, randomized sound cues
//! - **Observable**: Monitor ticks via the `TickObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod quat;
pub mod clamp;
pub mod config;
pub mod host;
pub mod jiggle;
pub mod target;
pub mod weapon;
pub mod damage_text;
pub mod shake;
pub mod feedback;
pub mod observer;
pub mod error;
#[cfg(feature = "glam")]
pub mod interop;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2, Vec3};
pub use quat::Quat;
pub use clamp::{clamp_rotation, swing_angles};
pub use config::{JiggleConfig, MIN_MASS};
pub use host::{HostBinding, JiggleParent, Pose, Transform};
pub use jiggle::{tick, DebugRays, ImpulseSink, JiggleBone, JiggleState, TickInput, TickOutput, IMPULSE_SCALE};
pub use target::{Damageable, DeathAction, HealthBar, HitReport, HitTarget, HitTargetConfig};
pub use weapon::{
    Contact, Grip, LayerMask, PhysicsProfile, PointerInput, WeaponBody, WeaponConfig,
    WeaponController, WeaponEvent, WeaponHit,
};
pub use damage_text::{DamageNumbers, DamageTextConfig, FloatingText};
pub use shake::{CameraShake, ShakeConfig};
pub use feedback::{Color, SoundBank, SoundCue};
pub use observer::{TickObserver, NoOpTickObserver};
pub use error::JiggleError;
