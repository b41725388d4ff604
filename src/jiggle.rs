//! Jiggle-bone secondary motion.
//!
//! A jiggle bone follows a virtual mass point hung on a damped spring in
//! front of its transform. Each tick the spring target is placed
//! `rest_distance` along the transform's bind-pose forward axis, the point is
//! integrated toward it, and the transform is turned to look at the point.
//! The resulting local rotation is clamped per axis so the bone cannot flip.
//!
//! Orientation is derived from scratch every tick, starting from the bind
//! rotation captured at initialization. Only the mass point's position and
//! velocity carry over between ticks.
//!
//! # Example
//!
//! ```
//! use jiggly::{JiggleBone, JiggleConfig, NoOpTickObserver, Pose, Quat, Vec3, ImpulseSink};
//!
//! let pose = Pose::new(Vec3::new(0.0f32, 1.0, 0.0), Quat::identity());
//! let mut bone = JiggleBone::new(JiggleConfig::default(), &pose);
//!
//! bone.apply_impulse(Vec3::new(0.0, 2.0, 0.0));
//! let rotation = bone.tick(&pose, 1.0 / 60.0, &mut NoOpTickObserver);
//! assert!(rotation.is_finite());
//! ```

use crate::clamp::clamp_rotation;
use crate::config::JiggleConfig;
use crate::float::Float;
use crate::host::Pose;
use crate::observer::TickObserver;
use crate::quat::Quat;
use crate::vec::{Vec, Vec3};

/// Factor converting an impulse into a velocity change before dividing by mass.
pub const IMPULSE_SCALE: f32 = 10.0;

/// Receiver of instantaneous velocity changes from collisions or damage.
///
/// Impulses accumulate additively and are consumed by the next tick.
pub trait ImpulseSink<F: Float> {
    /// Add a world-space impulse.
    fn apply_impulse(&mut self, impulse: Vec3<F>);
}

/// Simulation state that persists between ticks.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JiggleState<F: Float> {
    /// World-space velocity of the mass point.
    pub velocity: Vec3<F>,
    /// World-space position of the mass point.
    pub dynamic_position: Vec3<F>,
    /// Rest local rotation of the driven transform.
    pub bind_rotation: Quat<F>,
}

impl<F: Float> JiggleState<F> {
    /// Capture the bind rotation and place the mass point one unit ahead of
    /// the transform.
    pub fn initialize(pose: &Pose<F>) -> Self {
        JiggleState {
            velocity: Vec3::zero(),
            dynamic_position: pose.position + pose.forward(),
            bind_rotation: pose.local_rotation,
        }
    }

    /// Zero the velocity and put the mass point back in front of the
    /// transform's bind pose. The bind rotation is kept.
    pub fn reset(&mut self, pose: &Pose<F>) {
        let rest = pose.with_local_rotation(self.bind_rotation);
        self.velocity = Vec3::zero();
        self.dynamic_position = rest.position + rest.forward();
    }

    /// Add `impulse * IMPULSE_SCALE / mass` to the velocity.
    ///
    /// `mass` is floored the same way a tick floors it.
    pub fn apply_impulse_with_mass(&mut self, impulse: Vec3<F>, mass: F) {
        let mass = mass.max(F::from_f32(crate::config::MIN_MASS));
        self.velocity = self.velocity + impulse.scale(F::from_f32(IMPULSE_SCALE) / mass);
    }
}

/// Per-tick input from the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickInput<F: Float> {
    pub pose: Pose<F>,
    /// Seconds since the previous tick. Expected to be non-negative.
    pub delta_time: F,
}

/// Diagnostic rays describing one tick. Purely informational.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugRays<F: Float> {
    /// World position of the driven transform.
    pub origin: Vec3<F>,
    /// Bind-pose forward scaled by the rest distance (origin to spring target).
    pub target_offset: Vec3<F>,
    /// Forward axis after the output rotation is applied.
    pub forward: Vec3<F>,
    /// Mass point after integration.
    pub dynamic_position: Vec3<F>,
    /// `origin + forward * |displacement|`, marking how far the spring is stretched.
    pub displacement_marker: Vec3<F>,
}

/// Result of one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickOutput<F: Float> {
    /// New local rotation for the driven transform.
    pub local_rotation: Quat<F>,
    pub rays: DebugRays<F>,
}

/// Advance the spring by one step and derive the transform's local rotation.
///
/// Mass and damping are floored here without touching `config`; callers that
/// want the floors written back use [`JiggleConfig::sanitize`] first. Never
/// fails: a mass point sitting exactly on the transform keeps the bind pose.
pub fn tick<F, O>(
    config: &JiggleConfig<F>,
    state: &mut JiggleState<F>,
    input: &TickInput<F>,
    observer: &mut O,
) -> TickOutput<F>
where
    F: Float,
    O: TickObserver<F>,
{
    let dt = input.delta_time;
    let mass = config.effective_mass();
    let damping = config.damping.max(F::zero());

    // orientation always starts from the bind pose
    let pose = input.pose.with_local_rotation(state.bind_rotation);
    let bind_world = pose.world_rotation();
    let target_offset = bind_world.forward().scale(config.rest_distance);
    let target = pose.position + target_offset;
    let displacement = target - state.dynamic_position;

    state.velocity = state.velocity.scale(F::one() / (F::one() + damping * dt));
    let force = displacement.scale(config.stiffness);
    let acceleration = force.scale(F::one() / mass);
    state.velocity = state.velocity + acceleration.scale(dt);
    state.dynamic_position = state.dynamic_position + state.velocity.scale(dt);
    observer.on_integrate(state);

    let look = state.dynamic_position - pose.position;
    let world = Quat::look_rotation(look, bind_world.up()).unwrap_or(bind_world);
    let clamped = clamp_rotation(pose.to_local(world), config.bounds());
    let local_rotation = if config.doubled_swing {
        (clamped * clamped).normalize()
    } else {
        clamped
    };

    let forward = (pose.parent_rotation * local_rotation).forward();
    let rays = DebugRays {
        origin: pose.position,
        target_offset,
        forward,
        dynamic_position: state.dynamic_position,
        displacement_marker: pose.position + forward.scale(displacement.length()),
    };
    observer.on_tick_complete(&rays);

    TickOutput { local_rotation, rays }
}

/// A jiggle bone: configuration plus simulation state.
///
/// Does not own the transform it drives; see [`HostBinding`](crate::host::HostBinding)
/// for reading and writing a live transform.
#[derive(Clone, Debug)]
pub struct JiggleBone<F: Float> {
    config: JiggleConfig<F>,
    state: JiggleState<F>,
    initial_pose: Pose<F>,
    last_rays: Option<DebugRays<F>>,
}

impl<F: Float> JiggleBone<F> {
    /// Create a bone resting at `pose`.
    pub fn new(config: JiggleConfig<F>, pose: &Pose<F>) -> Self {
        JiggleBone {
            config,
            state: JiggleState::initialize(pose),
            initial_pose: *pose,
            last_rays: None,
        }
    }

    /// Run one tick and return the new local rotation for the transform.
    ///
    /// Invalid mass and damping in the config are corrected in place first.
    pub fn tick<O: TickObserver<F>>(&mut self, pose: &Pose<F>, delta_time: F, observer: &mut O) -> Quat<F> {
        self.config.sanitize();
        let input = TickInput { pose: *pose, delta_time };
        let output = tick(&self.config, &mut self.state, &input, observer);
        if self.config.debug_render {
            let r = &output.rays;
            log::trace!(
                "jiggle origin={:?} target_offset={:?} forward={:?} dynamic={:?} stretch={:?}",
                r.origin, r.target_offset, r.forward, r.dynamic_position, r.displacement_marker
            );
        }
        self.last_rays = Some(output.rays);
        output.local_rotation
    }

    /// Diagnostic rays from the most recent tick.
    pub fn debug_rays(&self) -> Option<&DebugRays<F>> {
        self.last_rays.as_ref()
    }

    /// Restart from rest at `pose`: zero velocity, mass point one unit ahead.
    pub fn reset(&mut self, pose: &Pose<F>) {
        self.state.reset(pose);
        self.last_rays = None;
    }

    /// Restart from rest at the pose the bone was created with.
    pub fn reset_to_initial(&mut self) {
        let pose = self.initial_pose;
        self.reset(&pose);
    }

    pub fn config(&self) -> &JiggleConfig<F> {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut JiggleConfig<F> {
        &mut self.config
    }

    pub fn state(&self) -> &JiggleState<F> {
        &self.state
    }

    pub fn velocity(&self) -> Vec3<F> {
        self.state.velocity
    }

    pub fn dynamic_position(&self) -> Vec3<F> {
        self.state.dynamic_position
    }
}

impl<F: Float> ImpulseSink<F> for JiggleBone<F> {
    fn apply_impulse(&mut self, impulse: Vec3<F>) {
        self.state.apply_impulse_with_mass(impulse, self.config.mass);
    }
}
