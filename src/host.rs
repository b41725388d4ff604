//! Binding a jiggle bone to the transform it drives.
//!
//! The host owns the transform. A [`HostBinding`] only reads its pose each
//! tick and writes the computed local rotation back; it never moves it.

use crate::config::JiggleConfig;
use crate::error::JiggleError;
use crate::float::Float;
use crate::jiggle::{ImpulseSink, JiggleBone};
use crate::observer::TickObserver;
use crate::quat::Quat;
use crate::vec::Vec3;

/// Snapshot of the driven transform for one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose<F: Float> {
    /// World-space position.
    pub position: Vec3<F>,
    /// Rotation relative to the transform's own parent.
    pub local_rotation: Quat<F>,
    /// World rotation of the transform's parent. Identity for root transforms.
    pub parent_rotation: Quat<F>,
}

impl<F: Float> Pose<F> {
    /// A root-level pose (identity parent rotation).
    pub fn new(position: Vec3<F>, local_rotation: Quat<F>) -> Self {
        Pose { position, local_rotation, parent_rotation: Quat::identity() }
    }

    pub fn with_parent_rotation(mut self, parent_rotation: Quat<F>) -> Self {
        self.parent_rotation = parent_rotation;
        self
    }

    pub fn with_local_rotation(mut self, local_rotation: Quat<F>) -> Self {
        self.local_rotation = local_rotation;
        self
    }

    pub fn world_rotation(&self) -> Quat<F> {
        self.parent_rotation * self.local_rotation
    }

    pub fn forward(&self) -> Vec3<F> {
        self.world_rotation().forward()
    }

    pub fn up(&self) -> Vec3<F> {
        self.world_rotation().up()
    }

    /// Convert a world rotation to this transform's local space.
    pub fn to_local(&self, world_rotation: Quat<F>) -> Quat<F> {
        self.parent_rotation.inverse() * world_rotation
    }
}

impl<F: Float> Default for Pose<F> {
    fn default() -> Self {
        Pose::new(Vec3::new(F::zero(), F::zero(), F::zero()), Quat::identity())
    }
}

/// A scene-graph node a jiggle bone can drive.
pub trait JiggleParent<F: Float> {
    /// Current pose of the node.
    fn pose(&self) -> Pose<F>;

    /// Overwrite the node's local rotation. Position is never written.
    fn set_local_rotation(&mut self, rotation: Quat<F>);
}

/// Plain transform for headless hosts and tests.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform<F: Float> {
    pub position: Vec3<F>,
    pub local_rotation: Quat<F>,
    pub parent_rotation: Quat<F>,
}

impl<F: Float> Transform<F> {
    pub fn new(position: Vec3<F>, local_rotation: Quat<F>) -> Self {
        Transform { position, local_rotation, parent_rotation: Quat::identity() }
    }
}

impl<F: Float> JiggleParent<F> for Transform<F> {
    fn pose(&self) -> Pose<F> {
        Pose {
            position: self.position,
            local_rotation: self.local_rotation,
            parent_rotation: self.parent_rotation,
        }
    }

    fn set_local_rotation(&mut self, rotation: Quat<F>) {
        self.local_rotation = rotation;
    }
}

/// A jiggle bone attached to its driving transform.
///
/// A binding created without a parent is inert: every update and impulse is
/// ignored. The missing parent is reported once, at attach time.
#[derive(Clone, Debug)]
pub struct HostBinding<F: Float> {
    bone: Option<JiggleBone<F>>,
}

impl<F: Float> HostBinding<F> {
    /// Bind to `parent`, or fail if there is none.
    pub fn try_attach<P: JiggleParent<F>>(
        config: JiggleConfig<F>,
        parent: Option<&P>,
    ) -> Result<Self, JiggleError> {
        let parent = parent.ok_or(JiggleError::MissingParent)?;
        Ok(HostBinding { bone: Some(JiggleBone::new(config, &parent.pose())) })
    }

    /// Bind to `parent`. Without one, logs an error and returns an inert binding.
    pub fn attach<P: JiggleParent<F>>(config: JiggleConfig<F>, parent: Option<&P>) -> Self {
        match Self::try_attach(config, parent) {
            Ok(binding) => binding,
            Err(err) => {
                log::error!("{err}; jiggle bone will stay inert");
                HostBinding { bone: None }
            }
        }
    }

    pub fn is_inert(&self) -> bool {
        self.bone.is_none()
    }

    pub fn bone(&self) -> Option<&JiggleBone<F>> {
        self.bone.as_ref()
    }

    pub fn bone_mut(&mut self) -> Option<&mut JiggleBone<F>> {
        self.bone.as_mut()
    }

    /// Run one tick against `parent` and write the result back.
    ///
    /// The parent is first reset to the bind rotation, then receives the
    /// simulated local rotation, which is also returned. Inert bindings
    /// return `None` and leave the parent untouched.
    pub fn update<P, O>(&mut self, parent: &mut P, delta_time: F, observer: &mut O) -> Option<Quat<F>>
    where
        P: JiggleParent<F>,
        O: TickObserver<F>,
    {
        let bone = self.bone.as_mut()?;
        parent.set_local_rotation(bone.state().bind_rotation);
        let rotation = bone.tick(&parent.pose(), delta_time, observer);
        parent.set_local_rotation(rotation);
        Some(rotation)
    }

    /// Clear simulation state, restarting from the parent's bind pose.
    pub fn reset<P: JiggleParent<F>>(&mut self, parent: &P) {
        if let Some(bone) = self.bone.as_mut() {
            bone.reset(&parent.pose());
        }
    }
}

impl<F: Float> ImpulseSink<F> for HostBinding<F> {
    fn apply_impulse(&mut self, impulse: Vec3<F>) {
        if let Some(bone) = self.bone.as_mut() {
            bone.apply_impulse(impulse);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec;

    #[test]
    fn pose_forward_follows_parent() {
        let quarter = Quat::from_axis_angle(Vec3::up(), 90.0f32.to_radians());
        let pose = Pose::new(Vec3::zero(), Quat::identity()).with_parent_rotation(quarter);
        assert!((pose.forward() - Vec3::right()).length() < 1e-5);
    }

    #[test]
    fn to_local_inverts_parent() {
        let parent = Quat::from_axis_angle(Vec3::right(), 0.4f32);
        let local = Quat::from_axis_angle(Vec3::up(), 0.3f32);
        let pose = Pose::new(Vec3::zero(), local).with_parent_rotation(parent);
        let back = pose.to_local(pose.world_rotation());
        assert!(back.angle_between(local) < 1e-2);
    }
}
