//! Conversions to and from `glam` types, for engine hosts built on it.

use crate::quat::Quat;
use crate::vec::Vec3;

impl From<glam::Vec3> for Vec3<f32> {
    fn from(v: glam::Vec3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3<f32>> for glam::Vec3 {
    fn from(v: Vec3<f32>) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

impl From<glam::Quat> for Quat<f32> {
    fn from(q: glam::Quat) -> Self {
        Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

impl From<Quat<f32>> for glam::Quat {
    fn from(q: Quat<f32>) -> Self {
        glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}
