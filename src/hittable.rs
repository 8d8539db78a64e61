use crate::math::*;

pub trait Hittable {
    /// Parametric distance along `r` to the nearest accepted intersection, never negative.
    fn hit(&self, r: Ray) -> Option<f32>;
    /// Unit surface normal at a point that lies on the surface.
    fn normal_at(&self, point: Vec3) -> Vec3;
}
