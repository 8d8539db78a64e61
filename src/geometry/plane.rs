use crate::hittable::Hittable;
use crate::materials::Material;
use crate::math::*;

/// Below this, a ray is treated as parallel to the plane, including rays lying in it.
pub const PARALLEL_EPSILON: f32 = 1e-6;

pub fn intersect_plane(point: Vec3, normal: Vec3, origin: Vec3, direction: Vec3) -> Option<f32> {
    let denom = direction * normal;
    if denom.abs() > PARALLEL_EPSILON {
        let time = ((point - origin) * normal) / denom;
        if time >= 0.0 {
            return Some(time);
        }
    }
    None
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
    pub material: Material,
}

impl Plane {
    /// Normalizes `normal` on the way in.
    pub fn new(point: Vec3, normal: Vec3, material: Material) -> Result<Plane, DegenerateVectorError> {
        Ok(Plane {
            point,
            normal: normal.try_normalized()?,
            material,
        })
    }
}

impl Hittable for Plane {
    fn hit(&self, r: Ray) -> Option<f32> {
        intersect_plane(self.point, self.normal, r.origin, r.direction)
    }
    // one-sided: the stored normal is used as-is, whichever side the ray came from
    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }
}
