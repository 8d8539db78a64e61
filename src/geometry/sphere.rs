use crate::hittable::Hittable;
use crate::materials::Material;
use crate::math::*;

/// Solves `t^2 + b t + c = 0` for a unit `direction`.
///
/// Only reports a hit when both roots are strictly positive, returning the smaller one.
/// A tangent ray (zero discriminant) misses, and so does a ray starting inside the sphere,
/// since one of its roots is negative.
pub fn intersect_sphere(center: Vec3, radius: f32, origin: Vec3, direction: Vec3) -> Option<f32> {
    let oc = origin - center;
    let b = 2.0 * (direction * oc);
    let c = oc.norm_squared() - radius * radius;
    let discriminant = b * b - 4.0 * c;
    if discriminant > 0.0 {
        let discriminant_sqrt = discriminant.sqrt();
        let t1 = (-b + discriminant_sqrt) / 2.0;
        let t2 = (-b - discriminant_sqrt) / 2.0;
        if t1 > 0.0 && t2 > 0.0 {
            return Some(t1.min(t2));
        }
    }
    None
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material: Material) -> Sphere {
        Sphere {
            center,
            radius,
            material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: Ray) -> Option<f32> {
        intersect_sphere(self.center, self.radius, r.origin, r.direction)
    }
    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalized()
    }
}
