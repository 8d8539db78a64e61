mod plane;
mod sphere;

pub use plane::{intersect_plane, Plane, PARALLEL_EPSILON};
pub use sphere::{intersect_sphere, Sphere};

use crate::hittable::Hittable;
use crate::materials::Material;
use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
}

impl From<Sphere> for Primitive {
    fn from(data: Sphere) -> Self {
        Primitive::Sphere(data)
    }
}

impl From<Plane> for Primitive {
    fn from(data: Plane) -> Self {
        Primitive::Plane(data)
    }
}

impl Primitive {
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(sphere) => &sphere.material,
            Primitive::Plane(plane) => &plane.material,
        }
    }
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Sphere(_) => "sphere",
            Primitive::Plane(_) => "plane",
        }
    }
}

impl Hittable for Primitive {
    fn hit(&self, r: Ray) -> Option<f32> {
        match self {
            Primitive::Sphere(sphere) => sphere.hit(r),
            Primitive::Plane(plane) => plane.hit(r),
        }
    }
    fn normal_at(&self, point: Vec3) -> Vec3 {
        match self {
            Primitive::Sphere(sphere) => sphere.normal_at(point),
            Primitive::Plane(plane) => plane.normal_at(point),
        }
    }
}
