use super::shading::{local_illumination, ShadingPolicy};
use crate::hittable::Hittable;
use crate::math::*;
use crate::profile::Profile;
use crate::world::{World, NORMAL_OFFSET};

use std::sync::Arc;

pub const DEFAULT_MAX_DEPTH: u16 = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TraceSettings {
    pub max_depth: u16,
    pub policy: ShadingPolicy,
}

impl Default for TraceSettings {
    fn default() -> Self {
        TraceSettings {
            max_depth: DEFAULT_MAX_DEPTH,
            policy: ShadingPolicy::default(),
        }
    }
}

/// Local Phong shading with hard shadows from the single light and recursive mirror
/// reflection, cut off at `max_depth`.
pub struct WhittedIntegrator {
    pub world: Arc<World>,
    pub settings: TraceSettings,
}

impl WhittedIntegrator {
    pub fn new(world: Arc<World>, settings: TraceSettings) -> Self {
        WhittedIntegrator { world, settings }
    }

    pub fn color(&self, ray: Ray, depth: u16, profile: &mut Profile) -> RGBColor {
        radiance(&self.world, ray, depth, self.settings, profile)
    }
}

/// Traces one ray with the default depth limit and shading policy. The result is not
/// clamped.
pub fn trace(origin: Vec3, direction: Vec3, world: &World, depth: u16) -> RGBColor {
    radiance(
        world,
        Ray::new(origin, direction),
        depth,
        TraceSettings::default(),
        &mut Profile::default(),
    )
}

pub fn radiance(
    world: &World,
    ray: Ray,
    depth: u16,
    settings: TraceSettings,
    profile: &mut Profile,
) -> RGBColor {
    if depth >= settings.max_depth {
        return RGBColor::BLACK;
    }

    let nearest = match world.find_nearest(ray) {
        Some(nearest) => nearest,
        None => return RGBColor::BLACK,
    };

    let point = ray.point_at_parameter(nearest.time);
    let normal = nearest.primitive.normal_at(point);
    let shifted_point = point + NORMAL_OFFSET * normal;

    let to_light = (world.light.position - shifted_point).normalized();
    profile.shadow_rays += 1;
    let occluder_distance = world.nearest_distance(Ray::new(shifted_point, to_light));
    let light_distance = (world.light.position - point).norm();
    // shadowed points get nothing, not even ambient or a reflection
    if occluder_distance < light_distance {
        return RGBColor::BLACK;
    }

    let material = nearest.primitive.material();
    let to_camera = (world.camera.origin - point).normalized();
    let mut illumination = local_illumination(
        material,
        &world.light,
        normal,
        to_light,
        to_camera,
        settings.policy,
    );

    if let Some(reflection) = material.reflection {
        profile.bounce_rays += 1;
        let reflected = Ray::new(shifted_point, ray.direction.reflect(normal));
        illumination += reflection * radiance(world, reflected, depth + 1, settings, profile);
    }

    illumination
}
