use crate::materials::{Light, Material};
use crate::math::*;

use serde::Deserialize;

/// How the cosine terms of the local model are treated when they go negative.
#[derive(Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ShadingPolicy {
    /// `L·N` is used as-is, so surfaces facing away from the light darken below their
    /// ambient level. `N·H` is clamped to zero before the fractional power.
    #[default]
    Reference,
    /// Both `L·N` and `N·H` are clamped to zero.
    Clamped,
}

/// Ambient + diffuse + specular at a point. All direction arguments are unit vectors
/// pointing away from the surface.
pub fn local_illumination(
    material: &Material,
    light: &Light,
    normal: Vec3,
    to_light: Vec3,
    to_camera: Vec3,
    policy: ShadingPolicy,
) -> RGBColor {
    let mut illumination = material.ambient * light.ambient;

    let lambert = match policy {
        ShadingPolicy::Reference => to_light * normal,
        ShadingPolicy::Clamped => (to_light * normal).max(0.0),
    };
    illumination += material.diffuse * light.diffuse * lambert;

    // a light exactly opposite the camera leaves a NaN half vector, which max() drops to 0
    let half = (to_light + to_camera).normalized();
    let n_dot_h = (normal * half).max(0.0);
    illumination += material.specular * light.specular * n_dot_h.powf(material.shininess / 4.0);

    illumination
}
