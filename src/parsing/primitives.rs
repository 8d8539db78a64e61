use crate::geometry::*;
use crate::materials::Material;
use crate::world::SceneError;

use serde::{Deserialize, Serialize};

use std::collections::HashMap;

use super::material::MaterialDataOrReference;
use super::Vec3Data;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum PrimitiveData {
    Sphere {
        center: Vec3Data,
        radius: f32,
        material: MaterialDataOrReference,
    },
    Plane {
        point: Vec3Data,
        normal: Vec3Data,
        material: MaterialDataOrReference,
    },
}

/// Builds the primitive without validating it, `World::new` does that with the
/// primitive's index at hand.
pub fn parse_primitive(
    data: PrimitiveData,
    materials: &HashMap<String, Material>,
) -> Result<Primitive, SceneError> {
    match data {
        PrimitiveData::Sphere {
            center,
            radius,
            material,
        } => {
            let material = material.resolve(materials)?;
            Ok(Primitive::Sphere(Sphere::new(center.into(), radius, material)))
        }
        PrimitiveData::Plane {
            point,
            normal,
            material,
        } => {
            let material = material.resolve(materials)?;
            Ok(Primitive::Plane(Plane {
                point: point.into(),
                normal: normal.into(),
                material,
            }))
        }
    }
}
