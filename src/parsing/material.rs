use crate::materials::{Light, Material};
use crate::world::SceneError;

use serde::{Deserialize, Serialize};

use std::collections::HashMap;

use super::{ColorData, Vec3Data};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MaterialData {
    pub ambient: ColorData,
    pub diffuse: ColorData,
    pub specular: ColorData,
    pub shininess: f32,
    // absent means the surface is not a mirror at all
    pub reflection: Option<f32>,
}

impl From<MaterialData> for Material {
    fn from(data: MaterialData) -> Self {
        Material {
            ambient: data.ambient.into(),
            diffuse: data.diffuse.into(),
            specular: data.specular.into(),
            shininess: data.shininess,
            reflection: data.reflection,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum MaterialDataOrReference {
    Literal(MaterialData),
    Reference(String),
}

impl MaterialDataOrReference {
    pub fn resolve(&self, materials: &HashMap<String, Material>) -> Result<Material, SceneError> {
        match self {
            Self::Literal(inner) => {
                debug!("resolving material literal");
                Ok(inner.clone().into())
            }
            Self::Reference(name) => {
                debug!("resolving material {}", name);
                materials
                    .get(name)
                    .copied()
                    .ok_or_else(|| SceneError::UnknownMaterial(name.clone()))
            }
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LightData {
    pub position: Vec3Data,
    pub ambient: ColorData,
    pub diffuse: ColorData,
    pub specular: ColorData,
}

impl From<LightData> for Light {
    fn from(data: LightData) -> Self {
        Light::new(
            data.position.into(),
            data.ambient.into(),
            data.diffuse.into(),
            data.specular.into(),
        )
    }
}
