pub mod config;
pub mod material;
pub mod primitives;
pub mod tonemap;

pub use config::get_settings;
pub use material::{LightData, MaterialData, MaterialDataOrReference};
pub use primitives::{parse_primitive, PrimitiveData};
pub use tonemap::{parse_tonemapper, TonemapSettings};

use crate::camera::{Screen, ScreenCamera};
use crate::materials::Material;
use crate::world::{SceneError, World};

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

pub type Vec3Data = [f32; 3];
pub type ColorData = [f32; 3];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum MaybeMaterialLib {
    Literal(HashMap<String, MaterialData>),
    Path(String),
}

impl MaybeMaterialLib {
    pub fn resolve(self) -> anyhow::Result<HashMap<String, MaterialData>> {
        match self {
            Self::Literal(data) => Ok(data),
            Self::Path(path) => load_arbitrary(PathBuf::from(path)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CameraData {
    pub position: Vec3Data,
    // left, top, right, bottom. derived from the aspect ratio when absent
    pub screen: Option<[f32; 4]>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SceneData {
    pub camera: CameraData,
    pub light: LightData,
    pub materials: Option<MaybeMaterialLib>,
    #[serde(default)]
    pub primitives: Vec<PrimitiveData>,
}

impl SceneData {
    pub fn into_world(self) -> anyhow::Result<World> {
        let mut materials_map: HashMap<String, Material> = HashMap::new();
        if let Some(lib) = self.materials {
            for (name, data) in lib.resolve()? {
                info!("inserted material {}", &name);
                materials_map.insert(name, data.into());
            }
        }

        let primitives = self
            .primitives
            .into_iter()
            .map(|data| parse_primitive(data, &materials_map))
            .collect::<Result<Vec<_>, SceneError>>()?;

        let camera = ScreenCamera::new(
            self.camera.position.into(),
            self.camera.screen.map(Screen::from),
        );
        Ok(World::new(primitives, self.light.into(), camera)?)
    }
}

fn read_file(filepath: &Path) -> anyhow::Result<String> {
    info!("loading file at {}", filepath.to_string_lossy());
    let mut input = String::new();
    let read_count = File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("failed to read {}", filepath.to_string_lossy()))?;
    info!("done: {} bytes", read_count);
    Ok(input)
}

fn load_arbitrary<T>(filepath: PathBuf) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let input = read_file(&filepath)?;
    let data: T = toml::from_str(&input)
        .with_context(|| format!("failed to parse {}", filepath.to_string_lossy()))?;
    Ok(data)
}

pub fn parse_scene(input: &str) -> anyhow::Result<SceneData> {
    let scene: SceneData = toml::from_str(input).inspect_err(|e| {
        error!("encountered error when parsing scene file: {}", e);
    })?;
    Ok(scene)
}

pub fn load_scene(filepath: PathBuf) -> anyhow::Result<SceneData> {
    let input = read_file(&filepath)?;
    parse_scene(&input).with_context(|| format!("in scene file {}", filepath.to_string_lossy()))
}

pub fn construct_world(scene_file: PathBuf) -> anyhow::Result<World> {
    load_scene(scene_file)?.into_world()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::world::Primitive;

    const SCENE: &str = r#"
        [camera]
        position = [0.0, 0.0, 1.0]

        [light]
        position = [0.0, 5.0, 3.0]
        ambient = [1.0, 1.0, 1.0]
        diffuse = [1.0, 1.0, 1.0]
        specular = [1.0, 1.0, 1.0]

        [materials.floor]
        ambient = [0.1, 0.1, 0.1]
        diffuse = [0.5, 0.5, 0.5]
        specular = [0.5, 0.5, 0.5]
        shininess = 50.0

        [[primitives]]
        type = "Sphere"
        center = [0.0, 0.0, -1.0]
        radius = 0.5
        material = { ambient = [0.1, 0.1, 0.3], diffuse = [0.2, 0.2, 0.8], specular = [1.0, 1.0, 1.0], shininess = 100.0, reflection = 0.5 }

        [[primitives]]
        type = "Plane"
        point = [0.0, -0.5, 0.0]
        normal = [0.0, 2.0, 0.0]
        material = "floor"
    "#;

    #[test]
    fn test_parsing_inline_scene() {
        let world = parse_scene(SCENE).unwrap().into_world().unwrap();
        assert_eq!(world.primitives.len(), 2);
        match world.primitives[0] {
            Primitive::Sphere(sphere) => {
                assert_eq!(sphere.radius, 0.5);
                assert_eq!(sphere.material.reflection, Some(0.5));
            }
            _ => panic!("first primitive should be the sphere"),
        }
        match world.primitives[1] {
            Primitive::Plane(plane) => {
                assert_eq!(plane.normal, crate::math::Vec3::Y);
                assert_eq!(plane.material.reflection, None);
                assert_eq!(plane.material.shininess, 50.0);
            }
            _ => panic!("second primitive should be the plane"),
        }
        assert_eq!(world.camera.screen, None);
    }

    #[test]
    fn test_unknown_material_reference() {
        let scene = SCENE.replace("material = \"floor\"", "material = \"ceiling\"");
        let err = parse_scene(&scene).unwrap().into_world().unwrap_err();
        assert_eq!(
            err.downcast_ref::<SceneError>(),
            Some(&SceneError::UnknownMaterial(String::from("ceiling")))
        );
    }

    #[test]
    fn test_invalid_radius_rejected() {
        let scene = SCENE.replace("radius = 0.5", "radius = -0.5");
        let err = parse_scene(&scene).unwrap().into_world().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SceneError>(),
            Some(SceneError::InvalidRadius { index: 0, .. })
        ));
    }

    #[test]
    fn test_non_finite_light_rejected() {
        let scene = SCENE.replace("position = [0.0, 5.0, 3.0]", "position = [nan, 5.0, 3.0]");
        let err = parse_scene(&scene).unwrap().into_world().unwrap_err();
        assert_eq!(
            err.downcast_ref::<SceneError>(),
            Some(&SceneError::NonFiniteLight { field: "position" })
        );

        let scene = SCENE.replacen("specular = [1.0, 1.0, 1.0]", "specular = [inf, 1.0, 1.0]", 1);
        let err = parse_scene(&scene).unwrap().into_world().unwrap_err();
        assert_eq!(
            err.downcast_ref::<SceneError>(),
            Some(&SceneError::NonFiniteLight { field: "specular" })
        );
    }

    #[test]
    fn test_non_finite_material_rejected() {
        let scene = SCENE.replace("diffuse = [0.5, 0.5, 0.5]", "diffuse = [0.5, -inf, 0.5]");
        let err = parse_scene(&scene).unwrap().into_world().unwrap_err();
        assert_eq!(
            err.downcast_ref::<SceneError>(),
            Some(&SceneError::NonFinite {
                index: 1,
                field: "diffuse"
            })
        );
    }

    #[test]
    fn test_missing_light_is_a_parse_error() {
        let scene = r#"
            [camera]
            position = [0.0, 0.0, 1.0]
        "#;
        assert!(parse_scene(scene).is_err());
    }

    #[test]
    fn test_explicit_screen() {
        let scene = SCENE.replace(
            "position = [0.0, 0.0, 1.0]",
            "position = [0.0, 0.0, 1.0]\nscreen = [-2.0, 1.0, 2.0, -1.0]",
        );
        let world = parse_scene(&scene).unwrap().into_world().unwrap();
        assert_eq!(world.camera.screen, Some(Screen::new(-2.0, 1.0, 2.0, -1.0)));
    }

    #[test]
    fn test_showcase_file_matches_builtin() {
        let world = construct_world(PathBuf::from("data/scenes/showcase.toml")).unwrap();
        let builtin = World::showcase();
        assert_eq!(world.primitives.len(), builtin.primitives.len());
        for (parsed, expected) in world.primitives.iter().zip(builtin.primitives.iter()) {
            assert_eq!(parsed.kind(), expected.kind());
            let (a, b) = (parsed.material(), expected.material());
            assert!((a.diffuse.r - b.diffuse.r).abs() < 1e-6);
            assert!((a.ambient.b - b.ambient.b).abs() < 1e-6);
            assert_eq!(a.shininess, b.shininess);
            assert_eq!(a.reflection, b.reflection);
        }
        assert_eq!(world.light, builtin.light);
        assert_eq!(world.camera, builtin.camera);
    }

    #[test]
    fn test_material_lib_from_path() {
        let materials = MaybeMaterialLib::Path(String::from("data/lib_materials.toml"))
            .resolve()
            .unwrap();
        assert!(materials.contains_key("mirror"));
        assert!(materials.contains_key("floor"));
    }

    #[test]
    fn test_scene_with_material_lib_path() {
        let world = construct_world(PathBuf::from("data/scenes/hall_of_mirrors.toml")).unwrap();
        assert_eq!(world.primitives.len(), 4);
        assert!(!world.primitives[0].material().is_reflective());
        assert_eq!(world.primitives[1].material().reflection, Some(1.0));
        assert_eq!(world.primitives[2].material().reflection, Some(1.0));
        assert!(world.camera.screen.is_some());
    }
}
