mod showcase;

use crate::camera::ScreenCamera;
use crate::hittable::Hittable;
use crate::math::*;

pub use crate::geometry::*;
pub use crate::materials::*;

use thiserror::Error;

/// How far shadow and reflection rays are pushed off the surface along its normal.
pub const NORMAL_OFFSET: f32 = 0.00001;

#[derive(Error, Debug, PartialEq)]
pub enum SceneError {
    #[error("primitive {index}: sphere radius must be positive and finite, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },
    #[error("primitive {index}: plane normal is degenerate")]
    DegenerateNormal {
        index: usize,
        #[source]
        source: DegenerateVectorError,
    },
    #[error("primitive {index}: shininess must be positive and finite, got {shininess}")]
    InvalidShininess { index: usize, shininess: f32 },
    #[error("primitive {index}: reflection must lie in [0, 1], got {reflection}")]
    InvalidReflection { index: usize, reflection: f32 },
    #[error("primitive {index}: {field} is not finite")]
    NonFinite { index: usize, field: &'static str },
    #[error("light {field} is not finite")]
    NonFiniteLight { field: &'static str },
    #[error("camera {field} is not finite")]
    NonFiniteCamera { field: &'static str },
    #[error("unknown material {0:?}")]
    UnknownMaterial(String),
}

/// Result of a scene query.
#[derive(Copy, Clone, Debug)]
pub struct NearestHit<'a> {
    pub primitive: &'a Primitive,
    pub index: usize,
    pub time: f32,
}

#[derive(Clone, Debug)]
pub struct World {
    pub primitives: Vec<Primitive>,
    pub light: Light,
    pub camera: ScreenCamera,
}

impl World {
    /// Checks every primitive and renormalizes plane normals. Primitive order is kept.
    pub fn new(
        mut primitives: Vec<Primitive>,
        light: Light,
        camera: ScreenCamera,
    ) -> Result<Self, SceneError> {
        for (index, primitive) in primitives.iter_mut().enumerate() {
            match primitive {
                Primitive::Sphere(sphere) => {
                    if !(sphere.radius > 0.0 && sphere.radius.is_finite()) {
                        return Err(SceneError::InvalidRadius {
                            index,
                            radius: sphere.radius,
                        });
                    }
                    if !sphere.center.is_finite() {
                        return Err(SceneError::NonFinite {
                            index,
                            field: "center",
                        });
                    }
                }
                Primitive::Plane(plane) => {
                    plane.normal = plane
                        .normal
                        .try_normalized()
                        .map_err(|source| SceneError::DegenerateNormal { index, source })?;
                    if !plane.point.is_finite() {
                        return Err(SceneError::NonFinite {
                            index,
                            field: "point",
                        });
                    }
                }
            }
            let material = primitive.material();
            if let Some(field) = material.non_finite_field() {
                return Err(SceneError::NonFinite { index, field });
            }
            if !(material.shininess > 0.0 && material.shininess.is_finite()) {
                return Err(SceneError::InvalidShininess {
                    index,
                    shininess: material.shininess,
                });
            }
            if let Some(reflection) = material.reflection {
                if !(0.0..=1.0).contains(&reflection) {
                    return Err(SceneError::InvalidReflection { index, reflection });
                }
            }
        }
        if let Some(field) = light.non_finite_field() {
            return Err(SceneError::NonFiniteLight { field });
        }
        if !camera.origin.is_finite() {
            return Err(SceneError::NonFiniteCamera { field: "origin" });
        }
        if let Some(screen) = camera.screen {
            if ![screen.left, screen.top, screen.right, screen.bottom]
                .iter()
                .all(|v| v.is_finite())
            {
                return Err(SceneError::NonFiniteCamera { field: "screen" });
            }
        }
        if primitives.is_empty() {
            warn!("the world has no primitives, every pixel will be black");
        }
        info!(
            "constructed world with {} primitives, light at {:?}, camera at {:?}",
            primitives.len(),
            light.position,
            camera.origin
        );
        Ok(World {
            primitives,
            light,
            camera,
        })
    }

    /// Linear scan for the primitive with the strictly smallest hit distance. On exact
    /// ties the earliest primitive wins. A distance of exactly zero is a valid hit.
    pub fn find_nearest(&self, r: Ray) -> Option<NearestHit<'_>> {
        let mut nearest: Option<NearestHit<'_>> = None;
        let mut closest_so_far = INFINITY;
        for (index, primitive) in self.primitives.iter().enumerate() {
            if let Some(time) = primitive.hit(r) {
                if time < closest_so_far {
                    closest_so_far = time;
                    nearest = Some(NearestHit {
                        primitive,
                        index,
                        time,
                    });
                }
            }
        }
        nearest
    }

    /// Distance to the nearest hit, `INFINITY` when nothing is hit.
    pub fn nearest_distance(&self, r: Ray) -> f32 {
        self.find_nearest(r).map_or(INFINITY, |hit| hit.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere_at(z: f32, radius: f32) -> Primitive {
        Sphere::new(Vec3::new(0.0, 0.0, z), radius, Material::default()).into()
    }

    fn world_of(primitives: Vec<Primitive>) -> World {
        World::new(
            primitives,
            Light::white(Vec3::new(0.0, 5.0, 3.0)),
            ScreenCamera::new(Vec3::Z, None),
        )
        .unwrap()
    }

    #[test]
    fn test_nearest_is_closer_primitive() {
        let world = world_of(vec![sphere_at(-10.0, 1.0), sphere_at(-4.0, 1.0)]);
        let nearest = world.find_nearest(Ray::new(Vec3::ZERO, -Vec3::Z)).unwrap();
        assert_eq!(nearest.index, 1);
        assert!((nearest.time - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_tie_goes_to_first() {
        let first = Sphere::new(
            Vec3::new(0.0, 0.0, -4.0),
            1.0,
            Material::default().with_reflection(0.5),
        );
        let second = Sphere::new(Vec3::new(0.0, 0.0, -4.0), 1.0, Material::default());
        let world = world_of(vec![first.into(), second.into()]);
        let nearest = world.find_nearest(Ray::new(Vec3::ZERO, -Vec3::Z)).unwrap();
        assert_eq!(nearest.index, 0);
        assert!(nearest.primitive.material().is_reflective());
    }

    #[test]
    fn test_no_hit_is_infinite() {
        let world = world_of(vec![sphere_at(-4.0, 1.0)]);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(world.find_nearest(ray).is_none());
        assert_eq!(world.nearest_distance(ray), INFINITY);

        let empty = world_of(vec![]);
        assert!(empty.find_nearest(ray).is_none());
    }

    #[test]
    fn test_zero_distance_is_selectable() {
        let floor = Plane::new(Vec3::ZERO, Vec3::Y, Material::default()).unwrap();
        let world = world_of(vec![sphere_at(-4.0, 1.0), floor.into()]);
        let nearest = world.find_nearest(Ray::new(Vec3::ZERO, -Vec3::Y)).unwrap();
        assert_eq!(nearest.index, 1);
        assert_eq!(nearest.time, 0.0);
    }

    #[test]
    fn test_validation() {
        let light = Light::white(Vec3::Y);
        let camera = ScreenCamera::new(Vec3::Z, None);

        let bad_radius = Sphere::new(Vec3::ZERO, 0.0, Material::default());
        assert_eq!(
            World::new(vec![bad_radius.into()], light, camera).unwrap_err(),
            SceneError::InvalidRadius {
                index: 0,
                radius: 0.0
            }
        );

        let bad_plane = Primitive::Plane(Plane {
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            material: Material::default(),
        });
        assert!(matches!(
            World::new(vec![sphere_at(-1.0, 0.5), bad_plane], light, camera),
            Err(SceneError::DegenerateNormal { index: 1, .. })
        ));

        let mut dull = Material::default();
        dull.shininess = 0.0;
        let dull_sphere = Sphere::new(Vec3::ZERO, 1.0, dull);
        assert!(matches!(
            World::new(vec![dull_sphere.into()], light, camera),
            Err(SceneError::InvalidShininess { index: 0, .. })
        ));

        let too_shiny = Sphere::new(Vec3::ZERO, 1.0, Material::default().with_reflection(1.5));
        assert!(matches!(
            World::new(vec![too_shiny.into()], light, camera),
            Err(SceneError::InvalidReflection { index: 0, .. })
        ));
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        let light = Light::white(Vec3::Y);
        let camera = ScreenCamera::new(Vec3::Z, None);

        let mut glowing = Material::default();
        glowing.diffuse = RGBColor::new(0.5, f32::INFINITY, 0.5);
        let sphere = Sphere::new(Vec3::ZERO, 1.0, glowing);
        assert_eq!(
            World::new(vec![sphere_at(-1.0, 0.5), sphere.into()], light, camera).unwrap_err(),
            SceneError::NonFinite {
                index: 1,
                field: "diffuse"
            }
        );

        let far_sphere = Sphere::new(Vec3::new(f32::NAN, 0.0, 0.0), 1.0, Material::default());
        assert_eq!(
            World::new(vec![far_sphere.into()], light, camera).unwrap_err(),
            SceneError::NonFinite {
                index: 0,
                field: "center"
            }
        );

        let nan_light = Light::white(Vec3::new(f32::NAN, 5.0, 3.0));
        assert_eq!(
            World::new(vec![sphere_at(-1.0, 0.5)], nan_light, camera).unwrap_err(),
            SceneError::NonFiniteLight { field: "position" }
        );

        let mut hot_light = Light::white(Vec3::Y);
        hot_light.specular = RGBColor::new(f32::INFINITY, 1.0, 1.0);
        assert_eq!(
            World::new(vec![], hot_light, camera).unwrap_err(),
            SceneError::NonFiniteLight { field: "specular" }
        );

        let lost_camera = ScreenCamera::new(Vec3::new(0.0, f32::NEG_INFINITY, 1.0), None);
        assert_eq!(
            World::new(vec![], light, lost_camera).unwrap_err(),
            SceneError::NonFiniteCamera { field: "origin" }
        );

        let bad_screen = ScreenCamera::new(
            Vec3::Z,
            Some(crate::camera::Screen::new(-1.0, f32::NAN, 1.0, -1.0)),
        );
        assert_eq!(
            World::new(vec![], light, bad_screen).unwrap_err(),
            SceneError::NonFiniteCamera { field: "screen" }
        );
    }

    #[test]
    fn test_plane_normal_renormalized() {
        let tilted = Primitive::Plane(Plane {
            point: Vec3::ZERO,
            normal: Vec3::new(0.0, 2.0, 0.0),
            material: Material::default(),
        });
        let world = world_of(vec![tilted]);
        match world.primitives[0] {
            Primitive::Plane(plane) => assert_eq!(plane.normal, Vec3::Y),
            _ => unreachable!(),
        }
    }
}
