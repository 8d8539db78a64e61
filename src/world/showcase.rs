use super::*;

impl World {
    /// Two small gold spheres and a large blue one, all half-mirrored, over a grey floor.
    /// `data/scenes/showcase.toml` describes the same scene.
    pub fn showcase() -> World {
        let gold = Material::new(
            RGBColor::new(0.3, 0.3, 0.1),
            RGBColor::new(0.8, 0.6, 0.2),
            RGBColor::WHITE,
            100.0,
        )
        .with_reflection(0.5);
        let blue = Material::new(
            RGBColor::new(0.1, 0.1, 0.3),
            RGBColor::new(0.2, 0.2, 0.8),
            RGBColor::WHITE,
            100.0,
        )
        .with_reflection(0.5);
        let floor = Material::new(
            RGBColor::from(0.1),
            RGBColor::from(0.5),
            RGBColor::from(0.5),
            50.0,
        );

        let primitives = vec![
            Primitive::Sphere(Sphere::new(Vec3::new(-0.3, -0.3, -0.5), 0.1, gold)),
            Primitive::Sphere(Sphere::new(Vec3::new(0.3, -0.3, -0.5), 0.1, gold)),
            Primitive::Sphere(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, blue)),
            Primitive::Plane(Plane {
                point: Vec3::new(0.0, -0.5, 0.0),
                normal: Vec3::Y,
                material: floor,
            }),
        ];

        World {
            primitives,
            light: Light::white(Vec3::new(0.0, 5.0, 3.0)),
            camera: ScreenCamera::new(Vec3::Z, None),
        }
    }
}
