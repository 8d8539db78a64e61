use crate::math::*;

mod point_light;

pub use point_light::Light;

/// Phong coefficients for a surface.
///
/// `reflection` doubles as a capability flag: `None` skips the mirror bounce entirely,
/// while `Some(0.0)` still traces it and scales the result to nothing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub ambient: RGBColor,
    pub diffuse: RGBColor,
    pub specular: RGBColor,
    pub shininess: f32,
    pub reflection: Option<f32>,
}

impl Material {
    pub fn new(ambient: RGBColor, diffuse: RGBColor, specular: RGBColor, shininess: f32) -> Material {
        Material {
            ambient,
            diffuse,
            specular,
            shininess,
            reflection: None,
        }
    }

    pub fn with_reflection(mut self, reflection: f32) -> Self {
        self.reflection = Some(reflection);
        self
    }

    /// No local response at all, only the mirror bounce.
    pub fn mirror() -> Material {
        Material::default().with_reflection(1.0)
    }

    pub fn is_reflective(&self) -> bool {
        self.reflection.is_some()
    }

    /// Name of the first color coefficient holding a NaN or infinity.
    pub fn non_finite_field(&self) -> Option<&'static str> {
        [
            ("ambient", self.ambient),
            ("diffuse", self.diffuse),
            ("specular", self.specular),
        ]
        .into_iter()
        .find(|(_, color)| !color.is_finite())
        .map(|(field, _)| field)
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::new(RGBColor::BLACK, RGBColor::BLACK, RGBColor::BLACK, 1.0)
    }
}
