use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub ambient: RGBColor,
    pub diffuse: RGBColor,
    pub specular: RGBColor,
}

impl Light {
    pub fn new(position: Vec3, ambient: RGBColor, diffuse: RGBColor, specular: RGBColor) -> Light {
        Light {
            position,
            ambient,
            diffuse,
            specular,
        }
    }

    /// Same intensity for all three terms.
    pub fn white(position: Vec3) -> Light {
        Light::new(position, RGBColor::WHITE, RGBColor::WHITE, RGBColor::WHITE)
    }

    pub fn non_finite_field(&self) -> Option<&'static str> {
        if !self.position.is_finite() {
            return Some("position");
        }
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
