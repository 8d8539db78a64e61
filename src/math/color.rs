use serde::{Deserialize, Serialize};

use std::ops::{Add, AddAssign, Mul};

/// Linear RGB triple. Values are unbounded until the film is tonemapped.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct RGBColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RGBColor {
    pub const fn new(r: f32, g: f32, b: f32) -> RGBColor {
        RGBColor { r, g, b }
    }
    pub const BLACK: RGBColor = RGBColor::new(0.0, 0.0, 0.0);
    pub const WHITE: RGBColor = RGBColor::new(1.0, 1.0, 1.0);
    // mauve. universal sign of danger
    pub const MAUVE: RGBColor = RGBColor::new(0.878, 0.690, 1.0);

    pub fn clamp(&self, min: f32, max: f32) -> RGBColor {
        RGBColor::new(
            self.r.clamp(min, max),
            self.g.clamp(min, max),
            self.b.clamp(min, max),
        )
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    pub fn luminance(&self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }
}

// component-wise
impl Mul for RGBColor {
    type Output = Self;
    fn mul(self, other: RGBColor) -> Self {
        RGBColor::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

impl Mul<f32> for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: f32) -> RGBColor {
        RGBColor::new(self.r * other, self.g * other, self.b * other)
    }
}

impl Mul<RGBColor> for f32 {
    type Output = RGBColor;
    fn mul(self, other: RGBColor) -> RGBColor {
        other * self
    }
}

impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for RGBColor {
    fn add_assign(&mut self, other: RGBColor) {
        *self = *self + other;
    }
}

impl From<f32> for RGBColor {
    fn from(s: f32) -> RGBColor {
        RGBColor::new(s, s, s)
    }
}

impl From<[f32; 3]> for RGBColor {
    fn from(other: [f32; 3]) -> RGBColor {
        RGBColor::new(other[0], other[1], other[2])
    }
}

impl From<RGBColor> for [f32; 3] {
    fn from(c: RGBColor) -> [f32; 3] {
        [c.r, c.g, c.b]
    }
}
