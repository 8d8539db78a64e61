mod color;
mod ray;
mod vec;

pub use color::RGBColor;
pub use ray::Ray;
pub use std::f32::INFINITY;
pub use vec::{DegenerateVectorError, Vec3};
