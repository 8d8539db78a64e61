use crate::math::{RGBColor, INFINITY};
use crate::renderer::Film;

use super::Tonemapper;

#[derive(Clone, Debug)]
pub struct Clamp {
    exposure: f32,
    silenced: bool,
}

impl Clamp {
    pub fn new(exposure: f32, silenced: bool) -> Self {
        Self { exposure, silenced }
    }
}

impl Tonemapper for Clamp {
    fn initialize(&mut self, film: &Film) {
        let mut max_luminance = 0.0;
        let mut min_luminance = INFINITY;
        let mut max_lum_xy = (0, 0);
        let mut min_lum_xy = (0, 0);
        let mut non_finite = 0;

        for y in 0..film.height {
            for x in 0..film.width {
                let color = film.at(x, y);
                if !color.is_finite() {
                    non_finite += 1;
                    continue;
                }
                let lum = color.luminance();
                if lum > max_luminance {
                    max_luminance = lum;
                    max_lum_xy = (x, y);
                }
                if lum < min_luminance {
                    min_luminance = lum;
                    min_lum_xy = (x, y);
                }
            }
        }

        if self.silenced {
            return;
        }
        if non_finite > 0 {
            warn!(
                "{} pixels are not finite and will be written as mauve",
                non_finite
            );
        }
        info!(
            "max luminance occurred at {}, {}, is {}",
            max_lum_xy.0, max_lum_xy.1, max_luminance
        );
        info!(
            "min luminance occurred at {}, {}, is {}",
            min_lum_xy.0, min_lum_xy.1, min_luminance
        );
    }
    fn map(&self, film: &Film, pixel: (usize, usize)) -> RGBColor {
        let color = film.at(pixel.0, pixel.1);
        if !color.is_finite() {
            return RGBColor::MAUVE;
        }
        (color * 10.0f32.powf(self.exposure)).clamp(0.0, 1.0)
    }
}
