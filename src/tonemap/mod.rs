use crate::math::RGBColor;
use crate::renderer::Film;

use anyhow::Context;

use std::time::Instant;

mod clamp;

pub use clamp::Clamp;

pub trait Tonemapper: Send + Sync {
    fn initialize(&mut self, film: &Film);
    // should tonemap a pixel from hdr to ldr
    fn map(&self, film: &Film, pixel: (usize, usize)) -> RGBColor;
}

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Converter {
    Linear,
    sRGB,
}

impl Converter {
    pub fn transfer_function(&self, color: RGBColor) -> RGBColor {
        match self {
            Converter::Linear => color,
            Converter::sRGB => {
                let encode = |c: f32| {
                    if c <= 0.0031308 {
                        c * 323.0 / 25.0
                    } else {
                        (211.0 * c.powf(5.0 / 12.0) - 11.0) / 200.0
                    }
                };
                RGBColor::new(encode(color.r), encode(color.g), encode(color.b))
            }
        }
    }

    pub fn write_to_files(
        &self,
        film: &Film,
        tonemapper: &dyn Tonemapper,
        exr_filename: Option<&str>,
        png_filename: &str,
    ) -> anyhow::Result<()> {
        let now = Instant::now();

        if let Some(exr_filename) = exr_filename {
            info!("saving exr image to {}", exr_filename);
            exr::prelude::write_rgb_file(exr_filename, film.width, film.height, |x, y| {
                let color = film.at(x, y);
                (color.r, color.g, color.b)
            })
            .with_context(|| format!("failed to write {}", exr_filename))?;
        }

        let mut img: image::RgbImage =
            image::ImageBuffer::new(film.width as u32, film.height as u32);

        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let color = self.transfer_function(tonemapper.map(film, (x as usize, y as usize)));
            *pixel = image::Rgb([
                (color.r * 255.0) as u8,
                (color.g * 255.0) as u8,
                (color.b * 255.0) as u8,
            ]);
        }
        info!("saving image to {}", png_filename);
        img.save(png_filename)
            .with_context(|| format!("failed to write {}", png_filename))?;

        info!(
            "took {}s to tonemap and output",
            (now.elapsed().as_millis() as f32) / 1000.0
        );
        Ok(())
    }
}
