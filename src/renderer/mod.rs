mod naive;
mod vec2d;

pub use naive::NaiveRenderer;
pub use vec2d::Vec2D;

use crate::math::RGBColor;
use crate::parsing::config::{Config, RenderSettings, RendererType};
use crate::parsing::parse_tonemapper;
use crate::world::World;

use anyhow::Context;

use std::path::Path;

/// Unclamped per-pixel results, row-major from the top-left corner.
pub type Film = Vec2D<RGBColor>;

pub fn output_film(render_settings: &RenderSettings, film: &Film, output_directory: &str) -> anyhow::Result<()> {
    let filename = render_settings.filename.as_ref();
    let filename_str = filename.cloned().unwrap_or_else(|| String::from("beauty"));

    std::fs::create_dir_all(output_directory)
        .with_context(|| format!("failed to create output directory {}", output_directory))?;
    let directory = Path::new(output_directory);
    let exr_filename = directory.join(format!("{}.exr", filename_str));
    let png_filename = directory.join(format!("{}.png", filename_str));

    let (mut tonemapper, converter) = parse_tonemapper(render_settings.tonemap_settings);
    tonemapper.initialize(film);

    let write_exr = render_settings.write_exr.unwrap_or(false);
    converter.write_to_files(
        film,
        tonemapper.as_ref(),
        write_exr.then(|| exr_filename.to_string_lossy()).as_deref(),
        &png_filename.to_string_lossy(),
    )
}

pub trait Renderer {
    fn render(&self, world: World, config: &Config) -> anyhow::Result<()>;
}

pub fn construct_renderer(config: &Config) -> Box<dyn Renderer> {
    match config.renderer {
        RendererType::Naive => Box::new(NaiveRenderer::new()),
    }
}
