use crate::integrator::{ShadingPolicy, TraceSettings, DEFAULT_MAX_DEPTH};
use crate::parsing::tonemap::TonemapSettings;

use anyhow::Context;
use serde::Deserialize;

use std::fs::File;
use std::io::Read;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Resolution {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub filename: Option<String>,
    pub resolution: Resolution,
    pub max_depth: Option<u16>,
    pub threads: Option<u16>,
    pub shading: Option<ShadingPolicy>,
    #[serde(default)]
    pub tonemap_settings: TonemapSettings,
    // also write the unclamped film
    pub write_exr: Option<bool>,
}

impl RenderSettings {
    pub fn trace_settings(&self) -> TraceSettings {
        TraceSettings {
            max_depth: self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
            policy: self.shading.unwrap_or_default(),
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum RendererType {
    Naive,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    pub default_scene_file: String,
    pub output_directory: Option<String>,
    pub renderer: RendererType,
    pub render_settings: Vec<RenderSettings>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub scene_file: String,
    pub output_directory: String,
    pub renderer: RendererType,
    pub render_settings: Vec<RenderSettings>,
}

impl From<TOMLConfig> for Config {
    fn from(data: TOMLConfig) -> Self {
        Config {
            scene_file: data.default_scene_file,
            output_directory: data
                .output_directory
                .unwrap_or_else(|| String::from("output")),
            renderer: data.renderer,
            render_settings: data.render_settings,
        }
    }
}

impl Config {
    /// Widest thread count requested by any render, used to size the global pool.
    pub fn max_threads(&self) -> usize {
        self.render_settings
            .iter()
            .map(|s| s.threads.unwrap_or(1) as usize)
            .fold(1, usize::max)
    }
}

pub fn parse_settings(input: &str) -> anyhow::Result<TOMLConfig> {
    let num_cpus = num_cpus::get();
    let mut settings: TOMLConfig = toml::from_str(input)?;
    for render_settings in settings.render_settings.iter_mut() {
        render_settings.threads = match render_settings.threads {
            Some(expr) => Some(expr),
            None => Some(num_cpus as u16),
        };
    }
    Ok(settings)
}

pub fn get_settings(filepath: String) -> anyhow::Result<TOMLConfig> {
    let mut input = String::new();
    File::open(&filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("couldn't read config file {}", filepath))?;
    parse_settings(&input).with_context(|| format!("couldn't parse config file {}", filepath))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsing_config() {
        let settings = get_settings("data/config.toml".to_string()).unwrap();
        assert!(!settings.render_settings.is_empty());
        for config in &settings.render_settings {
            assert!(config.filename.is_some());
            assert!(config.threads.unwrap() > 0)
        }
    }

    #[test]
    fn test_defaults() {
        let input = r#"
            default_scene_file = "data/scenes/showcase.toml"
            renderer = { type = "Naive" }

            [[render_settings]]
            resolution = { width = 60, height = 40 }
        "#;
        let config = Config::from(parse_settings(input).unwrap());
        assert_eq!(config.output_directory, "output");
        assert_eq!(config.renderer, RendererType::Naive);
        let render = &config.render_settings[0];
        assert_eq!(render.trace_settings(), TraceSettings::default());
        assert_eq!(render.tonemap_settings, TonemapSettings::default());
        assert!(render.threads.unwrap() > 0);
        assert_eq!(render.resolution.aspect_ratio(), 1.5);
    }

    #[test]
    fn test_overrides() {
        let input = r#"
            default_scene_file = "data/scenes/showcase.toml"
            output_directory = "renders"
            renderer = { type = "Naive" }

            [[render_settings]]
            filename = "deep"
            resolution = { width = 10, height = 10 }
            max_depth = 8
            threads = 3
            shading = "Clamped"
            tonemap_settings = { type = "Clamp", exposure = 0.5, srgb = true }

            [[render_settings]]
            resolution = { width = 10, height = 10 }
            threads = 5
        "#;
        let config = Config::from(parse_settings(input).unwrap());
        assert_eq!(config.output_directory, "renders");
        assert_eq!(
            config.render_settings[0].trace_settings(),
            TraceSettings {
                max_depth: 8,
                policy: ShadingPolicy::Clamped
            }
        );
        assert_eq!(config.max_threads(), 5);
    }
}
