use serde::Deserialize;

use crate::tonemap::{Clamp, Converter, Tonemapper};

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum TonemapSettings {
    // clamp all colors to 0 to 1, multiplying by 10^exposure beforehand (exposure defaults to 0, not changing anything)
    Clamp {
        exposure: Option<f32>,
        #[serde(default)]
        silenced: bool,
        // gamma-encode the png. off by default, leaving the clamped linear values as they are
        #[serde(default)]
        srgb: bool,
    },
}

impl Default for TonemapSettings {
    fn default() -> Self {
        TonemapSettings::Clamp {
            exposure: None,
            silenced: false,
            srgb: false,
        }
    }
}

pub fn parse_tonemapper(settings: TonemapSettings) -> (Box<dyn Tonemapper>, Converter) {
    match settings {
        TonemapSettings::Clamp {
            exposure,
            silenced,
            srgb,
        } => {
            let tonemapper: Box<dyn Tonemapper> =
                Box::new(Clamp::new(exposure.unwrap_or(0.0), silenced));
            let converter = if srgb {
                Converter::sRGB
            } else {
                Converter::Linear
            };
            (tonemapper, converter)
        }
    }
}
