mod shading;
mod whitted;

pub use shading::{local_illumination, ShadingPolicy};
pub use whitted::{radiance, trace, TraceSettings, WhittedIntegrator, DEFAULT_MAX_DEPTH};
