pub use rayon::prelude::*;

pub use crate::camera::{Screen, ScreenCamera};
pub use crate::geometry::{intersect_plane, intersect_sphere, Plane, Primitive, Sphere};
pub use crate::hittable::Hittable;
pub use crate::integrator::{trace, ShadingPolicy, TraceSettings, WhittedIntegrator};
pub use crate::materials::{Light, Material};
pub use crate::math::*;
pub use crate::profile::Profile;
pub use crate::renderer::{Film, Renderer};
pub use crate::tonemap::Tonemapper;
pub use crate::world::{SceneError, World, NORMAL_OFFSET};
