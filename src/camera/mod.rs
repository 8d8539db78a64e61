mod screen_camera;

pub use screen_camera::{Screen, ScreenCamera};
