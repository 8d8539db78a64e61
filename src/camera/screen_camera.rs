use crate::math::*;

/// Screen rectangle in the `z = 0` plane, given as the x range left to right and the
/// y range top to bottom.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Screen {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Screen {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Screen {
        Screen {
            left,
            top,
            right,
            bottom,
        }
    }

    /// x spans [-1, 1], y is squashed to keep square pixels.
    pub fn from_aspect_ratio(aspect_ratio: f32) -> Screen {
        Screen::new(-1.0, 1.0 / aspect_ratio, 1.0, -1.0 / aspect_ratio)
    }
}

impl From<[f32; 4]> for Screen {
    fn from(v: [f32; 4]) -> Screen {
        Screen::new(v[0], v[1], v[2], v[3])
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScreenCamera {
    pub origin: Vec3,
    pub screen: Option<Screen>,
}

impl ScreenCamera {
    pub fn new(origin: Vec3, screen: Option<Screen>) -> ScreenCamera {
        ScreenCamera { origin, screen }
    }

    /// Fills in the screen from the aspect ratio, unless one was given explicitly.
    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        if self.screen.is_none() {
            info!("deriving camera screen from aspect ratio {}", aspect_ratio);
            self.screen = Some(Screen::from_aspect_ratio(aspect_ratio));
        }
        self
    }

    /// `s` and `t` run from 0 to 1 across the screen, both ends inclusive.
    pub fn get_ray(&self, s: f32, t: f32) -> Ray {
        let screen = self.screen.unwrap_or_else(|| Screen::from_aspect_ratio(1.0));
        let pixel = Vec3::new(
            screen.left + (screen.right - screen.left) * s,
            screen.top + (screen.bottom - screen.top) * t,
            0.0,
        );
        Ray::new(self.origin, (pixel - self.origin).normalized())
    }

    /// Camera ray through pixel `(x, y)`, with the first and last rows and columns landing
    /// exactly on the screen edges.
    pub fn get_pixel_ray(&self, x: usize, y: usize, width: usize, height: usize) -> Ray {
        self.get_ray(linspace_fraction(x, width), linspace_fraction(y, height))
    }
}

fn linspace_fraction(index: usize, count: usize) -> f32 {
    if count <= 1 {
        0.0
    } else {
        index as f32 / (count - 1) as f32
    }
}
