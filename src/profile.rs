#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub camera_rays: usize, // primary rays, one per pixel
    pub shadow_rays: usize, // rays used to test visibility of the light
    pub bounce_rays: usize, // mirror reflection rays
}

impl Profile {
    pub fn new(camera_rays: usize, shadow_rays: usize, bounce_rays: usize) -> Self {
        Profile {
            camera_rays,
            shadow_rays,
            bounce_rays,
        }
    }
    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.camera_rays + other.camera_rays,
            self.shadow_rays + other.shadow_rays,
            self.bounce_rays + other.bounce_rays,
        )
    }

    pub fn total_rays(&self) -> usize {
        self.camera_rays + self.shadow_rays + self.bounce_rays
    }

    pub fn pretty_print(&self, elapsed: f32, threads: usize) {
        let &Profile {
            camera_rays,
            shadow_rays,
            bounce_rays,
        } = self;
        for (name, count) in [
            ("camera", camera_rays),
            ("shadow", shadow_rays),
            ("bounce", bounce_rays),
            ("", self.total_rays()),
        ] {
            info!(
                "{} total {}rays at {} per second and {} per second per thread",
                count,
                if name.is_empty() {
                    String::new()
                } else {
                    format!("{} ", name)
                },
                count as f32 / elapsed,
                count as f32 / elapsed / (threads as f32)
            );
        }
    }
}
