use super::output_film;

use crate::parsing::config::{Config, RenderSettings};
use crate::prelude::*;

#[cfg(feature = "progress")]
use pbr::ProgressBar;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }

    /// One camera ray per pixel, pixels traced in parallel on the global rayon pool.
    pub fn render_film(
        integrator: &WhittedIntegrator,
        settings: &RenderSettings,
        camera: &ScreenCamera,
    ) -> (Film, Profile) {
        let (width, height) = (settings.resolution.width, settings.resolution.height);
        info!("starting render with film resolution {}x{}", width, height);
        info!(
            "max depth {}, shading {:?}",
            integrator.settings.max_depth, integrator.settings.policy
        );

        let mut film: Film = Film::new(width, height, RGBColor::BLACK);
        let total_pixels = film.total_pixels();

        let pixel_count = Arc::new(AtomicUsize::new(0));
        let clone1 = pixel_count.clone();
        let thread = thread::spawn(move || {
            #[cfg(feature = "progress")]
            let mut pb = ProgressBar::new(total_pixels as u64);
            let mut local_index = 0;
            while local_index < total_pixels {
                let pixels_to_increment = clone1.load(Ordering::Relaxed) - local_index;
                #[cfg(feature = "progress")]
                pb.add(pixels_to_increment as u64);
                local_index += pixels_to_increment;

                thread::sleep(Duration::from_millis(250));
            }
        });

        let clone2 = pixel_count.clone();
        let stats: Profile = film
            .buffer
            .par_iter_mut()
            .enumerate()
            .map(|(pixel_index, pixel_ref)| {
                let mut profile = Profile::default();
                let y: usize = pixel_index / width;
                let x: usize = pixel_index - width * y;

                let ray = camera.get_pixel_ray(x, y, width, height);
                profile.camera_rays += 1;
                *pixel_ref = integrator.color(ray, 0, &mut profile);

                clone2.fetch_add(1, Ordering::Relaxed);
                profile
            })
            .reduce(Profile::default, |a, b| a.combine(b));

        if let Err(panic) = thread.join() {
            error!(
                "progress bar incrementing thread threw an error {:?}",
                panic
            );
        }
        (film, stats)
    }
}

impl Default for NaiveRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for NaiveRenderer {
    fn render(&self, world: World, config: &Config) -> anyhow::Result<()> {
        let world = Arc::new(world);
        for settings in config.render_settings.iter() {
            let camera = world
                .camera
                .with_aspect_ratio(settings.resolution.aspect_ratio());
            let integrator = WhittedIntegrator::new(Arc::clone(&world), settings.trace_settings());

            let now = Instant::now();
            let (film, stats) = NaiveRenderer::render_film(&integrator, settings, &camera);
            let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
            info!("took {}s", elapsed);
            stats.pretty_print(elapsed, settings.threads.unwrap_or(1) as usize);

            output_film(settings, &film, &config.output_directory)?;
        }
        Ok(())
    }
}
