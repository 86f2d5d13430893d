//! Render drivers.
//!
//! Every pixel is traced independently against the read-only scene, so the
//! sequential and bucket-parallel drivers produce identical images.

use std::time::Instant;

use rayon::prelude::*;

use crate::{
    generate_buckets, render_bucket, trace, BucketResult, Camera, Color, Framebuffer, PixelSink,
    Result, Scene, TracerConfig, TracerError, DEFAULT_BUCKET_SIZE,
};

/// Trace the camera ray through the center of pixel (x, y).
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    config: &TracerConfig,
    x: u32,
    y: u32,
) -> Color {
    let ray = camera.get_ray(x as f64, y as f64);
    trace(&ray, scene, config, config.max_depth)
}

/// Render every camera pixel into `sink`, one pixel at a time.
///
/// Fails if the camera image is larger than the sink.
pub fn render(
    camera: &Camera,
    scene: &Scene,
    config: &TracerConfig,
    sink: &mut dyn PixelSink,
) -> Result<()> {
    log_start(camera, scene, config);
    let start = Instant::now();

    for y in 0..camera.image_height() {
        for x in 0..camera.image_width() {
            let color = render_pixel(camera, scene, config, x, y);
            sink.set_pixel(x, y, color)?;
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(())
}

/// Render every camera pixel into `sink`, buckets spread across the rayon pool.
///
/// Workers only read the scene; results are written to the sink after all
/// buckets finish.
pub fn render_parallel(
    camera: &Camera,
    scene: &Scene,
    config: &TracerConfig,
    sink: &mut dyn PixelSink,
) -> Result<()> {
    log_start(camera, scene, config);
    let start = Instant::now();

    let buckets = generate_buckets(
        camera.image_width(),
        camera.image_height(),
        DEFAULT_BUCKET_SIZE,
    );
    log::debug!(
        "Rendering {} buckets on {} threads",
        buckets.len(),
        rayon::current_num_threads()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, camera, scene, config))
        .collect();

    for result in &results {
        for (x, y, color) in result.iter_pixels() {
            sink.set_pixel(x, y, color)?;
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(())
}

/// Image height for a width and aspect ratio (width / height), at least 1.
pub fn image_height(image_width: u32, aspect_ratio: f64) -> Result<u32> {
    if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
        return Err(TracerError::InvalidAspectRatio(aspect_ratio));
    }
    let height = (image_width as f64 / aspect_ratio) as u32;
    Ok(height.max(1))
}

/// Render `scene` into a new framebuffer.
///
/// The height is derived from `image_width` and `aspect_ratio`; the camera
/// sits at the origin looking down -Z.
pub fn render_image(
    image_width: u32,
    aspect_ratio: f64,
    scene: &Scene,
    config: &TracerConfig,
) -> Result<Framebuffer> {
    let image_height = image_height(image_width, aspect_ratio)?;
    let mut image = Framebuffer::new(image_width, image_height)?;
    let camera = Camera::new(image_width, image_height);

    render_parallel(&camera, scene, config, &mut image)?;
    Ok(image)
}

fn log_start(camera: &Camera, scene: &Scene, config: &TracerConfig) {
    log::info!(
        "Rendering {}x{}, {} shapes, max depth {}",
        camera.image_width(),
        camera.image_height(),
        scene.len(),
        config.max_depth
    );
    if config.max_depth == 0 {
        log::warn!("max_depth is 0, every pixel will be background");
    }
}
