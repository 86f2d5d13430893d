//! `lumen` - render the reference room and save it.
//!
//! Usage: `lumen [settings.json]`

mod export;
mod settings;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use lumen_tracer::{image_height, render, render_parallel, Camera, Framebuffer, Scene};

use settings::RenderSettings;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting Lumen");

    let settings = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            log::info!("Loading settings from {}", path.display());
            RenderSettings::load(&path)?
        }
        None => RenderSettings::default(),
    };

    let start = Instant::now();
    let scene = Scene::room(&settings.room).context("Invalid room layout")?;
    log::info!("Scene built in {:?}", start.elapsed());

    let height = image_height(settings.image_width, settings.aspect_ratio)?;
    let mut image = Framebuffer::new(settings.image_width, height)?;
    let camera = Camera::new(settings.image_width, height);

    if settings.parallel {
        render_parallel(&camera, &scene, &settings.tracer, &mut image)?;
    } else {
        render(&camera, &scene, &settings.tracer, &mut image)?;
    }

    export::save(&image, &settings.output)?;
    Ok(())
}
