use anyhow::{Context, Result};
use glint_core::save_bmp;
use glint_renderer::{reference_scene, render_parallel, RenderConfig};
use std::time::Instant;

const WIDTH: u32 = 500;
const HEIGHT: u32 = 500;
const OUTPUT: &str = "glint.bmp";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RenderConfig::default();

    log::info!("Rendering {}x{} to {}", WIDTH, HEIGHT, OUTPUT);
    let start = Instant::now();

    let scene = reference_scene();
    log::info!(
        "Scene has {} objects and {} lights",
        scene.thing_count(),
        scene.light_count()
    );
    let image = render_parallel(&scene, WIDTH, HEIGHT, &config);

    println!("Completed in {} ms", start.elapsed().as_millis());

    save_bmp(&image, OUTPUT).with_context(|| format!("Failed to write {}", OUTPUT))?;

    Ok(())
}
