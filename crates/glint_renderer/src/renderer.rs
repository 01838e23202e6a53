//! Whitted-style ray tracer.
//!
//! Implements:
//! - Nearest-hit queries by linear scan over the scene
//! - Hard shadows from point lights
//! - Diffuse + specular direct lighting
//! - Mirror reflections with a fixed recursion cap

use crate::{Hittable, Intersection, Light, Scene, SurfaceProperties};
use glint_core::ImageBuffer;
use glint_math::color::{self, DEFAULT_COLOR, GREY};
use glint_math::{Color, Ray, Vec3, VectorExt};

/// Maximum number of reflection bounces before falling back to flat grey.
pub const MAX_DEPTH: u32 = 5;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Reflection depth at which tracing stops and grey is used instead
    pub max_depth: u32,
    /// Color of rays that hit nothing, also the base of every shaded color
    pub background: Color,
    /// Edge length of the tiles used by the parallel renderer
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            background: color::BACKGROUND,
            bucket_size: crate::DEFAULT_BUCKET_SIZE,
        }
    }
}

/// Find the closest object hit by `ray`.
///
/// Only strictly closer hits replace the current best, so of two objects at
/// the same distance the one listed first wins.
pub fn intersect_scene<'a>(ray: &Ray, scene: &'a Scene) -> Option<Intersection<'a>> {
    let mut closest = f32::INFINITY;
    let mut closest_intersection = None;

    for thing in &scene.things {
        if let Some(isect) = thing.intersect(ray) {
            if isect.dist < closest {
                closest = isect.dist;
                closest_intersection = Some(isect);
            }
        }
    }

    closest_intersection
}

/// Distance to the closest object along `ray`.
pub fn test_ray(ray: &Ray, scene: &Scene) -> Option<f32> {
    intersect_scene(ray, scene).map(|isect| isect.dist)
}

/// Whether something sits between `pos` and `light`.
///
/// A hit exactly at the light's distance still counts as blocking.
pub fn is_in_shadow(pos: Vec3, light: &Light, scene: &Scene) -> bool {
    let ldis = light.position - pos;
    blocked(pos, ldis.norm(), ldis.mag(), scene)
}

#[inline]
fn blocked(pos: Vec3, livec: Vec3, light_dist: f32, scene: &Scene) -> bool {
    match test_ray(&Ray::new(pos, livec), scene) {
        Some(dist) => dist <= light_dist,
        None => false,
    }
}

/// Direct lighting at `pos` from every light that isn't shadowed.
///
/// `rd` is the mirror reflection of the incoming ray; the result is unclamped.
pub fn natural_color(
    props: &SurfaceProperties,
    pos: Vec3,
    normal: Vec3,
    rd: Vec3,
    scene: &Scene,
) -> Color {
    let rd_norm = rd.norm();

    scene.lights.iter().fold(DEFAULT_COLOR, |color, light| {
        let ldis = light.position - pos;
        let livec = ldis.norm();

        if blocked(pos, livec, ldis.mag(), scene) {
            return color;
        }

        let illum = livec.dot(normal);
        let lcolor = if illum > 0.0 {
            light.color * illum
        } else {
            DEFAULT_COLOR
        };

        let specular = livec.dot(rd_norm);
        let scolor = if specular > 0.0 {
            light.color * specular.powf(props.roughness)
        } else {
            DEFAULT_COLOR
        };

        color + lcolor * props.diffuse + scolor * props.specular
    })
}

/// Light arriving along the mirror direction, scaled by the surface reflectivity.
pub fn reflection_color(
    props: &SurfaceProperties,
    pos: Vec3,
    rd: Vec3,
    scene: &Scene,
    depth: u32,
    config: &RenderConfig,
) -> Color {
    trace_ray(&Ray::new(pos, rd), scene, depth + 1, config) * props.reflect
}

/// Shade a hit: background, plus direct light, plus reflection.
pub fn shade(isect: &Intersection<'_>, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    let d = isect.ray.direction();
    let pos = isect.position();
    let normal = isect.thing.normal(pos);
    let reflect_dir = d - normal * normal.dot(d) * 2.0;
    let props = isect.thing.surface().properties(pos);

    let natural = config.background + natural_color(&props, pos, normal, reflect_dir, scene);
    let reflected = if depth >= config.max_depth {
        GREY
    } else {
        reflection_color(&props, pos, reflect_dir, scene, depth, config)
    };

    natural + reflected
}

/// Compute the color seen along `ray`.
///
/// `depth` counts the reflections already followed; primary rays start at 0.
pub fn trace_ray(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    match intersect_scene(ray, scene) {
        Some(isect) => shade(&isect, scene, depth, config),
        None => config.background,
    }
}

/// Render a single pixel of a `width` x `height` image to RGBA8.
pub fn render_pixel(
    scene: &Scene,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> [u8; 4] {
    let ray = scene.camera.get_ray(x, y, width, height);
    color::to_rgba(trace_ray(&ray, scene, 0, config))
}

/// Render the entire scene on the calling thread.
pub fn render(scene: &Scene, width: u32, height: u32, config: &RenderConfig) -> ImageBuffer {
    log::debug!(
        "Rendering {}x{} ({} objects, {} lights, max depth {})",
        width,
        height,
        scene.thing_count(),
        scene.light_count(),
        config.max_depth
    );

    let mut image = ImageBuffer::new(width, height);

    for y in 0..height {
        for x in 0..width {
            image.set(x, y, render_pixel(scene, x, y, width, height, config));
        }
    }

    image
}
