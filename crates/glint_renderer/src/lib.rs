//! glint renderer - Whitted-style CPU ray tracing.
//!
//! Traces one ray per pixel through a scene of spheres and planes, adding
//! diffuse and specular light from point lights, hard shadows, and mirror
//! reflections up to a fixed depth.

mod bucket;
mod hittable;
mod material;
mod plane;
mod renderer;
mod scene;
mod sphere;

pub mod scenes;

pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use hittable::{Hittable, Intersection, Thing};
pub use material::{Surface, SurfaceProperties};
pub use plane::Plane;
pub use renderer::{
    intersect_scene, is_in_shadow, natural_color, reflection_color, render, render_pixel, shade,
    test_ray, trace_ray, RenderConfig, MAX_DEPTH,
};
pub use scene::{Light, Scene};
pub use scenes::reference_scene;
pub use sphere::Sphere;

/// Re-export common math types from glint_math
pub use glint_math::{Camera, Color, Ray, Vec3};
