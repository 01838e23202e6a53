//! Scene description consumed by the tracer.
//!
//! A scene is built once and only read while rendering, so a single
//! `&Scene` can be shared by every pixel (and every worker thread).

use crate::Thing;
use glint_math::{Camera, Color, Vec3};

/// Point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    /// Light intensity per channel, not limited to [0, 1]
    pub color: Color,
}

impl Light {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }
}

/// Objects, lights and the camera to render from.
///
/// Object order doesn't change which surface is nearest, but it decides ties.
#[derive(Debug, Clone)]
pub struct Scene {
    pub things: Vec<Thing>,
    pub lights: Vec<Light>,
    pub camera: Camera,
}

impl Scene {
    pub fn new(things: Vec<Thing>, lights: Vec<Light>, camera: Camera) -> Self {
        Self {
            things,
            lights,
            camera,
        }
    }

    /// Number of objects in the scene.
    pub fn thing_count(&self) -> usize {
        self.things.len()
    }

    /// Number of lights in the scene.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Surface;

    #[test]
    fn test_scene_creation() {
        let scene = Scene::new(
            vec![
                Thing::plane(Vec3::Y, 0.0, Surface::Checkerboard),
                Thing::sphere(Vec3::ZERO, 1.0, Surface::Shiny),
            ],
            vec![Light::new(Vec3::new(0.0, 3.0, 0.0), Color::ONE)],
            Camera::new(Vec3::new(0.0, 1.0, 5.0), Vec3::ZERO),
        );

        assert_eq!(scene.thing_count(), 2);
        assert_eq!(scene.light_count(), 1);
        assert!(matches!(scene.things[0], Thing::Plane(_)));
        assert!(matches!(scene.things[1], Thing::Sphere(_)));
    }
}
