//! Built-in scenes.

use crate::{Light, Scene, Surface, Thing};
use glint_math::{Camera, Color, Vec3};

/// Checkerboard floor with two shiny spheres under four colored lights.
pub fn reference_scene() -> Scene {
    Scene::new(
        vec![
            Thing::plane(Vec3::new(0.0, 1.0, 0.0), 0.0, Surface::Checkerboard),
            Thing::sphere(Vec3::new(0.0, 1.0, -0.25), 1.0, Surface::Shiny),
            Thing::sphere(Vec3::new(-1.0, 0.5, 1.5), 0.5, Surface::Shiny),
        ],
        vec![
            Light::new(Vec3::new(-2.0, 2.5, 0.0), Color::new(0.49, 0.07, 0.07)),
            Light::new(Vec3::new(1.5, 2.5, 1.5), Color::new(0.07, 0.07, 0.49)),
            Light::new(Vec3::new(1.5, 2.5, -1.5), Color::new(0.07, 0.49, 0.071)),
            Light::new(Vec3::new(0.0, 3.5, 0.0), Color::new(0.21, 0.21, 0.35)),
        ],
        Camera::new(Vec3::new(3.0, 2.0, 4.0), Vec3::new(-1.0, 0.5, 0.0)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scene_contents() {
        let scene = reference_scene();
        assert_eq!(scene.thing_count(), 3);
        assert_eq!(scene.light_count(), 4);
        assert_eq!(scene.camera.position, Vec3::new(3.0, 2.0, 4.0));
        assert!(matches!(scene.things[0], Thing::Plane(_)));
    }
}
