//! Sphere primitive for ray tracing.

use crate::{Hittable, Surface};
use glint_math::{Ray, Vec3, VectorExt};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius2: f32,
    surface: Surface,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, surface: Surface) -> Self {
        Self {
            center,
            radius2: radius * radius,
            surface,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Squared radius.
    pub fn radius2(&self) -> f32 {
        self.radius2
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray) -> Option<f32> {
        let eo = self.center - ray.origin();
        let v = eo.dot(ray.direction());

        // Sphere is behind the ray origin
        if v < 0.0 {
            return None;
        }

        let disc = self.radius2 - (eo.dot(eo) - v * v);
        if disc < 0.0 {
            return None;
        }

        // Near root only; a ray starting inside the sphere never sees the far side.
        let dist = v - disc.sqrt();
        if dist == 0.0 {
            return None;
        }
        Some(dist)
    }

    fn normal(&self, pos: Vec3) -> Vec3 {
        (pos - self.center).norm()
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }
}
