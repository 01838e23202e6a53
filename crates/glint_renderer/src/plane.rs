//! Infinite plane primitive.

use crate::{Hittable, Surface};
use glint_math::{Ray, Vec3};

/// Plane `dot(normal, p) + offset = 0`. Only rays travelling against the normal hit it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vec3,
    offset: f32,
    surface: Surface,
}

impl Plane {
    /// Create a new plane. `normal` is expected to be unit length.
    pub fn new(normal: Vec3, offset: f32, surface: Surface) -> Self {
        Self {
            normal,
            offset,
            surface,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.direction());
        if denom > 0.0 {
            return None;
        }
        Some((self.normal.dot(ray.origin()) + self.offset) / -denom)
    }

    fn normal(&self, _pos: Vec3) -> Vec3 {
        self.normal
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }
}
