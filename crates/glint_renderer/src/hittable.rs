//! Renderable objects and ray-object intersection.

use crate::{Plane, Sphere, Surface};
use glint_math::{Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    /// Object that was hit
    pub thing: &'a Thing,
    /// Ray that produced the hit
    pub ray: Ray,
    /// Distance along the ray to the hit
    pub dist: f32,
}

impl<'a> Intersection<'a> {
    pub fn new(thing: &'a Thing, ray: Ray, dist: f32) -> Self {
        Self { thing, ray, dist }
    }

    /// World position of the hit.
    pub fn position(&self) -> Vec3 {
        self.ray.at(self.dist)
    }
}

/// Geometry that can be hit by rays.
pub trait Hittable {
    /// Distance along `ray` to the surface, or `None` if the ray misses.
    fn hit(&self, ray: &Ray) -> Option<f32>;

    /// Surface normal at `pos`.
    fn normal(&self, pos: Vec3) -> Vec3;

    /// Material of the surface.
    fn surface(&self) -> &Surface;
}

/// Any object that can appear in a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Thing {
    Sphere(Sphere),
    Plane(Plane),
}

impl Thing {
    /// Create a sphere.
    pub fn sphere(center: Vec3, radius: f32, surface: Surface) -> Self {
        Thing::Sphere(Sphere::new(center, radius, surface))
    }

    /// Create a plane `dot(normal, p) + offset = 0`.
    pub fn plane(normal: Vec3, offset: f32, surface: Surface) -> Self {
        Thing::Plane(Plane::new(normal, offset, surface))
    }

    /// Intersect `ray` with this object.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        self.hit(ray).map(|dist| Intersection::new(self, *ray, dist))
    }
}

impl Hittable for Thing {
    fn hit(&self, ray: &Ray) -> Option<f32> {
        match self {
            Thing::Sphere(sphere) => sphere.hit(ray),
            Thing::Plane(plane) => plane.hit(ray),
        }
    }

    fn normal(&self, pos: Vec3) -> Vec3 {
        match self {
            Thing::Sphere(sphere) => sphere.normal(pos),
            Thing::Plane(plane) => plane.normal(pos),
        }
    }

    fn surface(&self) -> &Surface {
        match self {
            Thing::Sphere(sphere) => sphere.surface(),
            Thing::Plane(plane) => plane.surface(),
        }
    }
}
