//! Vector helpers layered on top of `glam::Vec3`.

use crate::Vec3;

/// Extra vector operations used by the tracer.
pub trait VectorExt {
    /// Magnitude of the vector.
    fn mag(self) -> f32;

    /// Scale the vector to unit length.
    ///
    /// A zero vector is scaled by `+inf` instead of failing, so every
    /// component becomes NaN and propagates through whatever uses it.
    fn norm(self) -> Self;
}

impl VectorExt for Vec3 {
    #[inline]
    fn mag(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    #[inline]
    fn norm(self) -> Self {
        let mag = self.mag();
        let div = if mag == 0.0 { f32::INFINITY } else { 1.0 / mag };
        self * div
    }
}
