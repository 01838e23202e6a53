//! Surface shading parameters.

use glint_math::color::{BLACK, GREY, WHITE};
use glint_math::{Color, Vec3};

/// Shading values of a surface at one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceProperties {
    pub diffuse: Color,
    pub specular: Color,
    /// Fraction of the mirror reflection that is added back, in [0, 1]
    pub reflect: f32,
    /// Exponent of the specular highlight
    pub roughness: f32,
}

/// Surface materials. Every query is a function of the world position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Uniform white, highly reflective.
    Shiny,
    /// Alternating white/black unit squares on the XZ plane.
    Checkerboard,
}

impl Surface {
    pub fn diffuse(&self, pos: Vec3) -> Color {
        match self {
            Surface::Shiny => WHITE,
            Surface::Checkerboard => {
                if odd_square(pos) {
                    WHITE
                } else {
                    BLACK
                }
            }
        }
    }

    pub fn specular(&self, _pos: Vec3) -> Color {
        match self {
            Surface::Shiny => GREY,
            Surface::Checkerboard => WHITE,
        }
    }

    pub fn reflect(&self, pos: Vec3) -> f32 {
        match self {
            Surface::Shiny => 0.7,
            Surface::Checkerboard => {
                if odd_square(pos) {
                    0.1
                } else {
                    0.7
                }
            }
        }
    }

    pub fn roughness(&self, _pos: Vec3) -> f32 {
        match self {
            Surface::Shiny => 250.0,
            Surface::Checkerboard => 150.0,
        }
    }

    /// All shading values at `pos` in one query.
    pub fn properties(&self, pos: Vec3) -> SurfaceProperties {
        SurfaceProperties {
            diffuse: self.diffuse(pos),
            specular: self.specular(pos),
            reflect: self.reflect(pos),
            roughness: self.roughness(pos),
        }
    }
}

/// Parity of the unit square containing `pos`.
///
/// Float remainder truncates, so -1 counts as odd; a NaN sum counts as odd too.
#[inline]
fn odd_square(pos: Vec3) -> bool {
    (pos.z.floor() + pos.x.floor()) % 2.0 != 0.0
}
