//! RGB color type and the named colors used by the shading model.
//!
//! Colors are unclamped while shading; only [`to_rgba`] maps them into
//! displayable 8-bit values.

use crate::Vec3;

/// Color type alias (x=r, y=g, z=b). Channels may leave [0, 1] during shading.
pub type Color = Vec3;

pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
pub const GREY: Color = Color::new(0.5, 0.5, 0.5);
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

/// Color returned by rays that escape the scene.
pub const BACKGROUND: Color = BLACK;

/// Contribution of a light that doesn't reach a surface.
pub const DEFAULT_COLOR: Color = BLACK;

/// Quantize one channel: `floor(c * 255)` clamped to [0, 255].
///
/// NaN channels quantize to 0.
#[inline]
pub fn to_byte(channel: f32) -> u8 {
    (channel * 255.0).floor().clamp(0.0, 255.0) as u8
}

/// Convert a color to 8-bit RGBA with an opaque alpha.
pub fn to_rgba(color: Color) -> [u8; 4] {
    [to_byte(color.x), to_byte(color.y), to_byte(color.z), 255]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(WHITE, Vec3::ONE);
        assert_eq!(GREY, Vec3::splat(0.5));
        assert_eq!(BACKGROUND, BLACK);
        assert_eq!(DEFAULT_COLOR, BLACK);
    }

    #[test]
    fn test_color_arithmetic() {
        let a = Color::new(0.5, 1.0, 2.0);
        let b = Color::new(2.0, 0.5, 0.25);
        assert_eq!(a * b, Color::new(1.0, 0.5, 0.5));
        assert_eq!(a + b, Color::new(2.5, 1.5, 2.25));
        assert_eq!(a * 2.0, Color::new(1.0, 2.0, 4.0));
    }

    #[test]
    fn test_to_byte() {
        assert_eq!(to_byte(0.0), 0);
        assert_eq!(to_byte(1.0), 255);
        assert_eq!(to_byte(0.5), 127);
        assert_eq!(to_byte(1.7), 255);
        assert_eq!(to_byte(-0.3), 0);
        assert_eq!(to_byte(f32::NAN), 0);
        assert_eq!(to_byte(f32::INFINITY), 255);
    }

    #[test]
    fn test_to_rgba() {
        assert_eq!(to_rgba(Color::new(1.0, 0.0, 2.0)), [255, 0, 255, 255]);
        assert_eq!(to_rgba(GREY), [127, 127, 127, 255]);
    }
}
