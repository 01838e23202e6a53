use crate::{Ray, Vec3, VectorExt};

/// Scale applied to the right/up basis vectors; sets the field of view.
const FOV_SCALE: f32 = 1.5;

/// Pinhole camera with a precomputed view basis.
///
/// `right` and `up` are scaled by [`FOV_SCALE`], so they are not unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Camera {
    /// Create a camera at `position` looking at `look_at`.
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        let down = Vec3::new(0.0, -1.0, 0.0);
        let forward = (look_at - position).norm();
        let right = forward.cross(down).norm() * FOV_SCALE;
        let up = forward.cross(right).norm() * FOV_SCALE;

        Self {
            position,
            forward,
            right,
            up,
        }
    }

    /// Unit direction through pixel (x, y) of a `width` x `height` image.
    ///
    /// (0, 0) is the top-left pixel.
    pub fn direction(&self, x: u32, y: u32, width: u32, height: u32) -> Vec3 {
        let (w, h) = (width as f32, height as f32);
        let recenter_x = (x as f32 - w / 2.0) / 2.0 / w;
        let recenter_y = -(y as f32 - h / 2.0) / 2.0 / h;

        (self.right * recenter_x + self.up * recenter_y + self.forward).norm()
    }

    /// Primary ray through pixel (x, y).
    pub fn get_ray(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        Ray::new(self.position, self.direction(x, y, width, height))
    }
}
