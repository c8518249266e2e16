use glam::Vec3;

use crate::raytracer::Ray;

/// Pinhole camera looking down the negative z axis. The image plane sits at
/// distance 1 and spans [-1, 1] on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    /// Camera position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Create a ray through a viewport coordinate. Both u and v must be
    /// within [-1, 1], v pointing up.
    pub fn create_viewport_ray(&self, u: f32, v: f32) -> Ray {
        Ray::new(self.position, Vec3::new(u, v, -1.0).normalize())
    }

    /// Viewport coordinate of the center of pixel (x, y), where row 0 is the
    /// top of the image.
    pub fn viewport_coords(x: usize, y: usize, image_size: (usize, usize)) -> (f32, f32) {
        let (width, height) = (image_size.0 as f32, image_size.1 as f32);
        let u = 2.0 * (x as f32 + 0.5) / width - 1.0;
        let v = 2.0 * (height - y as f32 - 0.5) / height - 1.0;
        (u, v)
    }
}
