use glam::Vec3;

use crate::raytracer::{RenderError, RenderResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// Creates a ray from an already normalized direction. Use `try_new` for
    /// directions coming from outside the renderer.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        assert!(
            direction.is_normalized(),
            "Ray direction must be normalized"
        );
        Self { origin, direction }
    }

    /// Checked constructor for rays coming from outside the renderer.
    pub fn try_new(origin: Vec3, direction: Vec3) -> RenderResult<Self> {
        if !origin.is_finite() || !direction.is_normalized() {
            return Err(RenderError::invalid(format!(
                "ray direction {} must be a unit vector from a finite origin",
                direction
            )));
        }
        Ok(Self { origin, direction })
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Compute ray position at a certain t.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}
