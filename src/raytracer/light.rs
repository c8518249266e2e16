use glam::Vec3;

use crate::raytracer::{RenderError, RenderResult};

/// Radius of the horizontal circle the light moves on.
pub const LIGHT_ORBIT_RADIUS: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    position: Vec3,
    intensity: f32,
}

impl Light {
    pub fn new(position: Vec3, intensity: f32) -> RenderResult<Self> {
        if !(intensity.is_finite() && intensity > 0.0) {
            return Err(RenderError::invalid(format!(
                "light intensity must be positive, got {}",
                intensity
            )));
        }
        if !position.is_finite() {
            return Err(RenderError::invalid("light position must be finite"));
        }
        Ok(Self {
            position,
            intensity,
        })
    }

    /// Light placed on the orbit circle at `angle` degrees, measured from the
    /// positive z axis towards the positive x axis.
    pub fn orbiting(angle: f32, height: f32, intensity: f32) -> RenderResult<Self> {
        Self::new(orbit_position(angle, height), intensity)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }
}

pub fn orbit_position(angle: f32, height: f32) -> Vec3 {
    let (sin, cos) = angle.to_radians().sin_cos();
    Vec3::new(LIGHT_ORBIT_RADIUS * sin, height, LIGHT_ORBIT_RADIUS * cos)
}
