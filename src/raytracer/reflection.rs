use glam::Vec4;

use crate::raytracer::{FrameSnapshot, Hit, Ray, shading};

/// Scale applied to the shaded color of the last reflected hit.
pub const REFLECTION_ATTENUATION: f32 = 0.5;

/// Outcome of following reflections from a primary hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reflection {
    /// Attenuated color of the last hit reached. Zero when nothing was hit.
    pub color: Vec4,
    /// Whether at least one bounce hit a sphere.
    pub bounced: bool,
    /// Number of bounces that hit a sphere.
    pub depth: u32,
}

impl Reflection {
    pub const NONE: Self = Self {
        color: Vec4::ZERO,
        bounced: false,
        depth: 0,
    };
}

/// Reflected ray leaving the surface at `hit`.
pub fn reflected_ray(frame: &FrameSnapshot, hit: &Hit, ray: &Ray) -> Ray {
    let position = hit.position(ray);
    let normal = frame.scene().sphere(hit.index).normal_at(position);
    let direction = ray.direction().reflect(normal).normalize();
    Ray::new(position + normal * shading::SURFACE_BIAS, direction)
}

/// Follow up to `bounce_limit` mirror reflections starting at `hit`. Only the
/// color of the last successful bounce is kept, the previous ones are
/// overwritten.
pub fn trace_reflection(
    frame: &FrameSnapshot,
    hit: Hit,
    ray: &Ray,
    bounce_limit: u32,
) -> Reflection {
    let mut reflection = Reflection::NONE;
    let mut hit = hit;
    let mut ray = *ray;

    for _ in 0..bounce_limit {
        let reflected = reflected_ray(frame, &hit, &ray);
        let Some(next_hit) = frame.scene().nearest_hit(&reflected) else {
            break;
        };

        let sphere = frame.scene().sphere(next_hit.index);
        reflection.color =
            shading::phong(frame, sphere, next_hit.t, &reflected) * REFLECTION_ATTENUATION;
        reflection.bounced = true;
        reflection.depth += 1;

        hit = next_hit;
        ray = reflected;
    }

    reflection
}
