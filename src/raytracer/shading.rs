use glam::{Vec3, Vec4};

use crate::raytracer::{FrameSnapshot, Hit, Ray, Sphere};

/// Ambient term weight.
pub const AMBIENT_FACTOR: f32 = 0.3;
/// RGB multiplier applied to occluded points.
pub const SHADOW_FACTOR: f32 = 0.3;
/// Offset along the surface normal for rays leaving a surface.
pub const SURFACE_BIAS: f32 = 1e-4;

const SPECULAR_COLOR: Vec3 = Vec3::ONE;

/// Phong illumination of `sphere` at ray parameter `t`. Alpha is always 1.
pub fn phong(frame: &FrameSnapshot, sphere: &Sphere, t: f32, ray: &Ray) -> Vec4 {
    let intensity = frame.light().intensity();
    let position = ray.at(t);
    let normal = sphere.normal_at(position);
    let to_light = (frame.light().position() - position).normalize();
    let to_eye = (frame.camera().position() - position).normalize();
    let reflected = (-to_light.reflect(normal)).normalize();

    let ambient = sphere.color * intensity * AMBIENT_FACTOR;
    let diffuse = sphere.color * intensity * normal.dot(to_light).max(0.0);
    let specular =
        SPECULAR_COLOR * intensity * reflected.dot(to_eye).max(0.0).powf(sphere.shininess);

    (ambient + diffuse + specular).extend(1.0)
}

/// Shadow ray from the hit point towards the light.
pub fn shadow_ray(frame: &FrameSnapshot, hit: &Hit, ray: &Ray) -> Ray {
    let position = hit.position(ray);
    let normal = frame.scene().sphere(hit.index).normal_at(position);
    let to_light = (frame.light().position() - position).normalize();
    Ray::new(position + normal * SURFACE_BIAS, to_light)
}

/// Whether the hit point is occluded from the light by any sphere, its own
/// included. Returns false when the shadow ray hits nothing.
pub fn is_shadowed(frame: &FrameSnapshot, hit: &Hit, ray: &Ray) -> bool {
    frame.scene().any_hit(&shadow_ray(frame, hit, ray))
}

/// Darken the RGB channels of an occluded color.
pub fn apply_shadow(color: Vec4) -> Vec4 {
    (color.truncate() * SHADOW_FACTOR).extend(color.w)
}
