use glam::Vec3;

use crate::raytracer::{RenderResult, SPHERE_COUNT, Scene, Sphere};

pub const DEFAULT_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 3.0);
pub const DEFAULT_LIGHT_HEIGHT: f32 = 2.0;
pub const DEFAULT_LIGHT_INTENSITY: f32 = 0.9;

const FOUR_SPHERES: [Sphere; SPHERE_COUNT] = [
    // Large red sphere in the middle
    Sphere::new(
        Vec3::new(0.0, 0.5, 0.0),
        1.0,
        Vec3::new(0.8, 0.1, 0.2),
        32.0,
    ),
    // Small green sphere, upper right
    Sphere::new(
        Vec3::new(1.5, 1.5, 0.5),
        0.5,
        Vec3::new(0.1, 0.8, 0.2),
        50.0,
    ),
    // Small blue sphere, lower left and closer to the camera
    Sphere::new(
        Vec3::new(-1.0, 0.15, 1.5),
        0.5,
        Vec3::new(0.1, 0.2, 0.8),
        5.0,
    ),
    // Ground
    Sphere::new(
        Vec3::new(0.0, -10.0, 0.0),
        9.0,
        Vec3::new(0.4, 0.4, 0.4),
        10.0,
    ),
];

/// The default scene: three small spheres standing on a large grey one.
pub fn four_spheres_scene() -> Scene {
    Scene::from_trusted(FOUR_SPHERES)
}

/// Scene made of four copies of one sphere. Renders exactly like a scene
/// holding that single sphere.
pub fn single_sphere_scene(sphere: Sphere) -> RenderResult<Scene> {
    Scene::new([sphere; SPHERE_COUNT])
}
