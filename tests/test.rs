use glam::Vec3;
use specular::raytracer::{Hit, Intersectable, Ray, RenderError, Scene, Sphere};
use specular::scenes;

fn sphere(center: Vec3, radius: f32, color: Vec3) -> Sphere {
    Sphere::new(center, radius, color, 16.0)
}

fn far_sphere(x: f32) -> Sphere {
    sphere(Vec3::new(x, 0.0, 0.0), 1.0, Vec3::ONE)
}

#[test]
fn sphere_center_intersection() {
    let sphere = sphere(Vec3::new(1.0, 2.0, -3.0), 0.75, Vec3::ONE);
    let origin = Vec3::new(4.0, 6.0, 9.0);
    let ray = Ray::new(origin, (sphere.center - origin).normalize());

    let t = sphere.intersect(&ray).unwrap();
    assert!((t - (13.0 - 0.75)).abs() < 1e-4, "t = {}", t);
}

#[test]
fn sphere_tangent_intersection() {
    let sphere = sphere(Vec3::ZERO, 1.0, Vec3::ONE);
    let ray = Ray::new(Vec3::new(0.0, 1.0, 5.0), Vec3::NEG_Z);
    assert_eq!(sphere.intersect(&ray), Some(5.0));
}

#[test]
fn sphere_no_intersection() {
    let sphere = sphere(Vec3::ZERO, 1.0, Vec3::ONE);
    let ray = Ray::new(Vec3::new(0.0, 2.0, 5.0), Vec3::NEG_Z);
    assert_eq!(sphere.intersect(&ray), None);
}

#[test]
fn sphere_inner_intersection_is_negative() {
    let sphere = sphere(Vec3::ZERO, 1.0, Vec3::ONE);
    let ray = Ray::new(Vec3::ZERO, Vec3::X);
    assert_eq!(sphere.intersect(&ray), Some(-1.0));

    let scene = scenes::single_sphere_scene(sphere).unwrap();
    assert_eq!(scene.nearest_hit(&ray), None);
}

#[test]
fn ray_away_from_every_sphere() {
    let scene = scenes::four_spheres_scene();
    let ray = Ray::new(scenes::DEFAULT_CAMERA_POSITION, Vec3::Y);

    for sphere in scene.spheres() {
        assert!(sphere.intersect(&ray).is_none_or(|t| t < 0.0));
    }
    assert_eq!(scene.nearest_hit(&ray), None);
    assert!(!scene.any_hit(&ray));
}

#[test]
fn nearest_hit_picks_closest_sphere() {
    let scene = Scene::new([
        sphere(Vec3::new(0.0, 0.0, -10.0), 1.0, Vec3::X),
        sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, Vec3::Y),
        far_sphere(100.0),
        far_sphere(-100.0),
    ])
    .unwrap();
    let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

    assert_eq!(scene.nearest_hit(&ray), Some(Hit { index: 1, t: 4.0 }));
}

#[test]
fn nearest_hit_tie_goes_to_lowest_index() {
    let scene = Scene::new([
        far_sphere(100.0),
        sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, Vec3::X),
        sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, Vec3::Y),
        far_sphere(-100.0),
    ])
    .unwrap();
    let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

    assert_eq!(scene.nearest_hit(&ray), Some(Hit { index: 1, t: 4.0 }));
}

#[test]
fn hit_position() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::NEG_Z);
    let hit = Hit { index: 0, t: 2.0 };
    assert_eq!(hit.position(&ray), Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn invalid_spheres_are_rejected() {
    let good = sphere(Vec3::ZERO, 1.0, Vec3::ONE);
    let flat = sphere(Vec3::ZERO, 0.0, Vec3::ONE);
    let dull = Sphere::new(Vec3::ZERO, 1.0, Vec3::ONE, -2.0);

    assert!(matches!(
        Scene::new([good, good, flat, good]),
        Err(RenderError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        Scene::new([good, dull, good, good]),
        Err(RenderError::InvalidConfiguration(_))
    ));
}

#[test]
fn ray_direction_must_be_normalized() {
    assert!(matches!(
        Ray::try_new(Vec3::ZERO, Vec3::new(0.0, 0.0, -2.0)),
        Err(RenderError::InvalidConfiguration(_))
    ));
    assert!(Ray::try_new(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::NEG_Z).is_err());
    assert!(Ray::try_new(Vec3::ZERO, Vec3::ZERO).is_err());
    assert!(Ray::try_new(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0).normalize()).is_ok());
}

#[test]
#[should_panic(expected = "Ray direction must be normalized")]
fn unnormalized_ray_panics() {
    Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::new(0.0, 0.0, -2.0));
}
