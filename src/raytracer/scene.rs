use glam::Vec3;

use crate::raytracer::{Ray, RenderError, RenderResult};

/// Number of spheres every scene holds.
pub const SPHERE_COUNT: usize = 4;

pub trait Intersectable {
    /// Ray parameter of the nearest intersection root, if the ray line meets
    /// the object at all. The returned value may be negative.
    fn intersect(&self, ray: &Ray) -> Option<f32>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub color: Vec3,
    pub shininess: f32,
}

impl Sphere {
    pub const fn new(center: Vec3, radius: f32, color: Vec3, shininess: f32) -> Self {
        Self {
            center,
            radius,
            color,
            shininess,
        }
    }

    /// Outward unit normal at a point of the surface.
    pub fn normal_at(&self, position: Vec3) -> Vec3 {
        (position - self.center).normalize()
    }

    fn validate(&self, index: usize) -> RenderResult<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(RenderError::invalid(format!(
                "sphere {} radius must be positive, got {}",
                index, self.radius
            )));
        }
        if !(self.shininess.is_finite() && self.shininess > 0.0) {
            return Err(RenderError::invalid(format!(
                "sphere {} shininess must be positive, got {}",
                index, self.shininess
            )));
        }
        if !self.center.is_finite() || !self.color.is_finite() {
            return Err(RenderError::invalid(format!(
                "sphere {} center and color must be finite",
                index
            )));
        }
        Ok(())
    }
}

impl Intersectable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            return None;
        }
        // Only the near root. A ray starting inside the sphere gets a
        // negative value here.
        Some((-b - discriminant.sqrt()) / (2.0 * a))
    }
}

/// Nearest intersection of a ray with the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub index: usize,
    pub t: f32,
}

impl Hit {
    pub fn position(&self, ray: &Ray) -> Vec3 {
        ray.at(self.t)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    spheres: [Sphere; SPHERE_COUNT],
}

impl Scene {
    pub fn new(spheres: [Sphere; SPHERE_COUNT]) -> RenderResult<Self> {
        for (index, sphere) in spheres.iter().enumerate() {
            sphere.validate(index)?;
        }
        Ok(Self { spheres })
    }

    /// Skips validation, for built in scenes.
    pub(crate) const fn from_trusted(spheres: [Sphere; SPHERE_COUNT]) -> Self {
        Self { spheres }
    }

    pub fn spheres(&self) -> &[Sphere; SPHERE_COUNT] {
        &self.spheres
    }

    pub fn sphere(&self, index: usize) -> &Sphere {
        &self.spheres[index]
    }

    /// Closest sphere hit at a non negative ray parameter. On equal distances
    /// the sphere with the lowest index wins.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit> {
        let mut closest_hit: Option<Hit> = None;

        for (index, sphere) in self.spheres.iter().enumerate() {
            let Some(t) = sphere.intersect(ray) else {
                continue;
            };
            if t < 0.0 {
                continue;
            }
            if closest_hit.is_none_or(|hit| t < hit.t) {
                closest_hit = Some(Hit { index, t });
            }
        }

        closest_hit
    }

    /// Whether any sphere is hit at a non negative ray parameter. There is no
    /// upper bound on the distance.
    pub fn any_hit(&self, ray: &Ray) -> bool {
        self.spheres
            .iter()
            .any(|sphere| sphere.intersect(ray).is_some_and(|t| t >= 0.0))
    }
}
