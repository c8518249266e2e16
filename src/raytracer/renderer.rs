use glam::{Vec3, Vec4};

use crate::raytracer::{
    Camera, FrameSnapshot, Image, Ray, RenderResult, Tile, reflection, shading,
};

/// Color of pixels whose primary ray misses every sphere.
pub const BACKGROUND: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);

/// Per pixel kernel bound to one frame snapshot.
#[derive(Debug, Clone)]
pub struct Renderer {
    frame: FrameSnapshot,
}

impl Renderer {
    pub fn new(frame: FrameSnapshot) -> Self {
        Self { frame }
    }

    pub fn frame(&self) -> &FrameSnapshot {
        &self.frame
    }

    /// Shade a primary ray: local illumination, then the reflected
    /// contribution, then the shadow test, as enabled by the render mode.
    pub fn trace(&self, ray: &Ray) -> Vec4 {
        let frame = &self.frame;
        let Some(hit) = frame.scene().nearest_hit(ray) else {
            return BACKGROUND;
        };

        let sphere = frame.scene().sphere(hit.index);
        let mut color = shading::phong(frame, sphere, hit.t, ray);

        let settings = frame.settings();
        if settings.mode.reflection_enabled() {
            let reflection =
                reflection::trace_reflection(frame, hit, ray, settings.bounce_limit);
            if reflection.bounced {
                color += reflection.color.truncate().extend(0.0);
            }
        }

        if settings.mode.shadow_enabled() && shading::is_shadowed(frame, &hit, ray) {
            color = shading::apply_shadow(color);
        }

        color
    }

    /// Shade a ray supplied by the caller. The direction must be unit length.
    pub fn try_trace(&self, origin: Vec3, direction: Vec3) -> RenderResult<Vec4> {
        let ray = Ray::try_new(origin, direction)?;
        Ok(self.trace(&ray))
    }

    /// Color of pixel (x, y), row 0 being the top of the image.
    pub fn render_pixel(&self, x: usize, y: usize) -> Vec4 {
        let (u, v) = Camera::viewport_coords(x, y, self.frame.image_size());
        let ray = self.frame.camera().create_viewport_ray(u, v);
        self.trace(&ray)
    }

    pub fn render_tile(&self, begin_pos: (usize, usize), tile_size: (usize, usize)) -> Tile {
        let mut tile = Tile::new(tile_size);
        for v in 0..tile_size.1 {
            for u in 0..tile_size.0 {
                tile.set(u, v, self.render_pixel(u + begin_pos.0, v + begin_pos.1));
            }
        }
        tile
    }

    /// Render the whole frame on the calling thread.
    pub fn render_image(&self) -> Image {
        self.render_tile((0, 0), self.frame.image_size())
    }
}
