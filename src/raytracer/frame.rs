use crate::raytracer::{Camera, Light, RenderError, RenderResult, RenderSettings, Scene};

/// Everything the kernel reads while rendering one frame. Built between
/// frames and never modified while a frame is in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    scene: Scene,
    camera: Camera,
    light: Light,
    settings: RenderSettings,
    image_size: (usize, usize),
}

impl FrameSnapshot {
    pub fn new(
        scene: Scene,
        camera: Camera,
        light: Light,
        settings: RenderSettings,
        image_size: (usize, usize),
    ) -> RenderResult<Self> {
        if image_size.0 == 0 || image_size.1 == 0 {
            return Err(RenderError::invalid(format!(
                "image size must be non zero, got {}x{}",
                image_size.0, image_size.1
            )));
        }
        if !camera.position().is_finite() {
            return Err(RenderError::invalid(format!(
                "camera position must be finite, got {}",
                camera.position()
            )));
        }
        Ok(Self {
            scene,
            camera,
            light,
            settings,
            image_size,
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn light(&self) -> &Light {
        &self.light
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn image_size(&self) -> (usize, usize) {
        self.image_size
    }
}
