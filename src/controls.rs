use glam::Vec3;
use tracing::{debug, warn};

use crate::config::Config;
use crate::raytracer::{
    Camera, FrameSnapshot, Light, RenderMode, RenderResult, RenderSettings, Scene,
    checked_bounce_limit,
};
use crate::scenes;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    SetMode(RenderMode),
    /// Light angle in degrees.
    SetLightAngle(f32),
    SetBounceLimit(i64),
}

/// Control state driven by external input. Every accepted event yields the
/// snapshot for exactly one re-render.
#[derive(Debug, Clone)]
pub struct Controls {
    scene: Scene,
    camera: Camera,
    light_angle: f32,
    light_height: f32,
    light_intensity: f32,
    settings: RenderSettings,
    image_size: (usize, usize),
}

impl Controls {
    /// Validates the initial state by building its snapshot.
    pub fn new(
        scene: Scene,
        camera_position: Vec3,
        light_angle: f32,
        light_height: f32,
        light_intensity: f32,
        settings: RenderSettings,
        image_size: (usize, usize),
    ) -> RenderResult<Self> {
        let controls = Self {
            scene,
            camera: Camera::new(camera_position),
            light_angle,
            light_height,
            light_intensity,
            settings,
            image_size,
        };
        controls.snapshot()?;
        Ok(controls)
    }

    /// Controls over the default four sphere scene.
    pub fn from_config(config: &Config) -> RenderResult<Self> {
        Self::new(
            scenes::four_spheres_scene(),
            config.camera_position,
            config.light_angle,
            config.light_height,
            config.light_intensity,
            RenderSettings::new(config.mode, config.bounce_limit)?,
            (config.width, config.height),
        )
    }

    pub fn light_angle(&self) -> f32 {
        self.light_angle
    }

    pub fn settings(&self) -> RenderSettings {
        self.settings
    }

    pub fn snapshot(&self) -> RenderResult<FrameSnapshot> {
        let light = Light::orbiting(self.light_angle, self.light_height, self.light_intensity)?;
        FrameSnapshot::new(
            self.scene.clone(),
            self.camera,
            light,
            self.settings,
            self.image_size,
        )
    }

    /// Apply one input event and return the snapshot to render next. A
    /// rejected event leaves the controls untouched.
    pub fn apply(&mut self, event: ControlEvent) -> RenderResult<FrameSnapshot> {
        let mut next = self.clone();
        match event {
            ControlEvent::SetMode(mode) => next.settings.mode = mode,
            ControlEvent::SetLightAngle(angle) => next.light_angle = angle,
            ControlEvent::SetBounceLimit(limit) => match checked_bounce_limit(limit) {
                Ok(limit) => next.settings.bounce_limit = limit,
                Err(e) => {
                    warn!("Rejected {:?}: {}", event, e);
                    return Err(e);
                }
            },
        }

        let snapshot = next.snapshot()?;
        debug!("Applied {:?}", event);
        *self = next;
        Ok(snapshot)
    }
}
