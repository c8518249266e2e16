use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::Deserialize;
use thiserror::Error;

use crate::raytracer::{DEFAULT_BOUNCE_LIMIT, RenderMode};
use crate::scenes::{DEFAULT_CAMERA_POSITION, DEFAULT_LIGHT_HEIGHT, DEFAULT_LIGHT_INTENSITY};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default = "default_camera_position")]
    pub camera_position: Vec3,
    /// Light angle in degrees.
    #[serde(default)]
    pub light_angle: f32,
    #[serde(default = "default_light_height")]
    pub light_height: f32,
    #[serde(default = "default_light_intensity")]
    pub light_intensity: f32,
    #[serde(default)]
    pub mode: RenderMode,
    // Signed so a negative value reaches validation instead of failing to
    // parse.
    #[serde(default = "default_bounce_limit")]
    pub bounce_limit: i64,
    pub output: Option<PathBuf>,
}

fn default_width() -> usize {
    512
}

fn default_height() -> usize {
    512
}

fn default_camera_position() -> Vec3 {
    DEFAULT_CAMERA_POSITION
}

fn default_light_height() -> f32 {
    DEFAULT_LIGHT_HEIGHT
}

fn default_light_intensity() -> f32 {
    DEFAULT_LIGHT_INTENSITY
}

fn default_bounce_limit() -> i64 {
    DEFAULT_BOUNCE_LIMIT as i64
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Toml(#[from] toml::de::Error),
}

type ConfigResult<T> = Result<T, ConfigError>;

impl Config {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        let config = toml::from_str(content)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            camera_position: default_camera_position(),
            light_angle: 0.0,
            light_height: default_light_height(),
            light_intensity: default_light_intensity(),
            mode: RenderMode::default(),
            bounce_limit: default_bounce_limit(),
            output: None,
        }
    }
}
