use clap::ValueEnum;
use serde::Deserialize;

use crate::raytracer::{RenderError, RenderResult};

/// The four shading modes selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    /// Local illumination only.
    #[default]
    Phong,
    /// Local illumination darkened by the shadow test.
    Shadow,
    /// Local illumination plus reflection bounces.
    Reflection,
    /// Shadows and reflections together.
    Combined,
}

impl RenderMode {
    pub fn shadow_enabled(self) -> bool {
        matches!(self, Self::Shadow | Self::Combined)
    }

    pub fn reflection_enabled(self) -> bool {
        matches!(self, Self::Reflection | Self::Combined)
    }
}

pub const DEFAULT_BOUNCE_LIMIT: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    pub mode: RenderMode,
    pub bounce_limit: u32,
}

impl RenderSettings {
    /// Builds settings from an externally supplied bounce limit, rejecting
    /// negative values.
    pub fn new(mode: RenderMode, bounce_limit: i64) -> RenderResult<Self> {
        Ok(Self {
            mode,
            bounce_limit: checked_bounce_limit(bounce_limit)?,
        })
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            mode: RenderMode::default(),
            bounce_limit: DEFAULT_BOUNCE_LIMIT,
        }
    }
}

pub fn checked_bounce_limit(bounce_limit: i64) -> RenderResult<u32> {
    u32::try_from(bounce_limit).map_err(|_| {
        RenderError::invalid(format!(
            "bounce limit must be a non negative 32 bit integer, got {}",
            bounce_limit
        ))
    })
}
