//! Session-wide render parameters.
//!
//! Every field has a default, so an empty TOML file (or none at all) yields
//! the classic 120×80 view with a 45° field of view.

use std::{f32::consts::PI, fs, io, path::Path};

use glam::{Vec2, vec2};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    renderer::{Rgba, color::rgba},
    world::{MapLegend, Pose},
};

/// Finest accepted march step; below this a column needs millions of samples.
pub const MIN_STEP_SIZE: f32 = 1e-4;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("bad config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// How rays find walls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarchMode {
    /// Fixed `step_size` increments.
    #[default]
    Stepped,
    /// Exact cell-boundary traversal; `step_size` is ignored.
    Grid,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub ceiling: [u8; 3],
    pub floor: [u8; 3],
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            ceiling: [183, 239, 205],
            floor: [76, 211, 194],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Legend {
    pub empty: [u8; 4],
    pub wall: [u8; 4],
    pub decoration: [u8; 4],
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            empty: [255, 255, 255, 255],
            wall: [0, 0, 0, 255],
            decoration: [38, 127, 0, 255],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub screen_width: usize,
    pub screen_height: usize,
    /// Window pixels per frame pixel.
    pub pixel_scale: usize,
    /// Horizontal field of view, radians.
    pub fov: f32,
    pub step_size: f32,
    pub draw_distance: f32,
    /// Map cells per second; consumed by player motion only.
    pub player_speed: f32,
    pub march: MarchMode,
    pub minimap: bool,
    pub start: [f32; 2],
    pub start_rotation: f32,
    pub colors: Colors,
    pub legend: Legend,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            screen_width: 120,
            screen_height: 80,
            pixel_scale: 8,
            fov: PI / 4.0,
            step_size: 0.01,
            draw_distance: 16.0,
            player_speed: 5.0,
            march: MarchMode::Stepped,
            minimap: true,
            start: [8.0, 8.0],
            start_rotation: 0.0,
            colors: Colors::default(),
            legend: Legend::default(),
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let cfg: RenderConfig = toml::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let src = fs::read_to_string(path.as_ref())?;
        let cfg = Self::from_toml_str(&src)?;
        tracing::info!(path = %path.as_ref().display(), "loaded render config");
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));
        if self.screen_width == 0 || self.screen_height == 0 {
            return invalid(format!(
                "screen must be non-empty, got {}x{}",
                self.screen_width, self.screen_height
            ));
        }
        if self.pixel_scale == 0 {
            return invalid("pixel_scale must be at least 1".into());
        }
        if !(self.fov > 0.0 && self.fov < PI) {
            return invalid(format!("fov must lie in (0, pi), got {}", self.fov));
        }
        // Larger steps can jump clean over a wall cell.
        if !(self.step_size >= MIN_STEP_SIZE && self.step_size <= 1.0) {
            return invalid(format!(
                "step_size must lie in [{MIN_STEP_SIZE}, 1], got {}",
                self.step_size
            ));
        }
        if !(self.draw_distance > 0.0 && self.draw_distance.is_finite()) {
            return invalid(format!(
                "draw_distance must be positive, got {}",
                self.draw_distance
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn ceiling_colour(&self) -> Rgba {
        let [r, g, b] = self.colors.ceiling;
        rgba(r, g, b, 255)
    }

    #[inline]
    pub fn floor_colour(&self) -> Rgba {
        let [r, g, b] = self.colors.floor;
        rgba(r, g, b, 255)
    }

    pub fn legend(&self) -> MapLegend {
        let pack = |[r, g, b, a]: [u8; 4]| rgba(r, g, b, a);
        MapLegend {
            empty: pack(self.legend.empty),
            wall: pack(self.legend.wall),
            decoration: pack(self.legend.decoration),
        }
    }

    pub fn start_pose(&self) -> Pose {
        let start: Vec2 = vec2(self.start[0], self.start[1]);
        Pose::new(start, self.start_rotation)
    }
}
