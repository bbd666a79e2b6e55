//! Runtime configuration
//!
//! `GameConfig` is read from JSON. Lookup order:
//!
//! 1. the path given as the first command-line argument
//! 2. `<config dir>/pixel_outpost/config.json` (see [`dirs::config_dir`])
//! 3. built-in defaults
//!
//! Every field is optional in the file; missing ones take their default.

use crate::game::camera::CameraBounds;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Logical pixels across the canvas
    pub resolution: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub window_title: String,
    pub asset_dir: PathBuf,
    pub camera_bounds: CameraBounds,
    /// Screen pixels of drag per pixel of camera movement
    pub pan_divisor: u32,
    pub target_fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            resolution: 64,
            canvas_width: 640,
            canvas_height: 640,
            window_title: "Pixel Outpost".to_string(),
            asset_dir: PathBuf::from("assets"),
            camera_bounds: CameraBounds::default(),
            pan_divisor: 8,
            target_fps: 60,
        }
    }
}

impl GameConfig {
    /// Reads and validates a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolves the config using the lookup order in the module docs.
    ///
    /// An explicitly given path must load; the per-user file is only used
    /// when it exists.
    pub fn load(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            log::info!("Loading config from {}", path.display());
            return Self::from_file(path);
        }

        if let Some(path) = Self::user_config_path() {
            if path.exists() {
                log::info!("Loading config from {}", path.display());
                return Self::from_file(path);
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pixel_outpost").join("config.json"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution == 0 {
            return Err(ConfigError::Invalid("resolution must be non-zero".to_string()));
        }
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas must be non-zero (got {}x{})",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.pan_divisor == 0 {
            return Err(ConfigError::Invalid("pan_divisor must be non-zero".to_string()));
        }
        if self.target_fps == 0 {
            return Err(ConfigError::Invalid("target_fps must be non-zero".to_string()));
        }
        let bounds = &self.camera_bounds;
        if bounds.x1 > bounds.x2 || bounds.y1 > bounds.y2 {
            return Err(ConfigError::Invalid(format!(
                "camera bounds are inverted: ({}, {}) - ({}, {})",
                bounds.x1, bounds.y1, bounds.x2, bounds.y2
            )));
        }
        Ok(())
    }
}
