use egui::{Vec2, vec2};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "COLLAGE_BUILDER_CONFIG";

const MAX_GRID_LINES: u32 = 1000;

/// Startup settings. Every field has a default, so a partial file is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    /// Collage size in points for a fresh document
    pub collage_size: [f32; 2],
    /// Cells of the alignment grid along x and y
    pub grid_lines: [u32; 2],
    /// Seconds between elements appearing during playback
    pub playback_step_secs: f64,
    /// Restore the last session from eframe storage
    pub restore_session: bool,
    /// Read and write the session from this JSON file instead of eframe storage
    pub session_file: Option<PathBuf>,
    /// Open the sample collage when there is nothing to restore
    pub start_with_preview: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Collage Builder".to_owned(),
            collage_size: [360.0, 360.0],
            grid_lines: [100, 100],
            playback_step_secs: 0.6,
            restore_session: true,
            session_file: None,
            start_with_preview: true,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        serde_json::from_str::<Self>(json)?.validated()
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], falling back to defaults.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        let path = PathBuf::from(path);
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("{err}; using default config");
                Self::default()
            }
        }
    }

    pub fn validated(self) -> ConfigResult<Self> {
        let [width, height] = self.collage_size;
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "collage_size",
                reason: format!("expected two non-negative sizes, got {width} x {height}"),
            });
        }
        if self.grid_lines.iter().any(|lines| *lines > MAX_GRID_LINES) {
            return Err(ConfigError::Invalid {
                field: "grid_lines",
                reason: format!("at most {MAX_GRID_LINES} lines per axis"),
            });
        }
        if !(self.playback_step_secs.is_finite() && self.playback_step_secs > 0.0) {
            return Err(ConfigError::Invalid {
                field: "playback_step_secs",
                reason: "must be a positive number of seconds".to_owned(),
            });
        }
        Ok(self)
    }

    pub fn collage_size(&self) -> Vec2 {
        vec2(self.collage_size[0], self.collage_size[1])
    }
}
