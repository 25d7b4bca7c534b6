use egui::Vec2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::{AppState, CollageSettings, EditMode};
use crate::collage::Collage;

/// Bumped whenever the persisted layout changes incompatibly.
pub const SESSION_FORMAT_VERSION: u32 = 1;

/// Errors that can occur while saving or restoring a session
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to serialize session: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to access session file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Session format {found} is not supported (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// The parts of the editor state worth restoring on the next launch.
///
/// Selection and playback are not persisted; a restored session starts idle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub format_version: u32,
    pub collage: Collage,
    pub collage_size: Vec2,
    pub collage_settings: CollageSettings,
    pub edit_mode: EditMode,
    pub is_showing_grid: bool,
}

impl PersistedSession {
    pub fn capture(state: &AppState) -> Self {
        Self {
            format_version: SESSION_FORMAT_VERSION,
            collage: state.collage.clone(),
            collage_size: state.collage_size,
            collage_settings: state.collage_settings,
            edit_mode: state.edit_mode,
            is_showing_grid: state.is_showing_grid,
        }
    }

    pub fn into_state(self) -> AppState {
        let mut state = AppState::with_collage(self.collage, self.collage_size);
        state.collage_settings = self.collage_settings;
        state.edit_mode = self.edit_mode;
        state.is_showing_grid = self.is_showing_grid;
        state
    }

    fn check_version(self) -> PersistenceResult<Self> {
        if self.format_version != SESSION_FORMAT_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: self.format_version,
                expected: SESSION_FORMAT_VERSION,
            });
        }
        Ok(self)
    }

    pub fn to_json(&self) -> PersistenceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> PersistenceResult<Self> {
        serde_json::from_str::<Self>(json)?.check_version()
    }

    pub fn write_to(&self, path: &Path) -> PersistenceResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_json()?)?;
        log::debug!("Session written to {}", path.display());
        Ok(())
    }

    pub fn read_from(path: &Path) -> PersistenceResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
