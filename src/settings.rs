//! Host settings and preferences
//!
//! Loaded from a JSON file. None of these change the rules of play.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::controls::Controls;
use crate::error::{Error, Result, read_json};

/// Host settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame rate the host aims for
    pub target_fps: u32,
    /// Alpha of the black overlay drawn each frame (lower => longer trails)
    pub trail_fade_alpha: u8,
    /// Key bindings for both players
    pub controls: Controls,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_fps: 120,
            trail_fade_alpha: 40,
            controls: Controls::default(),
        }
    }
}

impl Settings {
    /// Frame time the host should feed the simulation when running headless
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }

    /// Load settings from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let settings: Self = read_json(path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults if the file is missing or broken
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
