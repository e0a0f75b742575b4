//! Game settings and preferences
//!
//! Persisted as JSON next to the high score file, separate from tuning.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;

/// Default settings file location
pub const DEFAULT_SETTINGS_PATH: &str = "settings.json";

/// Volume change per `+`/`-` press on the settings screen
pub const VOLUME_STEP: f32 = 0.1;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,

    // === HUD ===
    /// Show the seconds-left counter
    pub show_timer: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
            show_timer: true,
        }
    }
}

impl Settings {
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn toggle_timer(&mut self) {
        self.show_timer = !self.show_timer;
    }

    /// Nudge master volume, staying within 0.0 - 1.0
    pub fn adjust_master_volume(&mut self, delta: f32) {
        // Round to the step grid so repeated presses land on exact values
        let steps = ((self.master_volume + delta) / VOLUME_STEP).round();
        self.master_volume = (steps * VOLUME_STEP).clamp(0.0, 1.0);
    }

    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, PersistenceError> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| PersistenceError::Parse(e.to_string()))
    }

    /// Load settings, falling back to defaults if the file is missing or bad
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(PersistenceError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring settings at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = Settings::default();
        settings.toggle_mute();
        settings.toggle_timer();
        settings.save(&path).unwrap();

        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_or_default(&dir.path().join("nope.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ master_volume: loud").unwrap();
        assert!(matches!(Settings::load(&path), Err(PersistenceError::Parse(_))));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut settings = Settings::default();
        for _ in 0..5 {
            settings.adjust_master_volume(VOLUME_STEP);
        }
        assert_eq!(settings.master_volume, 1.0);
        for _ in 0..15 {
            settings.adjust_master_volume(-VOLUME_STEP);
        }
        assert_eq!(settings.master_volume, 0.0);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "muted": true }"#).unwrap();
        let settings = Settings::load(&path).unwrap();
        assert!(settings.muted);
        assert_eq!(settings.master_volume, 0.8);
    }
}
