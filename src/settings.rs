//! Runtime settings
//!
//! Read from a JSON file next to the binary. Missing keys take their
//! default, a missing file means all defaults.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Viewport ===
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Movement ===
    /// Player displacement per tick while a direction is held
    pub player_speed: f32,
    /// Enemy displacement per tick while chasing
    pub enemy_speed: f32,
    /// Allow up/down movement (horizontal only in the current build)
    pub vertical_movement: bool,

    // === Combat ===
    /// Max pointer-to-player distance for a click attack, in tiles
    pub attack_range_tiles: f32,
    /// Potions heal on contact (off: potions are inert)
    pub potion_pickup: bool,

    // === Assets ===
    pub asset_root: PathBuf,
    pub map_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: crate::consts::SCREEN_WIDTH,
            viewport_height: crate::consts::SCREEN_HEIGHT,

            player_speed: 2.0,
            enemy_speed: 1.0,
            vertical_movement: false,

            attack_range_tiles: 5.0,
            potion_pickup: false,

            asset_root: PathBuf::from("assets"),
            map_path: PathBuf::from("assets/maps/spawn.json"),
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "settings.json";

    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    /// Load from a JSON file. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(Error::io(path, e)),
        };
        let settings = Self::from_json(path, &json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(path: &Path, json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::json(path, e))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| Error::json(path, e))?;
        std::fs::write(path, json).map_err(|e| Error::io(path, e))?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(Path::new("s.json"), r#"{"potion_pickup": true}"#).unwrap();
        assert!(settings.potion_pickup);
        assert_eq!(settings.player_speed, 2.0);
        assert_eq!(settings.viewport(), Vec2::new(320.0, 240.0));
    }

    #[test]
    fn test_missing_file_is_default() {
        let settings = Settings::load(Path::new("no/such/settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = Settings::from_json(Path::new("s.json"), "{ nope").unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "dummy_cat_settings_test_{}.json",
            std::process::id()
        ));
        let mut settings = Settings::default();
        settings.enemy_speed = 0.5;
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
        let _ = std::fs::remove_file(path);
    }
}
