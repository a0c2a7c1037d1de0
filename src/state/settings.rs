//! User settings for the browser
//!
//! Stored as JSON in the user's config directory:
//! - Linux: ~/.config/stamps/settings.json
//! - macOS: ~/Library/Application Support/stamps/settings.json
//! - Windows: %APPDATA%\stamps\settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::data::Footprint;
use crate::error::Result;

const APP_DIR: &str = "stamps";
const SETTINGS_FILE: &str = "settings.json";

/// All persisted browser settings
///
/// Missing fields fall back to their defaults, so older files keep loading.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    // ========== Grid ==========

    /// Width reserved for one tile, margins included (pixels)
    pub tile_width: u32,

    /// Height reserved for one tile, margins included (pixels)
    pub tile_height: u32,

    // ========== Window ==========

    /// Initial window width (pixels)
    /// - The default fits four tiles per row
    pub window_width: u32,

    /// Initial window height (pixels)
    pub window_height: u32,

    // ========== Scanning ==========

    /// File extensions shown in listings (case-insensitive, no dot)
    pub extensions: Vec<String>,

    /// Descend into subdirectories when scanning
    pub recursive: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tile_width: 220,
            tile_height: 240,
            window_width: 900,
            window_height: 700,
            extensions: vec!["img".to_string()],
            recursive: false,
        }
    }
}

impl Settings {
    /// Validated tile footprint
    pub fn footprint(&self) -> Result<Footprint> {
        Footprint::new(self.tile_width, self.tile_height)
    }

    /// Convert to JSON string for storage
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from the default location, or defaults if there is none
    pub fn load() -> Result<Self> {
        match default_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Ok(Self::from_json(&json)?)
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<()> {
        if let Some(path) = default_path() {
            self.save_to_path(&path)?;
        }
        Ok(())
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        log::debug!("💾 Settings saved to {}", path.display());
        Ok(())
    }
}

/// Get the path where settings should be stored
fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_DIR);
        path.push(SETTINGS_FILE);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StampError;
    use crate::state::layout::columns_for;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_fit_four_columns() {
        let settings = Settings::default();
        let footprint = settings.footprint().unwrap();
        assert_eq!(columns_for(footprint, settings.window_width).unwrap(), 4);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "tile_width": 128 }"#).unwrap();
        assert_eq!(settings.tile_width, 128);
        assert_eq!(settings.tile_height, 240);
        assert_eq!(settings.extensions, vec!["img".to_string()]);
    }

    #[test]
    fn test_zero_tile_size_rejected() {
        let mut settings = Settings::default();
        settings.tile_height = 0;
        assert!(matches!(
            settings.footprint(),
            Err(StampError::InvalidFootprint { .. })
        ));
    }

    #[test]
    fn test_save_and_load_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE);

        let mut settings = Settings::default();
        settings.recursive = true;
        settings.extensions.push("lbl".to_string());
        settings.save_to_path(&path).unwrap();

        let loaded = Settings::load_from_path(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Settings::load_from_path(&path),
            Err(StampError::Settings(_))
        ));
    }
}
