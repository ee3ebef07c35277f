//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup and saved when changed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::ThemeMode;

/// Errors from reading or writing the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display settings.
    pub display: DisplaySettings,

    /// Initial window geometry.
    pub window: WindowSettings,

    /// Developer settings (advanced options).
    pub developer: DeveloperSettings,
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path, falling back to defaults.
    ///
    /// A missing file is silent; an unreadable or malformed one is logged.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::try_load_from(path) {
            Ok(settings) => settings,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "Ignoring unreadable settings file");
                Self::default()
            }
        }
    }

    /// Load settings from a specific path.
    pub fn try_load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let io_error = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(io_error)
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "ContactForm", "ContactForm")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// DISPLAY SETTINGS
// =============================================================================

/// Display settings for the UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Theme mode (light/dark).
    pub theme_mode: ThemeMode,
}

// =============================================================================
// WINDOW SETTINGS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 760.0,
        }
    }
}

// =============================================================================
// DEVELOPER SETTINGS
// =============================================================================

/// Developer settings (advanced options).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeveloperSettings {
    /// Include typed field values in log output.
    ///
    /// Off by default; values are replaced with a redaction marker.
    pub log_values: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("absent.toml"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.window.width, 640.0);
        assert!(!settings.developer.log_values);
    }

    #[test]
    fn save_then_load_restores_theme_and_window() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut settings = Settings::default();
        settings.display.theme_mode = ThemeMode::Dark;
        settings.window.width = 800.0;
        settings.save_to(&path).unwrap();

        let loaded = Settings::try_load_from(&path).unwrap();
        assert_eq!(loaded.display.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.window.width, 800.0);
        assert_eq!(loaded.window.height, 760.0);
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[developer]\nlog_values = true\n").unwrap();

        let settings = Settings::load_from(&path);
        assert!(settings.developer.log_values);
        assert_eq!(settings.display.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn malformed_file_is_a_parse_error_but_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[display\ntheme_mode = ").unwrap();

        assert!(matches!(
            Settings::try_load_from(&path),
            Err(SettingsError::Parse(_))
        ));
        assert_eq!(Settings::load_from(&path), Settings::default());
    }
}
