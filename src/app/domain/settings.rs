use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::display::{FontChoice, MAX_FONT_SIZE, MIN_FONT_SIZE, ThemeMode};
use crate::app::infrastructure::error::AppError;

/// Startup defaults for the editor. Runtime font and theme changes are
/// not written back here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_font")]
    pub font: FontChoice,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,
}

fn default_font() -> FontChoice {
    FontChoice::Times
}

fn default_font_size() -> u32 {
    12
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Light
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            font: default_font(),
            font_size: default_font_size(),
            theme_mode: default_theme_mode(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<AppSettings>(&contents) {
                Ok(settings) => {
                    if let Err(e) = settings.validate() {
                        tracing::warn!(path = %path.display(), error = %e, "font size will be clamped");
                    }
                    settings
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                let default = Self::default();
                if let Err(e) = default.save_to(path) {
                    tracing::debug!(path = %path.display(), error = %e, "could not write default settings");
                }
                default
            }
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&self.font_size) {
            return Err(AppError::Settings(format!(
                "font size {} outside {}..={}",
                self.font_size, MIN_FONT_SIZE, MAX_FONT_SIZE
            )));
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("ownpad");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.font_size, 12);
        assert_eq!(settings.font, FontChoice::Times);
        assert_eq!(settings.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings {
            font: FontChoice::Courier,
            font_size: 20,
            theme_mode: ThemeMode::Dark,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"theme_mode": "Dark"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.font_size, 12);
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn test_validate_font_size() {
        assert!(AppSettings::default().validate().is_ok());

        let settings = AppSettings {
            font_size: 72,
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert_eq!(err.to_string(), "Settings error: font size 72 outside 8..=40");
    }

    #[test]
    fn test_load_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = AppSettings::load_from(&path);
        assert_eq!(settings, AppSettings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
        // A corrupt file is left for the user to fix.
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = AppSettings {
            font_size: 16,
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(AppSettings::load_from(&path), settings);
    }
}
