use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::theme::ThemeMode;
use crate::app::infrastructure::error::{AppError, Result};

/// Where the initial color scheme comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    SystemDefault,
}

/// Font family and point size of the text area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSetting {
    pub family: String,
    pub size: u32,
}

impl FontSetting {
    /// Build a font from raw dialog input. Returns `None` unless the family is
    /// non-empty and the size is a positive integer.
    pub fn parse(family: Option<&str>, size: Option<&str>) -> Option<Self> {
        let family = family?.trim();
        if family.is_empty() {
            return None;
        }
        let size: i32 = size?.trim().parse().ok()?;
        if size <= 0 {
            return None;
        }
        Some(Self {
            family: family.to_string(),
            size: size as u32,
        })
    }

    /// Size as FLTK expects it, saturating at `i32::MAX`.
    pub fn point_size(&self) -> i32 {
        i32::try_from(self.size).unwrap_or(i32::MAX)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub theme_mode: ThemePreference,

    #[serde(default = "default_font_family")]
    pub font_family: String,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_highlighting")]
    pub highlighting_enabled: bool,

    /// Reserved words for the highlighter; `None` keeps the built-in set.
    #[serde(default)]
    pub keywords: Option<Vec<String>>,

    #[serde(default = "default_window_width")]
    pub window_width: i32,

    #[serde(default = "default_window_height")]
    pub window_height: i32,
}

fn default_font_family() -> String {
    "Arial".to_string()
}

fn default_font_size() -> u32 {
    12
}

fn default_highlighting() -> bool {
    true
}

fn default_window_width() -> i32 {
    800
}

fn default_window_height() -> i32 {
    600
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemePreference::default(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            highlighting_enabled: default_highlighting(),
            keywords: None,
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl AppSettings {
    /// Resolve the theme, calling `detect` only for `SystemDefault`.
    pub fn resolve_theme(&self, detect: impl FnOnce() -> ThemeMode) -> ThemeMode {
        match self.theme_mode {
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::Dark => ThemeMode::Dark,
            ThemePreference::SystemDefault => detect(),
        }
    }

    /// Initial font; a zero size in the file falls back to the default.
    pub fn font(&self) -> FontSetting {
        let family = self.font_family.trim();
        FontSetting {
            family: if family.is_empty() { default_font_family() } else { family.to_string() },
            size: if self.font_size == 0 { default_font_size() } else { self.font_size },
        }
    }

    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        let config_path = Self::get_config_path();
        if !config_path.exists() {
            let default = Self::default();
            // Try to save defaults for next time
            if let Err(e) = default.save_to(&config_path) {
                warn!("Could not write default settings to {}: {}", config_path.display(), e);
            }
            return default;
        }

        match Self::load_from(&config_path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&contents)?;
        if settings.window_width <= 0 || settings.window_height <= 0 {
            return Err(AppError::Settings(format!(
                "invalid window size {}x{}",
                settings.window_width, settings.window_height
            )));
        }
        if i32::try_from(settings.font_size).is_err() {
            return Err(AppError::Settings(format!("invalid font size {}", settings.font_size)));
        }
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
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
        path.push("themepad");
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
        assert_eq!(settings.theme_mode, ThemePreference::SystemDefault);
        assert_eq!(settings.font_family, "Arial");
        assert_eq!(settings.font_size, 12);
        assert!(settings.highlighting_enabled);
        assert!(settings.keywords.is_none());
        assert_eq!((settings.window_width, settings.window_height), (800, 600));
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"font_size": 18, "theme_mode": "Dark"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.font_size, 18);
        assert_eq!(settings.theme_mode, ThemePreference::Dark);
        assert_eq!(settings.font_family, "Arial");
        assert!(settings.highlighting_enabled);
    }

    #[test]
    fn test_resolve_theme() {
        let mut settings = AppSettings::default();
        assert_eq!(settings.resolve_theme(|| ThemeMode::Dark), ThemeMode::Dark);

        settings.theme_mode = ThemePreference::Light;
        assert_eq!(
            settings.resolve_theme(|| panic!("detection must not run")),
            ThemeMode::Light
        );

        settings.theme_mode = ThemePreference::Dark;
        assert_eq!(settings.resolve_theme(|| ThemeMode::Light), ThemeMode::Dark);
    }

    #[test]
    fn test_font_falls_back_on_bad_values() {
        let settings = AppSettings {
            font_family: "  ".to_string(),
            font_size: 0,
            ..Default::default()
        };
        assert_eq!(
            settings.font(),
            FontSetting { family: "Arial".to_string(), size: 12 }
        );
    }

    #[test]
    fn test_save_and_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings {
            theme_mode: ThemePreference::Light,
            font_family: "Times".to_string(),
            keywords: Some(vec!["fn".to_string(), "let".to_string()]),
            ..Default::default()
        };

        settings.save_to(&path).unwrap();
        let loaded = AppSettings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_from_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(AppSettings::load_from(&path), Err(AppError::Json(_))));
    }

    #[test]
    fn test_load_from_rejects_bad_window_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"window_width": 0}"#).unwrap();
        assert!(matches!(AppSettings::load_from(&path), Err(AppError::Settings(_))));
    }

    #[test]
    fn test_load_from_rejects_oversized_font() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"font_size": 3000000000}"#).unwrap();
        assert!(matches!(AppSettings::load_from(&path), Err(AppError::Settings(_))));

        fs::write(&path, r#"{"font_size": 16}"#).unwrap();
        assert_eq!(AppSettings::load_from(&path).unwrap().font_size, 16);
    }

    #[test]
    fn test_point_size_saturates() {
        let font = FontSetting { family: "Arial".to_string(), size: 14 };
        assert_eq!(font.point_size(), 14);
        let huge = FontSetting { family: "Arial".to_string(), size: u32::MAX };
        assert_eq!(huge.point_size(), i32::MAX);
    }

    #[test]
    fn test_font_setting_parse() {
        assert_eq!(
            FontSetting::parse(Some("Helvetica"), Some("14")),
            Some(FontSetting { family: "Helvetica".to_string(), size: 14 })
        );
        assert_eq!(
            FontSetting::parse(Some("  Times "), Some(" 9 ")),
            Some(FontSetting { family: "Times".to_string(), size: 9 })
        );
    }

    #[test]
    fn test_font_setting_parse_rejects_invalid_input() {
        assert_eq!(FontSetting::parse(None, Some("12")), None);
        assert_eq!(FontSetting::parse(Some("Courier"), None), None);
        assert_eq!(FontSetting::parse(Some(""), Some("12")), None);
        assert_eq!(FontSetting::parse(Some("Courier"), Some("")), None);
        assert_eq!(FontSetting::parse(Some("Courier"), Some("0")), None);
        assert_eq!(FontSetting::parse(Some("Courier"), Some("-4")), None);
        assert_eq!(FontSetting::parse(Some("Courier"), Some("big")), None);
    }

    #[test]
    fn test_theme_preference_serialization() {
        let settings = AppSettings {
            theme_mode: ThemePreference::Dark,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"Dark\""));
    }
}
