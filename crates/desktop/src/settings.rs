use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use darkmode_core::icon::domain::icon_style::IconStyle;
use darkmode_core::shared::constants::DEFAULT_POLL_INTERVAL;
use darkmode_core::shared::theme_scope::ThemeScope;

const MIN_POLL_INTERVAL_SECS: u64 = 1;
const MAX_POLL_INTERVAL_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub icon_style: IconStyle,
    #[serde(default)]
    pub click_scope: ThemeScope,
    #[serde(default = "default_poll_system_theme")]
    pub poll_system_theme: bool,
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

fn default_poll_system_theme() -> bool {
    true
}

fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL.as_secs()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            icon_style: IconStyle::default(),
            click_scope: ThemeScope::default(),
            poll_system_theme: default_poll_system_theme(),
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("DarkModeToggler").join("settings.json"))
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Missing or unreadable files fall back to defaults.
    pub fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|json| match serde_json::from_str(&json) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    log::warn!("Ignoring malformed settings at {}: {e}", path.display());
                    None
                }
            })
            .unwrap_or_default()
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Err(e) = self.save_to(&path) {
                log::warn!("Failed to save settings to {}: {e}", path.display());
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Polling period, between one second and one day.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(
            self.poll_interval_secs
                .clamp(MIN_POLL_INTERVAL_SECS, MAX_POLL_INTERVAL_SECS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.icon_style, IconStyle::Toggle);
        assert_eq!(settings.click_scope, ThemeScope::Both);
        assert!(settings.poll_system_theme);
        assert_eq!(settings.poll_interval(), DEFAULT_POLL_INTERVAL);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = Settings {
            icon_style: IconStyle::Glyph,
            click_scope: ThemeScope::AppsOnly,
            poll_system_theme: false,
            poll_interval_secs: 5,
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Settings::load_from(&dir.path().join("absent.json")), Settings::default());
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "icon_style": "glyph" }"#).unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.icon_style, IconStyle::Glyph);
        assert_eq!(settings.click_scope, ThemeScope::Both);
        assert!(settings.poll_system_theme);
    }

    #[test]
    fn test_scope_serialized_short_names() {
        let settings = Settings {
            click_scope: ThemeScope::SystemOnly,
            ..Settings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains(r#""click_scope":"system""#));
    }

    #[test]
    fn test_poll_interval_clamped() {
        let settings = Settings {
            poll_interval_secs: 0,
            ..Settings::default()
        };
        assert_eq!(settings.poll_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_oversized_poll_interval_is_capped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "poll_interval_secs": 18446744073709551615 }"#).unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.poll_interval_secs, u64::MAX);
        assert_eq!(settings.poll_interval(), Duration::from_secs(24 * 60 * 60));
        assert!(std::time::Instant::now()
            .checked_add(settings.poll_interval())
            .is_some());
    }
}
