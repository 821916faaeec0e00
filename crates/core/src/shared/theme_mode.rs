use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::constants::{APPS_VALUE_NAME, SYSTEM_VALUE_NAME};

/// The two appearance modes Windows knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: &[ThemeMode] = &[ThemeMode::Light, ThemeMode::Dark];

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Interprets a `*UseLightTheme` DWORD. Only `1` means light.
    pub fn from_registry_value(value: u32) -> Self {
        if value == 1 {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    pub fn registry_value(self) -> u32 {
        match self {
            ThemeMode::Light => 1,
            ThemeMode::Dark => 0,
        }
    }

    pub fn is_light(self) -> bool {
        self == ThemeMode::Light
    }

    /// Human-readable label used in the tray tooltip.
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light Mode",
            ThemeMode::Dark => "Dark Mode",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("mode must be 'light' or 'dark', got '{other}'")),
        }
    }
}

/// One of the two registry values a theme change can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeTarget {
    /// Colors of application windows.
    Apps,
    /// Colors of the taskbar, Start menu and other shell surfaces.
    System,
}

impl ThemeTarget {
    pub const ALL: &[ThemeTarget] = &[ThemeTarget::Apps, ThemeTarget::System];

    pub fn value_name(self) -> &'static str {
        match self {
            ThemeTarget::Apps => APPS_VALUE_NAME,
            ThemeTarget::System => SYSTEM_VALUE_NAME,
        }
    }
}

impl fmt::Display for ThemeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeTarget::Apps => write!(f, "apps"),
            ThemeTarget::System => write!(f, "system"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_toggled_flips_mode() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[rstest]
    #[case::one_is_light(1, ThemeMode::Light)]
    #[case::zero_is_dark(0, ThemeMode::Dark)]
    #[case::unexpected_is_dark(2, ThemeMode::Dark)]
    #[case::max_is_dark(u32::MAX, ThemeMode::Dark)]
    fn test_from_registry_value(#[case] value: u32, #[case] expected: ThemeMode) {
        assert_eq!(ThemeMode::from_registry_value(value), expected);
    }

    #[test]
    fn test_registry_value_matches_windows_convention() {
        assert_eq!(ThemeMode::Light.registry_value(), 1);
        assert_eq!(ThemeMode::Dark.registry_value(), 0);
    }

    #[rstest]
    #[case("light", ThemeMode::Light)]
    #[case("Dark", ThemeMode::Dark)]
    #[case("LIGHT", ThemeMode::Light)]
    fn test_parse_is_case_insensitive(#[case] input: &str, #[case] expected: ThemeMode) {
        assert_eq!(input.parse::<ThemeMode>().unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        let err = "dim".parse::<ThemeMode>().unwrap_err();
        assert!(err.contains("dim"));
    }

    #[test]
    fn test_display_parses_back() {
        for &mode in ThemeMode::ALL {
            assert_eq!(mode.to_string().parse::<ThemeMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_target_value_names() {
        assert_eq!(ThemeTarget::Apps.value_name(), "AppsUseLightTheme");
        assert_eq!(ThemeTarget::System.value_name(), "SystemUsesLightTheme");
    }
}
