use darkmode_core::shared::constants::APP_NAME;
use darkmode_core::shared::theme_mode::ThemeMode;
use darkmode_core::shared::theme_scope::ThemeScope;

pub const ICON_STYLE_MENU: &str = "Icon Style";
pub const RESTART_AS_ADMIN: &str = "Restart as Administrator";
pub const EXIT: &str = "Exit";

/// Tray tooltip, e.g. `Dark Mode Toggler (Dark Mode) (Admin)`.
pub fn tooltip(mode: ThemeMode, elevated: bool) -> String {
    let mut text = format!("{APP_NAME} ({})", mode.label());
    if elevated {
        text.push_str(" (Admin)");
    }
    text
}

/// Menu entry for a toggle with the given scope.
pub fn toggle_label(scope: ThemeScope) -> &'static str {
    match scope {
        ThemeScope::Both => "Toggle Theme",
        ThemeScope::AppsOnly => "Toggle App Theme Only",
        ThemeScope::SystemOnly => "Toggle System Theme Only",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ThemeMode::Light, false, "Dark Mode Toggler (Light Mode)")]
    #[case(ThemeMode::Dark, false, "Dark Mode Toggler (Dark Mode)")]
    #[case(ThemeMode::Light, true, "Dark Mode Toggler (Light Mode) (Admin)")]
    #[case(ThemeMode::Dark, true, "Dark Mode Toggler (Dark Mode) (Admin)")]
    fn test_tooltip(#[case] mode: ThemeMode, #[case] elevated: bool, #[case] expected: &str) {
        assert_eq!(tooltip(mode, elevated), expected);
    }

    #[test]
    fn test_tooltip_fits_tray_limit() {
        // Shell_NotifyIcon truncates tooltips at 127 characters.
        assert!(tooltip(ThemeMode::Light, true).len() < 128);
    }

    #[test]
    fn test_toggle_labels_are_distinct() {
        let labels: Vec<_> = ThemeScope::ALL.iter().map(|&s| toggle_label(s)).collect();
        assert_eq!(
            labels,
            ["Toggle Theme", "Toggle App Theme Only", "Toggle System Theme Only"]
        );
    }
}
