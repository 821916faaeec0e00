use std::time::Duration;

pub const APP_NAME: &str = "Dark Mode Toggler";

/// Registry key (under `HKEY_CURRENT_USER`) holding the personalization flags.
pub const PERSONALIZE_KEY_PATH: &str =
    r"Software\Microsoft\Windows\CurrentVersion\Themes\Personalize";
pub const APPS_VALUE_NAME: &str = "AppsUseLightTheme";
pub const SYSTEM_VALUE_NAME: &str = "SystemUsesLightTheme";

/// `lParam` of the `WM_SETTINGCHANGE` broadcast that makes Explorer and
/// running apps re-read the color scheme.
pub const BROADCAST_AREA: &str = "ImmersiveColorSet";
pub const BROADCAST_TIMEOUT_MS: u32 = 1000;

/// Edge length of the square tray icons, in pixels.
pub const ICON_SIZE: u32 = 32;

/// How often the tray re-reads the registry to pick up changes made elsewhere.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
