use image::RgbaImage;

use crate::shared::theme_mode::ThemeMode;

/// Domain interface for drawing the tray icon that represents a mode.
///
/// Implementations return a fresh square RGBA bitmap on every call; callers
/// that redraw often should cache the result (see `IconSet`).
pub trait IconRenderer: Send {
    fn render(&self, mode: ThemeMode) -> RgbaImage;
}
