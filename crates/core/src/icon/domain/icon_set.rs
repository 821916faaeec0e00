use image::RgbaImage;

use crate::shared::theme_mode::ThemeMode;

use super::icon_renderer::IconRenderer;

/// The light and dark icons of one style, rendered once up front.
///
/// The tray swaps between the two on every toggle, so both bitmaps are kept
/// for as long as the tray lives instead of being redrawn.
#[derive(Debug, Clone)]
pub struct IconSet {
    light: RgbaImage,
    dark: RgbaImage,
}

impl IconSet {
    pub fn new(renderer: &dyn IconRenderer) -> Self {
        Self {
            light: renderer.render(ThemeMode::Light),
            dark: renderer.render(ThemeMode::Dark),
        }
    }

    pub fn icon_for(&self, mode: ThemeMode) -> &RgbaImage {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}
