use image::RgbaImage;

use crate::icon::domain::icon_renderer::IconRenderer;
use crate::shared::constants::ICON_SIZE;
use crate::shared::theme_mode::ThemeMode;

use super::canvas::Canvas;
use super::palette::{GOLD, MIDNIGHT_BLUE, SILVER, WHITE};

const RAY_WIDTH: f32 = 2.0;

/// Sun rays as `(x0, y0, x1, y1)`: four axis-aligned, then four diagonal.
const SUN_RAYS: [(f32, f32, f32, f32); 8] = [
    (16.0, 0.0, 16.0, 4.0),
    (28.0, 16.0, 32.0, 16.0),
    (16.0, 28.0, 16.0, 32.0),
    (0.0, 16.0, 4.0, 16.0),
    (5.0, 5.0, 8.0, 8.0),
    (27.0, 5.0, 24.0, 8.0),
    (5.0, 27.0, 8.0, 24.0),
    (27.0, 27.0, 24.0, 24.0),
];

/// Stars as `(x, y, diameter)`.
const STARS: [(f32, f32, f32); 5] = [
    (3.0, 3.0, 2.0),
    (26.0, 8.0, 2.0),
    (20.0, 2.0, 1.0),
    (5.0, 20.0, 1.0),
    (28.0, 24.0, 2.0),
];

/// Draws a full-bleed sun (light) or crescent moon with stars (dark).
pub struct GlyphIconRenderer;

impl GlyphIconRenderer {
    pub fn new() -> Self {
        Self
    }

    fn draw_sun(canvas: &mut Canvas) {
        canvas.clear(WHITE);
        canvas.fill_ellipse(6.0, 6.0, 20.0, 20.0, GOLD);
        for (x0, y0, x1, y1) in SUN_RAYS {
            canvas.stroke_line(x0, y0, x1, y1, RAY_WIDTH, GOLD);
        }
    }

    fn draw_moon(canvas: &mut Canvas) {
        canvas.clear(MIDNIGHT_BLUE);
        // The crescent is a silver disc with an offset background disc on top.
        canvas.fill_ellipse(8.0, 6.0, 20.0, 20.0, SILVER);
        canvas.fill_ellipse(12.0, 4.0, 20.0, 20.0, MIDNIGHT_BLUE);
        for (x, y, d) in STARS {
            canvas.fill_ellipse(x, y, d, d, WHITE);
        }
    }
}

impl Default for GlyphIconRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl IconRenderer for GlyphIconRenderer {
    fn render(&self, mode: ThemeMode) -> RgbaImage {
        let mut canvas = Canvas::new(ICON_SIZE, ICON_SIZE);
        match mode {
            ThemeMode::Light => Self::draw_sun(&mut canvas),
            ThemeMode::Dark => Self::draw_moon(&mut canvas),
        }
        canvas.into_image()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(mode: ThemeMode) -> RgbaImage {
        GlyphIconRenderer::new().render(mode)
    }

    #[test]
    fn test_icons_are_opaque() {
        for &mode in ThemeMode::ALL {
            assert!(render(mode).pixels().all(|p| p[3] == 255));
        }
    }

    #[test]
    fn test_sun_on_white() {
        let img = render(ThemeMode::Light);
        assert_eq!(*img.get_pixel(0, 0), WHITE);
        assert_eq!(*img.get_pixel(16, 16), GOLD);
    }

    #[test]
    fn test_sun_has_top_ray() {
        assert_eq!(*render(ThemeMode::Light).get_pixel(16, 2), GOLD);
    }

    #[test]
    fn test_moon_crescent_and_carved_side() {
        let img = render(ThemeMode::Dark);
        assert_eq!(*img.get_pixel(9, 16), SILVER);
        assert_eq!(*img.get_pixel(22, 14), MIDNIGHT_BLUE);
    }

    #[test]
    fn test_moon_background_and_star() {
        let img = render(ThemeMode::Dark);
        assert_eq!(*img.get_pixel(0, 0), MIDNIGHT_BLUE);
        assert_eq!(*img.get_pixel(4, 4), WHITE);
    }
}
