use image::RgbaImage;

use crate::icon::domain::icon_renderer::IconRenderer;
use crate::shared::constants::ICON_SIZE;
use crate::shared::theme_mode::ThemeMode;

use super::canvas::Canvas;
use super::palette::{
    DARK_BLUE, LIGHT_BLUE, ORANGE, SLATE_GRAY, TRANSPARENT, WHITE, YELLOW,
};

const KNOB_X_LIGHT: f32 = 18.0;
const KNOB_X_DARK: f32 = 6.0;
const KNOB_Y: f32 = 9.0;
const KNOB_DIAMETER: f32 = 16.0;

/// Draws a toggle switch on a transparent background.
///
/// Light mode: light-blue track, white knob on the right with an orange sun.
/// Dark mode: dark-blue track, slate knob on the left with a yellow crescent.
/// The light knob deliberately overhangs the right edge and is clipped.
pub struct ToggleIconRenderer;

impl ToggleIconRenderer {
    pub fn new() -> Self {
        Self
    }

    fn draw_sun(canvas: &mut Canvas, knob_x: f32) {
        canvas.stroke_ellipse(knob_x + 5.0, 14.0, 6.0, 6.0, 1.0, ORANGE);
        let cx = knob_x + 8.0;
        canvas.stroke_line(cx, 11.0, cx, 13.0, 1.0, ORANGE);
        canvas.stroke_line(cx, 21.0, cx, 23.0, 1.0, ORANGE);
        canvas.stroke_line(knob_x + 3.0, 17.0, knob_x + 5.0, 17.0, 1.0, ORANGE);
        canvas.stroke_line(knob_x + 11.0, 17.0, knob_x + 13.0, 17.0, 1.0, ORANGE);
    }

    fn draw_moon(canvas: &mut Canvas, knob_x: f32) {
        canvas.stroke_arc(knob_x + 4.0, 12.0, 8.0, 10.0, 30.0, 180.0, 1.0, YELLOW);
    }
}

impl Default for ToggleIconRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl IconRenderer for ToggleIconRenderer {
    fn render(&self, mode: ThemeMode) -> RgbaImage {
        let mut canvas = Canvas::new(ICON_SIZE, ICON_SIZE);
        canvas.clear(TRANSPARENT);

        let (track, knob, knob_x) = match mode {
            ThemeMode::Light => (LIGHT_BLUE, WHITE, KNOB_X_LIGHT),
            ThemeMode::Dark => (DARK_BLUE, SLATE_GRAY, KNOB_X_DARK),
        };

        canvas.fill_rounded_rect(4.0, 12.0, 24.0, 10.0, 5.0, track);
        canvas.fill_ellipse(knob_x, KNOB_Y, KNOB_DIAMETER, KNOB_DIAMETER, knob);

        match mode {
            ThemeMode::Light => Self::draw_sun(&mut canvas, knob_x),
            ThemeMode::Dark => Self::draw_moon(&mut canvas, knob_x),
        }

        canvas.into_image()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(mode: ThemeMode) -> RgbaImage {
        ToggleIconRenderer::new().render(mode)
    }

    #[test]
    fn test_icon_is_32_square() {
        let img = render(ThemeMode::Light);
        assert_eq!(img.dimensions(), (32, 32));
    }

    #[test]
    fn test_background_is_transparent() {
        for &mode in ThemeMode::ALL {
            let img = render(mode);
            assert_eq!(img.get_pixel(0, 0)[3], 0);
            assert_eq!(img.get_pixel(16, 2)[3], 0);
        }
    }

    #[test]
    fn test_light_track_visible_left_of_knob() {
        assert_eq!(*render(ThemeMode::Light).get_pixel(6, 17), LIGHT_BLUE);
    }

    #[test]
    fn test_light_knob_is_white_on_the_right() {
        assert_eq!(*render(ThemeMode::Light).get_pixel(26, 17), WHITE);
    }

    #[test]
    fn test_light_knob_carries_orange_sun() {
        assert_eq!(*render(ThemeMode::Light).get_pixel(29, 17), ORANGE);
    }

    #[test]
    fn test_dark_knob_is_slate_on_the_left() {
        assert_eq!(*render(ThemeMode::Dark).get_pixel(14, 17), SLATE_GRAY);
    }

    #[test]
    fn test_dark_track_visible_right_of_knob() {
        assert_eq!(*render(ThemeMode::Dark).get_pixel(26, 17), DARK_BLUE);
    }

    #[test]
    fn test_dark_crescent_only_on_lower_left() {
        let img = render(ThemeMode::Dark);
        // Bottom of the arc (90°) is inside the 30°..210° sweep.
        assert_eq!(*img.get_pixel(14, 22), YELLOW);
        // Top (270°) is outside, so the knob shows through.
        assert_eq!(*img.get_pixel(14, 12), SLATE_GRAY);
    }

    #[test]
    fn test_modes_differ() {
        assert_ne!(render(ThemeMode::Light), render(ThemeMode::Dark));
    }
}
