use image::{Rgba, RgbaImage};

/// Sub-samples per pixel along each axis.
const SAMPLES: u32 = 4;

/// Small anti-aliased raster for drawing tray icons.
///
/// Coordinates follow the GDI+ convention: integer coordinates sit on pixel
/// centers, so pixel `(px, py)` covers `[px - 0.5, px + 0.5)` on each axis.
/// Shapes are described by their bounding box (`x, y, w, h`) like
/// `Graphics.FillEllipse`. Coverage is estimated with a 4×4 sample grid and
/// composited source-over onto straight-alpha RGBA.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// A fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Replaces every pixel, alpha included.
    pub fn clear(&mut self, color: Rgba<u8>) {
        for p in self.image.pixels_mut() {
            *p = color;
        }
    }

    pub fn fill_ellipse(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba<u8>) {
        let (cx, cy, rx, ry) = ellipse_geometry(x, y, w, h);
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        self.paint((x, y, x + w, y + h), color, |sx, sy| {
            inside_ellipse(sx - cx, sy - cy, rx, ry)
        });
    }

    /// Outlines an ellipse with a pen of `width` centered on the edge.
    pub fn stroke_ellipse(&mut self, x: f32, y: f32, w: f32, h: f32, width: f32, color: Rgba<u8>) {
        self.stroke_arc(x, y, w, h, 0.0, 360.0, width, color);
    }

    /// Outlines the part of an ellipse between `start_deg` and
    /// `start_deg + sweep_deg`. Angles run clockwise from the positive x axis,
    /// as on screen with y pointing down.
    #[allow(clippy::too_many_arguments)]
    pub fn stroke_arc(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        start_deg: f32,
        sweep_deg: f32,
        width: f32,
        color: Rgba<u8>,
    ) {
        let (cx, cy, rx, ry) = ellipse_geometry(x, y, w, h);
        let half = width / 2.0;
        let (outer_x, outer_y) = (rx + half, ry + half);
        let (inner_x, inner_y) = (rx - half, ry - half);
        if outer_x <= 0.0 || outer_y <= 0.0 || sweep_deg <= 0.0 {
            return;
        }
        let full_circle = sweep_deg >= 360.0;

        self.paint(
            (x - half, y - half, x + w + half, y + h + half),
            color,
            |sx, sy| {
                let (dx, dy) = (sx - cx, sy - cy);
                if !inside_ellipse(dx, dy, outer_x, outer_y) {
                    return false;
                }
                if inner_x > 0.0 && inner_y > 0.0 && inside_ellipse(dx, dy, inner_x, inner_y) {
                    return false;
                }
                full_circle || angle_in_sweep(dy.atan2(dx).to_degrees(), start_deg, sweep_deg)
            },
        );
    }

    /// Draws a straight line with flat caps.
    pub fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: Rgba<u8>) {
        let half = width / 2.0;
        let (dx, dy) = (x1 - x0, y1 - y0);
        let len_sq = dx * dx + dy * dy;
        let bounds = (
            x0.min(x1) - half,
            y0.min(y1) - half,
            x0.max(x1) + half,
            y0.max(y1) + half,
        );

        self.paint(bounds, color, |sx, sy| {
            let (px, py) = (sx - x0, sy - y0);
            if len_sq == 0.0 {
                return px.abs() <= half && py.abs() <= half;
            }
            let t = (px * dx + py * dy) / len_sq;
            if !(0.0..=1.0).contains(&t) {
                return false;
            }
            let cross = px * dy - py * dx;
            cross.abs() / len_sq.sqrt() <= half
        });
    }

    /// Fills a rectangle with rounded corners. A radius of at least half the
    /// shorter side yields a capsule.
    pub fn fill_rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32, color: Rgba<u8>) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let r = radius.max(0.0).min(w.min(h) / 2.0);
        let (right, bottom) = (x + w, y + h);

        self.paint((x, y, right, bottom), color, |sx, sy| {
            if sx < x || sx > right || sy < y || sy > bottom {
                return false;
            }
            let nearest_x = sx.clamp(x + r, right - r);
            let nearest_y = sy.clamp(y + r, bottom - r);
            let (ddx, ddy) = (sx - nearest_x, sy - nearest_y);
            ddx * ddx + ddy * ddy <= r * r
        });
    }

    /// Blends `color` into every pixel touched by `bounds`, weighted by the
    /// fraction of sub-samples for which `inside` holds.
    fn paint<F>(&mut self, bounds: (f32, f32, f32, f32), color: Rgba<u8>, inside: F)
    where
        F: Fn(f32, f32) -> bool,
    {
        let (width, height) = (self.image.width() as i64, self.image.height() as i64);
        let x_start = ((bounds.0 - 0.5).floor() as i64).max(0);
        let y_start = ((bounds.1 - 0.5).floor() as i64).max(0);
        let x_end = ((bounds.2 + 0.5).ceil() as i64).min(width - 1);
        let y_end = ((bounds.3 + 0.5).ceil() as i64).min(height - 1);
        if x_start > x_end || y_start > y_end {
            return;
        }

        let step = 1.0 / SAMPLES as f32;
        let total = (SAMPLES * SAMPLES) as f32;

        for py in y_start..=y_end {
            for px in x_start..=x_end {
                let mut hits = 0u32;
                for j in 0..SAMPLES {
                    let sy = py as f32 - 0.5 + (j as f32 + 0.5) * step;
                    for i in 0..SAMPLES {
                        let sx = px as f32 - 0.5 + (i as f32 + 0.5) * step;
                        if inside(sx, sy) {
                            hits += 1;
                        }
                    }
                }
                if hits > 0 {
                    let dst = self.image.get_pixel_mut(px as u32, py as u32);
                    blend(dst, color, hits as f32 / total);
                }
            }
        }
    }
}

fn ellipse_geometry(x: f32, y: f32, w: f32, h: f32) -> (f32, f32, f32, f32) {
    (x + w / 2.0, y + h / 2.0, w / 2.0, h / 2.0)
}

fn inside_ellipse(dx: f32, dy: f32, rx: f32, ry: f32) -> bool {
    let nx = dx / rx;
    let ny = dy / ry;
    nx * nx + ny * ny <= 1.0
}

fn angle_in_sweep(angle_deg: f32, start_deg: f32, sweep_deg: f32) -> bool {
    (angle_deg - start_deg).rem_euclid(360.0) <= sweep_deg
}

/// Source-over compositing on straight (non-premultiplied) alpha.
fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>, coverage: f32) {
    let sa = src[3] as f32 / 255.0 * coverage;
    if sa <= 0.0 {
        return;
    }
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    for c in 0..3 {
        let v = (src[c] as f32 * sa + dst[c] as f32 * da * (1.0 - sa)) / out_a;
        dst[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = Canvas::new(8, 8);
        assert_eq!(canvas.pixel(0, 0), CLEAR);
        assert_eq!(canvas.pixel(7, 7), CLEAR);
    }

    #[test]
    fn test_clear_sets_every_pixel() {
        let mut canvas = Canvas::new(4, 4);
        canvas.clear(WHITE);
        assert!(canvas.into_image().pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn test_fill_ellipse_center_and_outside() {
        let mut canvas = Canvas::new(32, 32);
        canvas.fill_ellipse(6.0, 6.0, 20.0, 20.0, RED);
        assert_eq!(canvas.pixel(16, 16), RED);
        assert_eq!(canvas.pixel(1, 1), CLEAR);
        assert_eq!(canvas.pixel(30, 16), CLEAR);
    }

    #[test]
    fn test_fill_ellipse_edge_is_antialiased() {
        let mut canvas = Canvas::new(32, 32);
        canvas.fill_ellipse(6.0, 6.0, 20.0, 20.0, RED);
        // Pixel (6, 16) straddles the leftmost point of the ellipse.
        let alpha = canvas.pixel(6, 16)[3];
        assert!(alpha > 0 && alpha < 255, "alpha was {alpha}");
    }

    #[test]
    fn test_zero_sized_ellipse_draws_nothing() {
        let mut canvas = Canvas::new(8, 8);
        canvas.fill_ellipse(2.0, 2.0, 0.0, 4.0, RED);
        assert!(canvas.into_image().pixels().all(|p| *p == CLEAR));
    }

    #[test]
    fn test_stroke_ellipse_leaves_center_empty() {
        let mut canvas = Canvas::new(32, 32);
        canvas.stroke_ellipse(6.0, 6.0, 20.0, 20.0, 2.0, RED);
        assert_eq!(canvas.pixel(16, 16), CLEAR);
        assert_eq!(canvas.pixel(26, 16), RED);
    }

    #[test]
    fn test_horizontal_line_covers_its_row() {
        let mut canvas = Canvas::new(16, 16);
        canvas.stroke_line(2.0, 8.0, 12.0, 8.0, 2.0, RED);
        assert_eq!(canvas.pixel(7, 8), RED);
        assert_eq!(canvas.pixel(7, 12), CLEAR);
    }

    #[test]
    fn test_line_has_flat_caps() {
        let mut canvas = Canvas::new(16, 16);
        canvas.stroke_line(4.0, 8.0, 10.0, 8.0, 2.0, RED);
        assert_eq!(canvas.pixel(2, 8), CLEAR);
        assert_eq!(canvas.pixel(12, 8), CLEAR);
    }

    #[test]
    fn test_diagonal_line() {
        let mut canvas = Canvas::new(16, 16);
        canvas.stroke_line(2.0, 2.0, 12.0, 12.0, 2.0, RED);
        assert_eq!(canvas.pixel(7, 7), RED);
        assert_eq!(canvas.pixel(12, 2), CLEAR);
    }

    #[test]
    fn test_shapes_clip_to_canvas() {
        let mut canvas = Canvas::new(8, 8);
        canvas.fill_ellipse(4.0, 4.0, 16.0, 16.0, RED);
        canvas.stroke_line(-10.0, -10.0, -2.0, -2.0, 2.0, RED);
        assert_eq!(canvas.pixel(7, 7), RED);
        assert_eq!(canvas.pixel(0, 0), CLEAR);
    }

    #[test]
    fn test_capsule_has_round_ends() {
        let mut canvas = Canvas::new(32, 32);
        canvas.fill_rounded_rect(4.0, 12.0, 24.0, 10.0, 5.0, RED);
        assert_eq!(canvas.pixel(16, 17), RED);
        // Bounding-box corner lies outside the rounded end.
        assert_eq!(canvas.pixel(4, 12), CLEAR);
    }

    #[test]
    fn test_oversized_radius_is_clamped() {
        let mut a = Canvas::new(32, 32);
        let mut b = Canvas::new(32, 32);
        a.fill_rounded_rect(4.0, 12.0, 24.0, 10.0, 5.0, RED);
        b.fill_rounded_rect(4.0, 12.0, 24.0, 10.0, 50.0, RED);
        assert_eq!(a.into_image(), b.into_image());
    }

    #[test]
    fn test_zero_radius_is_plain_rect() {
        let mut canvas = Canvas::new(16, 16);
        canvas.fill_rounded_rect(2.0, 2.0, 10.0, 10.0, 0.0, RED);
        assert_eq!(canvas.pixel(3, 3), RED);
        assert_eq!(canvas.pixel(11, 11), RED);
    }

    #[test]
    fn test_arc_draws_only_its_sweep() {
        let mut canvas = Canvas::new(32, 32);
        // Lower half: 0° (right) through 90° (down) to 180° (left).
        canvas.stroke_arc(6.0, 6.0, 20.0, 20.0, 0.0, 180.0, 2.0, RED);
        assert_eq!(canvas.pixel(16, 26), RED);
        assert_eq!(canvas.pixel(16, 6), CLEAR);
    }

    #[rstest]
    #[case::inside(45.0, 30.0, 180.0, true)]
    #[case::start_edge(30.0, 30.0, 180.0, true)]
    #[case::before_start(10.0, 30.0, 180.0, false)]
    #[case::negative_angle(-90.0, 30.0, 180.0, false)]
    #[case::wraps_past_360(-170.0, 30.0, 180.0, true)]
    fn test_angle_in_sweep(
        #[case] angle: f32,
        #[case] start: f32,
        #[case] sweep: f32,
        #[case] expected: bool,
    ) {
        assert_eq!(angle_in_sweep(angle, start, sweep), expected);
    }

    #[test]
    fn test_blend_full_coverage_replaces() {
        let mut dst = WHITE;
        blend(&mut dst, RED, 1.0);
        assert_eq!(dst, RED);
    }

    #[test]
    fn test_blend_half_coverage_on_transparent() {
        let mut dst = CLEAR;
        blend(&mut dst, RED, 0.5);
        assert_eq!(dst[0], 255);
        assert_relative_eq!(dst[3] as f32, 128.0, epsilon = 1.0);
    }

    #[test]
    fn test_blend_half_coverage_on_opaque_mixes() {
        let mut dst = WHITE;
        blend(&mut dst, Rgba([0, 0, 0, 255]), 0.5);
        assert_relative_eq!(dst[0] as f32, 127.5, epsilon = 1.0);
        assert_eq!(dst[3], 255);
    }
}
