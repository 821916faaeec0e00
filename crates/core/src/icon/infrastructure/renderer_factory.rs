use crate::icon::domain::icon_renderer::IconRenderer;
use crate::icon::domain::icon_style::IconStyle;

use super::glyph_icon_renderer::GlyphIconRenderer;
use super::toggle_icon_renderer::ToggleIconRenderer;

/// Creates the renderer for `style`.
pub fn create_renderer(style: IconStyle) -> Box<dyn IconRenderer> {
    log::debug!("Using {style} icon renderer");
    match style {
        IconStyle::Toggle => Box::new(ToggleIconRenderer::new()),
        IconStyle::Glyph => Box::new(GlyphIconRenderer::new()),
    }
}
