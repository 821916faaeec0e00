pub mod canvas;
pub mod glyph_icon_renderer;
pub mod icon_file_writer;
mod palette;
pub mod renderer_factory;
pub mod toggle_icon_renderer;
