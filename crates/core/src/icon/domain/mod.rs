pub mod icon_renderer;
pub mod icon_set;
pub mod icon_style;
