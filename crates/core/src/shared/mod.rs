pub mod constants;
pub mod theme_error;
pub mod theme_mode;
pub mod theme_scope;
