pub mod toggle_theme_use_case;
