use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Visual family of the tray icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    /// A toggle switch whose knob sits right for light and left for dark.
    #[default]
    Toggle,
    /// A sun on white for light, a crescent moon with stars for dark.
    Glyph,
}

impl IconStyle {
    pub const ALL: &[IconStyle] = &[IconStyle::Toggle, IconStyle::Glyph];

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            IconStyle::Toggle => "Toggle Switch",
            IconStyle::Glyph => "Sun and Moon",
        }
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconStyle::Toggle => write!(f, "toggle"),
            IconStyle::Glyph => write!(f, "glyph"),
        }
    }
}

impl FromStr for IconStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "toggle" => Ok(IconStyle::Toggle),
            "glyph" => Ok(IconStyle::Glyph),
            other => Err(format!(
                "icon style must be 'toggle' or 'glyph', got '{other}'"
            )),
        }
    }
}
