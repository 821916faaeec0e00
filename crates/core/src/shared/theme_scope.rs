use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::theme_mode::ThemeTarget;

/// Which registry values a theme change writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeScope {
    #[default]
    Both,
    #[serde(rename = "apps")]
    AppsOnly,
    #[serde(rename = "system")]
    SystemOnly,
}

impl ThemeScope {
    pub const ALL: &[ThemeScope] = &[
        ThemeScope::Both,
        ThemeScope::AppsOnly,
        ThemeScope::SystemOnly,
    ];

    /// Targets in write order. Apps always comes first.
    pub fn targets(self) -> &'static [ThemeTarget] {
        match self {
            ThemeScope::Both => &[ThemeTarget::Apps, ThemeTarget::System],
            ThemeScope::AppsOnly => &[ThemeTarget::Apps],
            ThemeScope::SystemOnly => &[ThemeTarget::System],
        }
    }

    pub fn includes(self, target: ThemeTarget) -> bool {
        self.targets().contains(&target)
    }
}

impl fmt::Display for ThemeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeScope::Both => write!(f, "both"),
            ThemeScope::AppsOnly => write!(f, "apps"),
            ThemeScope::SystemOnly => write!(f, "system"),
        }
    }
}

impl FromStr for ThemeScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "both" => Ok(ThemeScope::Both),
            "apps" => Ok(ThemeScope::AppsOnly),
            "system" => Ok(ThemeScope::SystemOnly),
            other => Err(format!(
                "scope must be one of: both, apps, system, got '{other}'"
            )),
        }
    }
}
