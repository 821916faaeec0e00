use crate::shared::theme_error::ThemeError;
use crate::shared::theme_mode::{ThemeMode, ThemeTarget};

/// Domain interface for the persisted light/dark preference.
///
/// Reads report `None` when nothing is stored for `target`, letting the
/// caller pick the default.
pub trait ThemeStore: Send {
    fn read(&self, target: ThemeTarget) -> Result<Option<ThemeMode>, ThemeError>;

    fn write(&mut self, target: ThemeTarget, mode: ThemeMode) -> Result<(), ThemeError>;
}
