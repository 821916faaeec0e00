use crate::shared::theme_error::ThemeError;

/// Tells the running shell and applications that the color scheme changed.
pub trait ShellNotifier: Send {
    fn notify_theme_changed(&self) -> Result<(), ThemeError>;
}
