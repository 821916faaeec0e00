use crate::shared::theme_error::ThemeError;
use crate::theme::domain::shell_notifier::ShellNotifier;

/// Notifier that skips the broadcast.
///
/// Used by `darkmode --no-notify` and by tests where the shell is irrelevant.
pub struct NullShellNotifier;

impl ShellNotifier for NullShellNotifier {
    fn notify_theme_changed(&self) -> Result<(), ThemeError> {
        Ok(())
    }
}
