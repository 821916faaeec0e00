use crate::shared::theme_error::ThemeError;
use crate::theme::domain::privilege_broker::PrivilegeBroker;
use crate::theme::domain::shell_notifier::ShellNotifier;
use crate::theme::domain::theme_store::ThemeStore;

use super::null_shell_notifier::NullShellNotifier;

/// Creates the theme store for the host platform.
///
/// Only Windows persists a light/dark preference this crate understands;
/// elsewhere this returns [`ThemeError::Unsupported`].
pub fn create_theme_store() -> Result<Box<dyn ThemeStore>, ThemeError> {
    #[cfg(target_os = "windows")]
    {
        log::info!("Using registry theme store");
        Ok(Box::new(super::registry_theme_store::RegistryThemeStore::new()))
    }
    #[cfg(not(target_os = "windows"))]
    {
        log::warn!("No theme store available on this platform");
        Err(ThemeError::Unsupported)
    }
}

/// Creates the shell notifier for the host platform, or a silent one when
/// `notify` is false or nothing listens for theme broadcasts.
pub fn create_shell_notifier(notify: bool) -> Box<dyn ShellNotifier> {
    if !notify {
        log::info!("Shell notification disabled");
        return Box::new(NullShellNotifier);
    }
    #[cfg(target_os = "windows")]
    {
        Box::new(super::broadcast_shell_notifier::BroadcastShellNotifier::new())
    }
    #[cfg(not(target_os = "windows"))]
    {
        Box::new(NullShellNotifier)
    }
}

pub fn create_privilege_broker() -> Box<dyn PrivilegeBroker> {
    #[cfg(target_os = "windows")]
    {
        Box::new(super::windows_privilege_broker::WindowsPrivilegeBroker::new())
    }
    #[cfg(not(target_os = "windows"))]
    {
        Box::new(UnelevatedBroker)
    }
}

/// Broker for platforms without a UAC-style elevation prompt.
pub struct UnelevatedBroker;

impl PrivilegeBroker for UnelevatedBroker {
    fn is_elevated(&self) -> bool {
        false
    }

    fn relaunch_elevated(&self) -> Result<(), ThemeError> {
        Err(ThemeError::Unsupported)
    }
}
