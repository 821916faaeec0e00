use windows::core::HSTRING;
use windows::Win32::Foundation::{GetLastError, LPARAM, WPARAM};
use windows::Win32::UI::Shell::{SHChangeNotify, SHCNE_ASSOCCHANGED, SHCNF_IDLIST};
use windows::Win32::UI::WindowsAndMessaging::{
    SendMessageTimeoutW, HWND_BROADCAST, SMTO_ABORTIFHUNG, WM_SETTINGCHANGE,
};

use crate::shared::constants::{BROADCAST_AREA, BROADCAST_TIMEOUT_MS};
use crate::shared::theme_error::ThemeError;
use crate::theme::domain::shell_notifier::ShellNotifier;

/// Broadcasts `WM_SETTINGCHANGE("ImmersiveColorSet")` to every top-level
/// window, then pokes the shell with `SHChangeNotify` so Explorer repaints
/// the taskbar.
pub struct BroadcastShellNotifier {
    timeout_ms: u32,
}

impl BroadcastShellNotifier {
    pub fn new() -> Self {
        Self {
            timeout_ms: BROADCAST_TIMEOUT_MS,
        }
    }
}

impl Default for BroadcastShellNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellNotifier for BroadcastShellNotifier {
    fn notify_theme_changed(&self) -> Result<(), ThemeError> {
        let area = HSTRING::from(BROADCAST_AREA);

        // SAFETY: `area` outlives the synchronous send; the receiver only
        // reads the string for the duration of the call.
        let sent = unsafe {
            SendMessageTimeoutW(
                HWND_BROADCAST,
                WM_SETTINGCHANGE,
                WPARAM(0),
                LPARAM(area.as_ptr() as isize),
                SMTO_ABORTIFHUNG,
                self.timeout_ms,
                None,
            )
        };
        if sent.0 == 0 {
            // SAFETY: reads the calling thread's last-error value.
            let last_error = unsafe { GetLastError() };
            let message = windows::core::Error::from(last_error.to_hresult()).message();
            match ThemeError::from_broadcast_failure(last_error.0, &message) {
                Some(err) => return Err(err),
                None => log::warn!(
                    "WM_SETTINGCHANGE broadcast did not complete within {}ms",
                    self.timeout_ms
                ),
            }
        }

        // SAFETY: SHCNE_ASSOCCHANGED takes no item pointers.
        unsafe { SHChangeNotify(SHCNE_ASSOCCHANGED, SHCNF_IDLIST, None, None) };

        log::debug!("Notified shell of theme change");
        Ok(())
    }
}
