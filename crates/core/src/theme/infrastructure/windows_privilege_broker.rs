use std::ffi::c_void;
use std::mem;

use windows::core::{w, HSTRING, PCWSTR};
use windows::Win32::Foundation::{CloseHandle, HANDLE, HWND};
use windows::Win32::Security::{GetTokenInformation, TokenElevation, TOKEN_ELEVATION, TOKEN_QUERY};
use windows::Win32::System::Threading::{GetCurrentProcess, OpenProcessToken};
use windows::Win32::UI::Shell::ShellExecuteW;
use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;

use crate::shared::theme_error::ThemeError;
use crate::theme::domain::privilege_broker::PrivilegeBroker;

/// `ShellExecuteW` returns a value greater than 32 on success.
const SHELL_EXECUTE_SUCCESS_THRESHOLD: isize = 32;

/// Privilege checks against the current process token, elevation via the
/// UAC `runas` verb.
pub struct WindowsPrivilegeBroker;

impl WindowsPrivilegeBroker {
    pub fn new() -> Self {
        Self
    }

    fn token_is_elevated() -> windows::core::Result<bool> {
        let mut token = HANDLE::default();
        let mut elevation = TOKEN_ELEVATION::default();
        let mut returned = 0u32;

        // SAFETY: the token handle is closed below on every path; the buffer
        // passed to GetTokenInformation is exactly one TOKEN_ELEVATION.
        unsafe {
            OpenProcessToken(GetCurrentProcess(), TOKEN_QUERY, &mut token)?;
            let result = GetTokenInformation(
                token,
                TokenElevation,
                Some(&mut elevation as *mut TOKEN_ELEVATION as *mut c_void),
                mem::size_of::<TOKEN_ELEVATION>() as u32,
                &mut returned,
            );
            let _ = CloseHandle(token);
            result?;
        }
        Ok(elevation.TokenIsElevated != 0)
    }
}

impl Default for WindowsPrivilegeBroker {
    fn default() -> Self {
        Self::new()
    }
}

impl PrivilegeBroker for WindowsPrivilegeBroker {
    fn is_elevated(&self) -> bool {
        match Self::token_is_elevated() {
            Ok(elevated) => elevated,
            Err(e) => {
                log::warn!("Could not query token elevation: {e}");
                false
            }
        }
    }

    fn relaunch_elevated(&self) -> Result<(), ThemeError> {
        let exe = std::env::current_exe().map_err(|e| ThemeError::Elevation(e.to_string()))?;
        let file = HSTRING::from(exe.as_os_str());
        log::info!("Relaunching {} with elevated privileges", exe.display());

        // SAFETY: all string arguments are valid for the duration of the call.
        let instance = unsafe {
            ShellExecuteW(
                HWND::default(),
                w!("runas"),
                &file,
                PCWSTR::null(),
                PCWSTR::null(),
                SW_SHOWNORMAL,
            )
        };

        let code = instance.0 as isize;
        if code > SHELL_EXECUTE_SUCCESS_THRESHOLD {
            Ok(())
        } else {
            // The user declining the UAC prompt lands here too.
            Err(ThemeError::from_shell_execute(code))
        }
    }
}
