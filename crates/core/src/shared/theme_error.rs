use std::io;

use thiserror::Error;

use super::theme_mode::ThemeTarget;

/// Win32 `ERROR_TIMEOUT`.
const ERROR_TIMEOUT: u32 = 1460;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("access denied while writing the {target} theme setting")]
    AccessDenied { target: ThemeTarget },
    #[error("theme settings key not found: {0}")]
    KeyNotFound(String),
    #[error("registry error: {0}")]
    Registry(#[source] io::Error),
    #[error("failed to notify the shell of the theme change: {0}")]
    Notify(String),
    #[error("failed to restart with elevated privileges: {0}")]
    Elevation(String),
    #[error("theme settings are only available on Windows")]
    Unsupported,
}

impl ThemeError {
    pub fn is_access_denied(&self) -> bool {
        matches!(self, ThemeError::AccessDenied { .. })
    }

    /// Maps a store I/O failure for `target` onto the error variants callers
    /// branch on.
    pub fn from_io(err: io::Error, target: ThemeTarget, key_path: &str) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => ThemeError::AccessDenied { target },
            io::ErrorKind::NotFound => ThemeError::KeyNotFound(key_path.to_string()),
            _ => ThemeError::Registry(err),
        }
    }

    /// Maps the last error of a `WM_SETTINGCHANGE` broadcast that returned
    /// zero. A timeout is not an error: windows that answered in time got
    /// the message. Anything else means the broadcast itself failed.
    pub fn from_broadcast_failure(last_error: u32, message: &str) -> Option<Self> {
        if last_error == ERROR_TIMEOUT {
            return None;
        }
        Some(ThemeError::Notify(format!(
            "SendMessageTimeout failed with error {last_error}: {message}"
        )))
    }

    /// Maps a `ShellExecuteW` return value of 32 or less. These are
    /// `SE_ERR_*` codes, not `GetLastError` values.
    pub fn from_shell_execute(code: isize) -> Self {
        let reason = match code {
            0 | 8 => "out of memory or resources",
            2 => "file not found",
            3 => "path not found",
            5 => "access denied or the elevation prompt was declined",
            11 => "invalid executable",
            26 => "sharing violation",
            27 | 31 => "no application is associated with the file",
            28..=30 => "DDE transaction failed",
            32 => "a required DLL was not found",
            _ => "unknown error",
        };
        ThemeError::Elevation(format!("ShellExecute returned {code}: {reason}"))
    }
}
