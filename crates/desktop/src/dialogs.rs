use darkmode_core::shared::theme_error::ThemeError;

/// A message box the tray shows in response to a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Yes/No: restart elevated?
    ElevationRequired,
    ElevationFailed(String),
    PermissionDenied,
    ChangeFailed(String),
    NotifyFailed(String),
    ReadFailed(String),
}

impl Notice {
    /// The notice for a failed theme write.
    pub fn for_write_error(err: &ThemeError, elevated: bool) -> Self {
        match (err.is_access_denied(), elevated) {
            (true, false) => Notice::ElevationRequired,
            (true, true) => Notice::PermissionDenied,
            (false, _) => Notice::ChangeFailed(err.to_string()),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Notice::ElevationRequired => "Elevation Required",
            Notice::ElevationFailed(_) => "Elevation Error",
            Notice::PermissionDenied => "Permission Error",
            Notice::ChangeFailed(_) => "Theme Change Error",
            Notice::NotifyFailed(_) => "Theme Notification Error",
            Notice::ReadFailed(_) => "Theme Error",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::ElevationRequired => "This operation requires administrator privileges. \
                Would you like to restart the application as administrator?"
                .to_string(),
            Notice::ElevationFailed(detail) => {
                format!("Failed to restart with elevated privileges: {detail}")
            }
            Notice::PermissionDenied => "Failed to change theme settings due to insufficient \
                permissions, even with administrator privileges."
                .to_string(),
            Notice::ChangeFailed(detail) => format!("Error changing theme: {detail}"),
            Notice::NotifyFailed(detail) => {
                format!("Error notifying system of theme change: {detail}")
            }
            Notice::ReadFailed(detail) => format!("Error reading theme setting: {detail}"),
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Notice::NotifyFailed(_))
    }
}

/// Shows `notice` and returns whether the user accepted it. Only
/// [`Notice::ElevationRequired`] asks a question; every other notice
/// returns `false`.
#[cfg(target_os = "windows")]
pub fn show(notice: &Notice) -> bool {
    use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

    let dialog = MessageDialog::new()
        .set_title(notice.title())
        .set_description(notice.message());

    if *notice == Notice::ElevationRequired {
        return dialog
            .set_level(MessageLevel::Info)
            .set_buttons(MessageButtons::YesNo)
            .show()
            == MessageDialogResult::Yes;
    }

    let level = if notice.is_warning() {
        MessageLevel::Warning
    } else {
        MessageLevel::Error
    };
    dialog
        .set_level(level)
        .set_buttons(MessageButtons::Ok)
        .show();
    false
}
