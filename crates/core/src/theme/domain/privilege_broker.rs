use crate::shared::theme_error::ThemeError;

/// Queries and raises the privilege level of the running process.
pub trait PrivilegeBroker: Send {
    fn is_elevated(&self) -> bool;

    /// Starts a new elevated instance of the current executable.
    ///
    /// On success the caller is expected to exit so only the elevated
    /// instance remains.
    fn relaunch_elevated(&self) -> Result<(), ThemeError>;
}
