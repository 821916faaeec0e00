use std::io;

use winreg::enums::{HKEY_CURRENT_USER, KEY_READ, KEY_SET_VALUE};
use winreg::RegKey;

use crate::shared::constants::PERSONALIZE_KEY_PATH;
use crate::shared::theme_error::ThemeError;
use crate::shared::theme_mode::{ThemeMode, ThemeTarget};
use crate::theme::domain::theme_store::ThemeStore;

/// Theme store backed by the per-user personalization registry key.
///
/// The key is opened for every call rather than held, so the store never
/// observes a stale handle after Settings or another tool rewrites it.
pub struct RegistryThemeStore {
    key_path: String,
}

impl RegistryThemeStore {
    pub fn new() -> Self {
        Self::with_key_path(PERSONALIZE_KEY_PATH)
    }

    /// Points the store at a different key under `HKEY_CURRENT_USER`.
    pub fn with_key_path(key_path: &str) -> Self {
        Self {
            key_path: key_path.to_string(),
        }
    }

    fn open(&self, flags: u32) -> io::Result<RegKey> {
        RegKey::predef(HKEY_CURRENT_USER).open_subkey_with_flags(&self.key_path, flags)
    }
}

impl Default for RegistryThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeStore for RegistryThemeStore {
    fn read(&self, target: ThemeTarget) -> Result<Option<ThemeMode>, ThemeError> {
        let key = match self.open(KEY_READ) {
            Ok(key) => key,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ThemeError::Registry(e)),
        };
        match key.get_value::<u32, _>(target.value_name()) {
            Ok(value) => Ok(Some(ThemeMode::from_registry_value(value))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ThemeError::Registry(e)),
        }
    }

    fn write(&mut self, target: ThemeTarget, mode: ThemeMode) -> Result<(), ThemeError> {
        let key = self
            .open(KEY_SET_VALUE)
            .map_err(|e| ThemeError::from_io(e, target, &self.key_path))?;
        key.set_value(target.value_name(), &mode.registry_value())
            .map_err(|e| ThemeError::from_io(e, target, &self.key_path))?;
        log::debug!(
            "Wrote {}={} under HKCU\\{}",
            target.value_name(),
            mode.registry_value(),
            self.key_path
        );
        Ok(())
    }
}
