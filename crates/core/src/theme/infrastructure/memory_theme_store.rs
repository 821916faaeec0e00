use std::collections::HashMap;

use crate::shared::theme_error::ThemeError;
use crate::shared::theme_mode::{ThemeMode, ThemeTarget};
use crate::theme::domain::theme_store::ThemeStore;

/// Theme store that keeps raw DWORD values in memory.
///
/// Backs `--dry-run` in the CLI and stands in for the registry in tests.
/// Targets listed via [`deny_writes_to`](Self::deny_writes_to) reject writes
/// with [`ThemeError::AccessDenied`].
#[derive(Debug, Default, Clone)]
pub struct MemoryThemeStore {
    values: HashMap<ThemeTarget, u32>,
    denied: Vec<ThemeTarget>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value, including ones outside `0`/`1`.
    pub fn with_value(mut self, target: ThemeTarget, value: u32) -> Self {
        self.values.insert(target, value);
        self
    }

    pub fn with_mode(self, target: ThemeTarget, mode: ThemeMode) -> Self {
        self.with_value(target, mode.registry_value())
    }

    pub fn deny_writes_to(mut self, target: ThemeTarget) -> Self {
        self.denied.push(target);
        self
    }

    /// Copies whatever `source` currently holds for every target.
    pub fn snapshot_of(source: &dyn ThemeStore) -> Result<Self, ThemeError> {
        let mut store = Self::new();
        for &target in ThemeTarget::ALL {
            if let Some(mode) = source.read(target)? {
                store = store.with_mode(target, mode);
            }
        }
        Ok(store)
    }

    pub fn raw_value(&self, target: ThemeTarget) -> Option<u32> {
        self.values.get(&target).copied()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn read(&self, target: ThemeTarget) -> Result<Option<ThemeMode>, ThemeError> {
        Ok(self
            .values
            .get(&target)
            .map(|&v| ThemeMode::from_registry_value(v)))
    }

    fn write(&mut self, target: ThemeTarget, mode: ThemeMode) -> Result<(), ThemeError> {
        if self.denied.contains(&target) {
            return Err(ThemeError::AccessDenied { target });
        }
        self.values.insert(target, mode.registry_value());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_reads_none() {
        let store = MemoryThemeStore::new();
        assert_eq!(store.read(ThemeTarget::Apps).unwrap(), None);
        assert_eq!(store.read(ThemeTarget::System).unwrap(), None);
    }

    #[test]
    fn test_unexpected_raw_value_reads_dark() {
        let store = MemoryThemeStore::new().with_value(ThemeTarget::Apps, 7);
        assert_eq!(store.read(ThemeTarget::Apps).unwrap(), Some(ThemeMode::Dark));
    }

    #[test]
    fn test_write_stores_dword() {
        let mut store = MemoryThemeStore::new();
        store.write(ThemeTarget::System, ThemeMode::Light).unwrap();
        assert_eq!(store.raw_value(ThemeTarget::System), Some(1));
        store.write(ThemeTarget::System, ThemeMode::Dark).unwrap();
        assert_eq!(store.raw_value(ThemeTarget::System), Some(0));
    }

    #[test]
    fn test_denied_target_rejects_write_and_keeps_value() {
        let mut store = MemoryThemeStore::new()
            .with_mode(ThemeTarget::System, ThemeMode::Light)
            .deny_writes_to(ThemeTarget::System);
        let err = store.write(ThemeTarget::System, ThemeMode::Dark).unwrap_err();
        assert!(err.is_access_denied());
        assert_eq!(store.raw_value(ThemeTarget::System), Some(1));
    }

    #[test]
    fn test_snapshot_copies_present_values_only() {
        let source = MemoryThemeStore::new().with_mode(ThemeTarget::Apps, ThemeMode::Dark);
        let copy = MemoryThemeStore::snapshot_of(&source).unwrap();
        assert_eq!(copy.read(ThemeTarget::Apps).unwrap(), Some(ThemeMode::Dark));
        assert_eq!(copy.read(ThemeTarget::System).unwrap(), None);
    }
}
