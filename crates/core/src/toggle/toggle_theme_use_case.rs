use crate::shared::theme_error::ThemeError;
use crate::shared::theme_mode::{ThemeMode, ThemeTarget};
use crate::shared::theme_scope::ThemeScope;
use crate::theme::domain::shell_notifier::ShellNotifier;
use crate::theme::domain::theme_store::ThemeStore;

/// Mode Windows assumes when nothing is stored.
const DEFAULT_MODE: ThemeMode = ThemeMode::Light;

/// Result of a successful write.
#[derive(Debug)]
pub struct ThemeChange {
    pub mode: ThemeMode,
    pub scope: ThemeScope,
    /// Set when the values were written but the shell could not be told.
    /// The change itself stands.
    pub notify_error: Option<ThemeError>,
}

/// Read → flip → write → notify.
///
/// Tracks the mode of the app-theme value, which is what the tray icon
/// shows. The tracked mode only moves once every write of an operation has
/// succeeded.
pub struct ThemeToggler {
    store: Box<dyn ThemeStore>,
    notifier: Box<dyn ShellNotifier>,
    mode: ThemeMode,
}

impl ThemeToggler {
    pub fn new(store: Box<dyn ThemeStore>, notifier: Box<dyn ShellNotifier>) -> Self {
        Self {
            store,
            notifier,
            mode: DEFAULT_MODE,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Reads the current value of `target`, falling back to light.
    pub fn current(&self, target: ThemeTarget) -> Result<ThemeMode, ThemeError> {
        Ok(self.store.read(target)?.unwrap_or(DEFAULT_MODE))
    }

    /// Re-reads the app theme. Returns true if the tracked mode changed,
    /// e.g. because the user flipped it in Settings.
    pub fn refresh(&mut self) -> Result<bool, ThemeError> {
        let mode = self.current(ThemeTarget::Apps)?;
        let changed = mode != self.mode;
        if changed {
            log::info!("Theme changed externally: {} -> {}", self.mode, mode);
        }
        self.mode = mode;
        Ok(changed)
    }

    /// Flips the targets of `scope`.
    ///
    /// `Both` and `AppsOnly` flip relative to the tracked app mode and keep
    /// the two values in step. `SystemOnly` flips the system value relative
    /// to its own current state.
    pub fn toggle(&mut self, scope: ThemeScope) -> Result<ThemeChange, ThemeError> {
        let mode = match scope {
            ThemeScope::Both | ThemeScope::AppsOnly => self.mode.toggled(),
            ThemeScope::SystemOnly => self.current(ThemeTarget::System)?.toggled(),
        };
        self.apply(mode, scope)
    }

    /// Writes `mode` to every target of `scope`, then notifies the shell.
    pub fn apply(&mut self, mode: ThemeMode, scope: ThemeScope) -> Result<ThemeChange, ThemeError> {
        for &target in scope.targets() {
            self.store.write(target, mode)?;
        }
        if scope.includes(ThemeTarget::Apps) {
            self.mode = mode;
        }
        log::info!("Applied {mode} theme ({scope})");

        let notify_error = self.notifier.notify_theme_changed().err();
        if let Some(ref e) = notify_error {
            log::warn!("{e}");
        }

        Ok(ThemeChange {
            mode,
            scope,
            notify_error,
        })
    }
}
