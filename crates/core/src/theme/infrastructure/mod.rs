#[cfg(target_os = "windows")]
pub mod broadcast_shell_notifier;
pub mod memory_theme_store;
pub mod null_shell_notifier;
pub mod platform_factory;
#[cfg(target_os = "windows")]
pub mod registry_theme_store;
#[cfg(target_os = "windows")]
pub mod windows_privilege_broker;
