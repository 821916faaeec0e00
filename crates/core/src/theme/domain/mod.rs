pub mod privilege_broker;
pub mod shell_notifier;
pub mod theme_store;
