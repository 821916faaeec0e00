//! Light/dark appearance switching for Windows and the tray icons that show it.
//!
//! The crate is split the same way on every axis: `domain` modules hold the
//! types and traits, `infrastructure` modules hold the platform-facing
//! implementations, and `toggle` wires them together.

pub mod icon;
pub mod shared;
pub mod theme;
pub mod toggle;
