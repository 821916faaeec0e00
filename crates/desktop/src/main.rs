#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![cfg_attr(not(target_os = "windows"), allow(dead_code))]

#[cfg(target_os = "windows")]
mod app;
mod dialogs;
mod labels;
mod settings;
#[cfg(target_os = "windows")]
mod tray;

use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

#[cfg(target_os = "windows")]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    app::App::new()?.run()
}

#[cfg(not(target_os = "windows"))]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    Err(darkmode_core::shared::theme_error::ThemeError::Unsupported.into())
}
