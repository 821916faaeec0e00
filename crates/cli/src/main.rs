use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use darkmode_core::icon::domain::icon_style::IconStyle;
use darkmode_core::icon::infrastructure::icon_file_writer::IconFileWriter;
use darkmode_core::icon::infrastructure::renderer_factory::create_renderer;
use darkmode_core::shared::theme_mode::{ThemeMode, ThemeTarget};
use darkmode_core::shared::theme_scope::ThemeScope;
use darkmode_core::theme::domain::theme_store::ThemeStore;
use darkmode_core::theme::infrastructure::memory_theme_store::MemoryThemeStore;
use darkmode_core::theme::infrastructure::platform_factory::{
    create_privilege_broker, create_shell_notifier, create_theme_store,
};
use darkmode_core::toggle::toggle_theme_use_case::{ThemeChange, ThemeToggler};

/// Switch Windows between light and dark mode.
#[derive(Parser)]
#[command(name = "darkmode", version)]
struct Cli {
    /// Skip the WM_SETTINGCHANGE broadcast after writing.
    #[arg(long, global = true)]
    no_notify: bool,

    /// Apply changes to an in-memory copy instead of the registry.
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the current app and system modes.
    Status,

    /// Flip the current mode.
    Toggle {
        /// Which settings to change: both, apps, or system.
        #[arg(long, default_value = "both")]
        scope: ThemeScope,
    },

    /// Switch to a specific mode.
    Set {
        /// light or dark.
        mode: ThemeMode,

        /// Which settings to change: both, apps, or system.
        #[arg(long, default_value = "both")]
        scope: ThemeScope,
    },

    /// Render a tray icon to an image file (.png, .ico, ...).
    Icon {
        /// Output file; the format follows the extension.
        output: PathBuf,

        /// Icon style: toggle or glyph.
        #[arg(long, default_value = "toggle")]
        style: IconStyle,

        /// Mode to draw: light or dark.
        #[arg(long, default_value = "light")]
        mode: ThemeMode,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Status => run_status(cli.dry_run),
        Command::Toggle { scope } => {
            let mut toggler = build_toggler(cli.dry_run, cli.no_notify)?;
            report(toggler.toggle(scope)?);
            Ok(())
        }
        Command::Set { mode, scope } => {
            let mut toggler = build_toggler(cli.dry_run, cli.no_notify)?;
            report(toggler.apply(mode, scope)?);
            Ok(())
        }
        Command::Icon {
            output,
            style,
            mode,
        } => run_icon(&output, style, mode),
    }
}

fn run_status(dry_run: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(dry_run)?;
    for &target in ThemeTarget::ALL {
        let mode = store.read(target)?;
        match mode {
            Some(mode) => println!("{target}: {mode}"),
            None => println!("{target}: light (not set)"),
        }
    }
    let elevated = create_privilege_broker().is_elevated();
    println!("elevated: {}", if elevated { "yes" } else { "no" });
    Ok(())
}

fn run_icon(output: &Path, style: IconStyle, mode: ThemeMode) -> Result<(), Box<dyn std::error::Error>> {
    let icon = create_renderer(style).render(mode);
    IconFileWriter::new().write(output, &icon)?;
    log::info!("Wrote {style} {mode} icon to {}", output.display());
    println!("{}", output.display());
    Ok(())
}

fn build_toggler(dry_run: bool, no_notify: bool) -> Result<ThemeToggler, Box<dyn std::error::Error>> {
    let store = open_store(dry_run)?;
    let mut toggler = ThemeToggler::new(store, create_shell_notifier(!no_notify && !dry_run));
    toggler.refresh()?;
    Ok(toggler)
}

/// The registry store, or for a dry run an in-memory snapshot of it. Off
/// Windows a dry run starts from an empty store.
fn open_store(dry_run: bool) -> Result<Box<dyn ThemeStore>, Box<dyn std::error::Error>> {
    if !dry_run {
        return Ok(create_theme_store()?);
    }
    let snapshot = match create_theme_store() {
        Ok(real) => MemoryThemeStore::snapshot_of(real.as_ref())?,
        Err(e) => {
            log::info!("Dry run without a theme store ({e}); starting empty");
            MemoryThemeStore::new()
        }
    };
    Ok(Box::new(snapshot))
}

fn report(change: ThemeChange) {
    println!("{} ({})", change.mode, change.scope);
    if let Some(e) = change.notify_error {
        eprintln!("Warning: {e}");
    }
}
