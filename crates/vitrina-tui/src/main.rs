//! `vitrina` — full-screen terminal kiosk for a static product catalog.
//!
//! Built on [ratatui](https://ratatui.rs) with presentation logic from
//! `vitrina-core`. Three screens: a Home mode selector, an unattended
//! auto-rotating TV mode, and an interactive Tablet mode with swipe
//! navigation (mouse drag).
//!
//! Logs are written to a file (default `/tmp/vitrina.log`) to avoid
//! corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks,
//! config + catalog loading, and app launch.

mod action;
mod app;
mod component;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use vitrina_core::Catalog;

use crate::app::App;
use crate::screen::ScreenId;

/// Which screen the kiosk starts on.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum StartMode {
    Home,
    Tv,
    Tablet,
}

impl From<StartMode> for ScreenId {
    fn from(mode: StartMode) -> Self {
        match mode {
            StartMode::Home => Self::Home,
            StartMode::Tv => Self::Tv,
            StartMode::Tablet => Self::Tablet,
        }
    }
}

/// Full-screen kiosk display for a static product catalog.
#[derive(Parser, Debug)]
#[command(name = "vitrina", version, about)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(short, long, env = "VITRINA_CONFIG")]
    config: Option<PathBuf>,

    /// Products JSON file (overrides the config's catalog path)
    #[arg(long, env = "VITRINA_CATALOG")]
    catalog: Option<PathBuf>,

    /// Screen to start on
    #[arg(short, long, value_enum, default_value_t = StartMode::Home)]
    mode: StartMode,

    /// Log file path (defaults to /tmp/vitrina.log)
    #[arg(long, default_value = "/tmp/vitrina.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that
/// would corrupt the TUI output. Returns a guard that must be held for
/// the lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vitrina={log_level},vitrina_core={log_level}")));

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("vitrina.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    guard
}

/// Load the product catalog. Any failure degrades to the sample data —
/// a kiosk with nothing to show is worse than one with demo content.
fn load_catalog(path: Option<&std::path::Path>) -> Catalog {
    let Some(path) = path else {
        return Catalog::sample();
    };

    match std::fs::read_to_string(path) {
        Ok(json) => match Catalog::from_json(&json) {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!(path = %path.display(), %err, "catalog file unparseable, using sample");
                Catalog::sample()
            }
        },
        Err(err) => {
            warn!(path = %path.display(), %err, "catalog file unreadable, using sample");
            Catalog::sample()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    let config = vitrina_config::load_config_or_default(cli.config.as_deref());
    let catalog_path = cli.catalog.clone().or_else(|| config.catalog.clone());
    let catalog = load_catalog(catalog_path.as_deref());

    info!(
        brand = %config.brand,
        products = catalog.len(),
        mode = ?cli.mode,
        "starting vitrina"
    );

    let mut app = App::new(config, catalog, ScreenId::from(cli.mode));
    app.run().await?;

    Ok(())
}
