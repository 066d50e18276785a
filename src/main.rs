#![forbid(unsafe_code)]

mod config;
mod constants;
mod gui;
mod panel;
mod persistence;

#[cfg(test)]
mod test_utils;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level as TraceLevel, info};
use tracing_subscriber::FmtSubscriber;

use config::{DisplaySettings, JsonFileStore, SettingsStore};
use constants::logging::{DEFAULT_LEVEL, LEVEL_ENV};

/// Reorder and show/hide titlebar elements
#[derive(Parser, Debug)]
#[command(name = "titlebar-settings", version)]
struct Cli {
    /// Settings file (default: $TITLEBAR_SETTINGS_PATH, then the user config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// trace, debug, info, warn or error (overrides LOG_LEVEL)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Print the current settings as JSON and exit
    #[arg(long, conflicts_with = "reset")]
    print: bool,

    /// Restore the default element order and visibility, then exit
    #[arg(long)]
    reset: bool,
}

fn parse_log_level(raw: &str) -> TraceLevel {
    match raw.trim().to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

fn init_logging(cli_level: Option<&str>) -> Result<()> {
    let raw = cli_level
        .map(str::to_string)
        .or_else(|| std::env::var(LEVEL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string());

    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_log_level(&raw))
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Failed to install log subscriber")
}

fn print_settings(store: &dyn SettingsStore) -> Result<()> {
    let settings = store.get_display_settings()?.sanitized();
    let json = serde_json::to_string_pretty(&settings).context("Failed to serialize settings")?;
    println!("{json}");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref())?;

    let store = JsonFileStore::resolve(cli.config);
    let location = store.path().display().to_string();
    info!(path = %location, "Using settings file");

    if cli.print {
        return print_settings(&store);
    }

    if cli.reset {
        store.set_display_settings(&DisplaySettings::default())?;
        info!(path = %location, "Restored default display settings");
        return Ok(());
    }

    gui::run_gui(Arc::new(store), location)
}
