//! File-backed tracing setup.
//!
//! The terminal belongs to the TUI, so log lines go to a file.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::{eyre, WrapErr};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Install the global subscriber writing to `config.log_file`.
///
/// Fails if the file cannot be opened, the filter does not parse, or a
/// subscriber is already installed.
pub fn init_logging(config: &AppConfig) -> color_eyre::Result<()> {
    let file = open_log_file(&config.log_file)?;
    let filter = EnvFilter::try_new(&config.log_filter)
        .wrap_err_with(|| format!("invalid log filter {:?}", config.log_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| eyre!("failed to install tracing subscriber: {}", e))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.base_url,
        "postboard starting"
    );
    Ok(())
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> color_eyre::Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("cannot create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("cannot open log file {}", path.display()))
}
