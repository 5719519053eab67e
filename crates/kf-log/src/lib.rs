//! Log output for the Kerbal Foundries tools.
//!
//! Library crates emit records through the `log` facade. This crate installs a
//! `tracing` subscriber that collects them, prints to the console, and mirrors
//! them to the configured log file when `writeToLogFile` is enabled.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use kf_config::Settings;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
pub fn filter_directive(settings: &Settings) -> &'static str {
    if settings.is_debug_enabled { "debug" } else { "info" }
}

/// Where the log file goes, if file output is enabled.
pub fn log_file_path(log_dir: Option<&Path>, settings: &Settings) -> Option<PathBuf> {
    if !settings.write_to_log_file {
        return None;
    }
    log_dir.map(|dir| dir.join(&settings.log_file))
}

/// Install the global subscriber.
///
/// Console output on stderr always; a plain-text file layer at
/// `<log_dir>/<logFile>` when [`log_file_path`] yields a path that can be
/// created. A file that cannot be created is reported on stderr and skipped.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(log_dir: Option<&Path>, settings: &Settings) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(settings)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let log_file = log_file_path(log_dir, settings).and_then(|path| match open_log_file(&path) {
        Ok(file) => Some((path, file)),
        Err(e) => {
            eprintln!("Could not open log file {}: {e}", path.display());
            None
        }
    });
    let log_path = log_file.as_ref().map(|(path, _)| path.clone());
    let file_layer = log_file.map(|(_, file)| {
        fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    if let Some(path) = log_path {
        tracing::info!("Writing log to {}", path.display());
    }
    Ok(())
}

fn open_log_file(path: &Path) -> std::io::Result<std::fs::File> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::File::create(path)
}
