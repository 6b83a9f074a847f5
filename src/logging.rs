use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// Environment variable that overrides the configured log filter
pub const LOG_ENV: &str = "DEVREF_LOG";

pub fn log_dir() -> Result<PathBuf> {
    Ok(dirs::data_dir()
        .context("Failed to get data directory")?
        .join("devref"))
}

/// Sends log records to `devref.log` in the data directory, appending. The
/// terminal belongs to the TUI, so nothing is written to stderr.
pub fn init(level: &str) -> Result<PathBuf> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir).context("Failed to create log directory")?;

    let path = dir.join("devref.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    Builder::new()
        .parse_filters(level)
        .parse_env(Env::new().filter(LOG_ENV))
        .format_timestamp_millis()
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("Logger already initialized")?;

    log::debug!("Logging to {}", path.display());
    Ok(path)
}
