//! Tracing subscriber setup
//!
//! Components log through `tracing` macros. The binary installs a subscriber
//! once, writing to the log file named by [`AppConfig`].

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::{Error, Result};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "streampy=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a subscriber appending to `config.log_path()`
///
/// Creates the log directory if needed.
pub fn init(config: &AppConfig) -> Result<()> {
    std::fs::create_dir_all(&config.log_dir)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Install a subscriber writing to stdout
pub fn init_stdout() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
