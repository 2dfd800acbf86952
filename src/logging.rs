//! Diagnostic logging to a file. The terminal belongs to the dialog, so
//! nothing is ever written to stdout or stderr.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::{AppError, Result};

/// Environment variable holding a filter directive that overrides the config level.
pub const LOG_ENV_VAR: &str = "PICK_LOG";

/// Build the log filter: `$PICK_LOG` if set and valid, else `level`.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber when a log file is configured.
///
/// Returns `Ok(false)` when logging is disabled.
pub fn init(config: &AppConfig) -> Result<bool> {
    let Some(path) = config.log_file() else {
        return Ok(false);
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config.log_level()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Config(format!("failed to install logger: {}", e)))?;
    Ok(true)
}
