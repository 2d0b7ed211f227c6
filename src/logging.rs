//! Logging bootstrap.
//!
//! Logs go to stderr; stdout carries the MCP stream. `RUST_LOG` takes
//! precedence over the configured level.

use anyhow::{Context, Result, bail};
use flexi_logger::{Logger, LoggerHandle};
use log::info;

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Initializes logging at `level`.
///
/// The returned handle must be kept alive for as long as logging is needed.
///
/// # Errors
/// - Returns an error when `level` is unsupported.
/// - Returns an error when the logger backend cannot start (for example when
///   a logger is already installed).
pub fn init_logging(level: &str) -> Result<LoggerHandle> {
    let level = normalize_level(level)?;

    let logger = Logger::try_with_env_or_str(level)
        .with_context(|| format!("invalid log level `{level}`"))?
        .log_to_stderr()
        .format(flexi_logger::detailed_format)
        .start()
        .context("failed to start logger")?;

    info!(
        "event=app_start module=core status=ok version={} level={}",
        env!("CARGO_PKG_VERSION"),
        level
    );
    Ok(logger)
}

/// Maps a user supplied level onto one of the supported level names.
pub fn normalize_level(level: &str) -> Result<&'static str> {
    let wanted = level.trim().to_ascii_lowercase();
    match LEVELS.iter().find(|l| **l == wanted) {
        Some(l) => Ok(*l),
        None => bail!(
            "unsupported log level `{}`; expected one of: {}",
            level,
            LEVELS.join(", ")
        ),
    }
}
