//! Logger bootstrap for the command-line binary.
//!
//! Diagnostics are emitted through the `log` facade everywhere in the crate. The binary
//! routes them to stderr so they never mix with rendered output on stdout.

use anyhow::{Context, Result};
use flexi_logger::{Logger, LoggerHandle};

/// Default level when neither `--log-level` nor `RUST_LOG` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Start logging to stderr at `level`
///
/// `RUST_LOG` takes precedence over `level` when it is set. The returned handle must be
/// kept alive for as long as logging is needed.
///
/// # Errors
///
/// Returns an error if the level specification is invalid or a logger is already running.
pub fn init_logging(level: &str) -> Result<LoggerHandle> {
    Logger::try_with_env_or_str(level)
        .with_context(|| format!("Invalid log level: {}", level))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .context("Failed to start logger")
}
