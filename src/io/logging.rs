//! Logger initialisation

use crate::io::error::Result;
use flexi_logger::{Logger, LoggerHandle, default_format};

/// Start the global logger, writing to stderr
///
/// `RUST_LOG` takes precedence over `fallback_spec`. The returned handle must be
/// kept alive for as long as logging is needed.
///
/// # Errors
///
/// Returns an error if the log specification cannot be parsed or a global
/// logger is already installed
pub fn setup_logging(fallback_spec: &str) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(fallback_spec)?
        .log_to_stderr()
        .format(default_format)
        .start()?;
    Ok(handle)
}
