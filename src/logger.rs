//! Debug logging support for cctr
//!
//! Standard output carries the transformed text, so logs only ever go to a
//! file: ~/.cctr/cctr.log, enabled by `--debug` or `[logging] debug = true`.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Initialize the debug logging system
///
/// If debug_enabled is true, sets up file logging.
/// Returns the path to the log file, or None if logging is not enabled.
pub fn init_debug_logging(debug_enabled: bool) -> Result<Option<PathBuf>> {
    if !debug_enabled {
        return Ok(None);
    }

    // Logging must never get in the way of the transformation itself
    let file = get_log_path().and_then(|log_path| {
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open log file: {}", log_path.display()))
            .map(|log_file| (log_path, log_file))
    });

    match file {
        Ok((log_path, log_file)) => {
            let subscriber = registry()
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(log_file))
                        .with_ansi(false)
                        .with_target(false)
                        .with_thread_ids(false)
                        .with_file(false)
                        .with_line_number(false),
                )
                .with(EnvFilter::new("cctr=debug"));

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

            Ok(Some(log_path))
        }
        Err(e) => {
            eprintln!("Warning: Could not create log file: {:#}", e);
            Ok(None)
        }
    }
}

/// Get the log file path (~/.cctr/cctr.log)
fn get_log_path() -> Result<PathBuf> {
    Ok(crate::config::cctr_dir()?.join("cctr.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_debug_logging_disabled() {
        let result = init_debug_logging(false);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), None, "Should return None when debug is disabled");
    }
}
