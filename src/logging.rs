//! Log setup.
//!
//! The terminal is fully taken over while typing, so logs only ever go to a
//! file: `<cache_dir>/ghostwrite/logs/ghostwrite.log`, rotated daily.
//! Filtering follows `RUST_LOG` and defaults to `info`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directory that holds the log files.
pub fn logs_dir() -> Result<PathBuf> {
    let cache = dirs::cache_dir().context("Could not determine cache directory")?;
    Ok(cache.join("ghostwrite").join("logs"))
}

/// Install the global file logger.
///
/// Failure to create the log directory is reported on stderr and logging is
/// left disabled; it never stops the program.
pub fn init() {
    let dir = match logs_dir().and_then(|dir| {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        Ok(dir)
    }) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_appender = tracing_appender::rolling::daily(dir, "ghostwrite.log");

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();
}
