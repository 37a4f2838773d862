use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "calcterm.log";

/// Send tracing output to `<log_dir>/calcterm.log`. The terminal belongs to
/// the UI, so nothing is written to stdout or stderr.
///
/// `RUST_LOG` wins over the configured level. Keep the returned guard alive
/// until exit or buffered lines are lost.
pub fn init(log_dir: &Path, configured_level: &str, verbose: u8) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level_directive(configured_level, verbose)))
        .context("Invalid log level")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(guard)
}

fn level_directive(configured_level: &str, verbose: u8) -> &str {
    match verbose {
        0 => configured_level,
        1 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_overrides_configured_level() {
        assert_eq!(level_directive("warn", 0), "warn");
        assert_eq!(level_directive("warn", 1), "debug");
        assert_eq!(level_directive("warn", 3), "trace");
    }
}
