use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::Config;

pub(crate) const LOG_FILE_NAME: &str = "spendtrack.log";

/// Where log events go. The TUI owns the terminal, so it logs to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogTarget {
    Stderr,
    File,
}

/// Install the global subscriber. Returns the log file path when logging to a
/// file, `None` for stderr or when no log directory is known.
pub(crate) fn init(config: &Config, target: LogTarget) -> Result<Option<PathBuf>> {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    match target {
        LogTarget::Stderr => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter);
            tracing_subscriber::registry()
                .with(layer)
                .try_init()
                .context("Failed to install log subscriber")?;
            Ok(None)
        }
        LogTarget::File => {
            let Some(dir) = config.log_dir.as_deref() else {
                return Ok(None);
            };
            let (file, path) = open_log_file(dir)?;
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_filter(filter);
            tracing_subscriber::registry()
                .with(layer)
                .try_init()
                .context("Failed to install log subscriber")?;
            Ok(Some(path))
        }
    }
}

/// Create `dir` if needed and open the log file in append mode.
pub(crate) fn open_log_file(dir: &Path) -> Result<(File, PathBuf)> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;
    Ok((file, path))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_log_file_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("logs");
        let (_, path) = open_log_file(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(path, dir.join(LOG_FILE_NAME));
    }

    #[test]
    fn test_open_log_file_appends() {
        let tmp = tempfile::tempdir().unwrap();
        {
            let (mut file, _) = open_log_file(tmp.path()).unwrap();
            writeln!(file, "first").unwrap();
        }
        let (mut file, path) = open_log_file(tmp.path()).unwrap();
        writeln!(file, "second").unwrap();
        let contents = std::fs::read_to_string(path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }
}
