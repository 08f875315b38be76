//! Tracing setup: daily rolling log file, plus stderr in verbose mode

use crate::error::{FootballError, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "pro_football=info";
const DEFAULT_LOG_FILE_NAME: &str = "pro-football.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Split a log file path into the directory and file name the appender wants.
pub fn split_log_path(log_file: &Path) -> (PathBuf, String) {
    let dir = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
        .to_path_buf();
    let file_name = log_file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(DEFAULT_LOG_FILE_NAME)
        .to_string();
    (dir, file_name)
}

/// Install the global subscriber.
///
/// Logs always go to a daily rolling file next to `log_file`. With `verbose`
/// they are mirrored to stderr so command output on stdout stays clean.
/// `RUST_LOG` replaces the default `pro_football=info` filter.
///
/// The returned guard must be held until exit so buffered lines get flushed.
pub fn setup_logging(log_file: &Path, verbose: bool) -> Result<WorkerGuard> {
    let (log_dir, file_name) = split_log_path(log_file);
    std::fs::create_dir_all(&log_dir).map_err(|e| FootballError::Config {
        message: format!("Failed to create log directory {}: {}", log_dir.display(), e),
    })?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter());

    let stderr_layer = verbose.then(|| {
        fmt::Layer::new()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(env_filter())
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| FootballError::Other {
            message: format!("Failed to install log subscriber: {}", e),
        })?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_log_path() {
        let (dir, name) = split_log_path(Path::new("/var/log/pf/football.log"));
        assert_eq!(dir, PathBuf::from("/var/log/pf"));
        assert_eq!(name, "football.log");
    }

    #[test]
    fn test_split_bare_file_name() {
        let (dir, name) = split_log_path(Path::new("football.log"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, "football.log");
    }
}
