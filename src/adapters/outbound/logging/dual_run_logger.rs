use crate::ports::outbound::RunLogger;
use crate::shared::Result;
use anyhow::Context;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{Dispatch, Subscriber};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::registry::{LookupSpan, Registry};

/// Log file used when none is configured
pub const DEFAULT_LOG_FILE: &str = "einv_sol.log";

/// DualRunLogger adapter writing every record to stdout and a log file
///
/// Owns its own `tracing` dispatchers instead of installing a global
/// subscriber. The log file is opened in append mode so consecutive runs
/// accumulate in one file; the file copy carries no ANSI colors.
pub struct DualRunLogger {
    dispatch: Dispatch,
    file_dispatch: Dispatch,
    log_file: PathBuf,
}

impl DualRunLogger {
    /// Opens (or creates) `log_file` and builds the dispatchers
    ///
    /// # Errors
    /// Returns an error if the log file cannot be opened for appending
    pub fn new(log_file: &Path) -> Result<Self> {
        let open_error = || format!("Failed to open log file: {}", log_file.display());
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .with_context(open_error)?;
        let file_only = file.try_clone().with_context(open_error)?;

        let subscriber = Registry::default()
            .with(fmt::layer().with_target(false).with_writer(std::io::stdout))
            .with(file_layer(file));
        let file_subscriber = Registry::default().with(file_layer(file_only));

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
            file_dispatch: Dispatch::new(file_subscriber),
            log_file: log_file.to_path_buf(),
        })
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Records an error in the log file only
    ///
    /// Used for the final failure of a run, which is already shown on stderr.
    pub fn record_failure(&self, message: &str) {
        tracing::dispatcher::with_default(&self.file_dispatch, || tracing::error!("{}", message));
    }
}

fn file_layer<S>(file: File) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
}

impl RunLogger for DualRunLogger {
    fn info(&self, message: &str) {
        tracing::dispatcher::with_default(&self.dispatch, || tracing::info!("{}", message));
    }

    fn warn(&self, message: &str) {
        tracing::dispatcher::with_default(&self.dispatch, || tracing::warn!("{}", message));
    }

    fn error(&self, message: &str) {
        tracing::dispatcher::with_default(&self.dispatch, || tracing::error!("{}", message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_records_reach_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("run.log");

        let logger = DualRunLogger::new(&log_path).unwrap();
        logger.info("Getting files from Solutions directory");
        logger.warn("snapshot has no components");
        logger.error("Error Reading directory");

        let content = fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("INFO"));
        assert!(content.contains("Getting files from Solutions directory"));
        assert!(content.contains("WARN"));
        assert!(content.contains("snapshot has no components"));
        assert!(content.contains("ERROR"));
        assert!(content.contains("Error Reading directory"));
        assert!(!content.contains("\u{1b}["));
    }

    #[test]
    fn test_log_file_is_appended_across_loggers() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("run.log");

        DualRunLogger::new(&log_path).unwrap().info("first run");
        DualRunLogger::new(&log_path).unwrap().info("second run");

        let content = fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("first run"));
        assert!(content.contains("second run"));
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_unopenable_log_file() {
        let result = DualRunLogger::new(Path::new("/nonexistent/dir/run.log"));
        assert!(result.is_err());
        assert!(result
            .err()
            .unwrap()
            .to_string()
            .contains("Failed to open log file"));
    }

    #[test]
    fn test_record_failure_goes_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("run.log");

        let logger = DualRunLogger::new(&log_path).unwrap();
        logger.info("before failure");
        logger.record_failure("Invalid configuration: no user");

        let content = fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("before failure"));
        assert!(lines[1].contains("ERROR"));
        assert!(lines[1].contains("Invalid configuration: no user"));
    }

    #[test]
    fn test_log_file_accessor() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("run.log");
        let logger = DualRunLogger::new(&log_path).unwrap();
        assert_eq!(logger.log_file(), log_path.as_path());
    }
}
