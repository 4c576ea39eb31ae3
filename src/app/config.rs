//! Application configuration
//!
//! This module handles application-wide configuration settings, including
//! where the log file lives and how noisy the record filter is.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::app::logging::LogSettings;

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Working directory
    pub working_dir: PathBuf,
    /// Destination of the log file
    pub log_file: PathBuf,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(verbose: u8) -> Result<Self> {
        let working_dir =
            std::env::current_dir().context("failed to get the current directory")?;
        let log_file = default_log_path(&working_dir);

        Ok(Self {
            verbose,
            working_dir,
            log_file,
        })
    }

    /// Override the log file destination
    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = path;
        self
    }

    /// Get the record filter directives based on verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "wastrel=trace",
            1 => "debug,wastrel=trace",
            _ => "trace",
        }
    }

    /// Bundle the file path and filter for the logging pipeline
    pub fn log_settings(&self) -> LogSettings {
        LogSettings {
            path: self.log_file.clone(),
            filter: self.log_filter().to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            working_dir: PathBuf::from("."),
            log_file: default_log_path(Path::new(".")),
        }
    }
}

/// Derive the default log file location from a working directory.
///
/// Takes the first three path components of the directory and appends
/// `logs/app.log`, so `/home/user/projects/anything` logs to
/// `/home/user/logs/app.log` and `/tmp` logs to `/tmp/logs/app.log`.
/// The `logs` directory is not created here; opening the file fails with
/// a descriptive error if it is missing.
pub fn default_log_path(working_dir: &Path) -> PathBuf {
    let mut path: PathBuf = working_dir.components().take(3).collect();
    path.push("logs");
    path.push("app.log");
    path
}
