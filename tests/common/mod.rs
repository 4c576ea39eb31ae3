//! Common test utilities and helpers

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test context that provides a writable log destination and cleans up
/// after itself
pub struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Get the path to the test directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// A log file path inside the test directory. The file itself is not
    /// created; the binary opens it in append mode.
    pub fn log_path(&self) -> PathBuf {
        self.path().join("app.log")
    }
}
