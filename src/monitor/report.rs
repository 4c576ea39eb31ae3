//! Profile report types and rendering

use std::fmt::Write as _;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Measurements for one call through an instrumented stage.
#[derive(Debug, Clone, Serialize)]
pub struct StageReport {
    /// Stage name given at instrumentation time
    pub name: String,
    /// Wall-clock time spent inside the stage
    pub elapsed: Duration,
    /// Resident set size just before the call, bytes
    pub rss_before: u64,
    /// Resident set size just after the call, bytes
    pub rss_after: u64,
    /// Signed resident growth across the call, bytes
    pub rss_delta: i64,
}

/// Everything recorded during one profiled run.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    pub captured_at: DateTime<Utc>,
    pub stages: Vec<StageReport>,
}

impl ProfileReport {
    /// Render the aligned human-readable stage table.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<20} {:>12} {:>12} {:>12} {:>12}",
            "stage", "elapsed", "rss before", "rss after", "delta"
        );
        for stage in &self.stages {
            let _ = writeln!(
                out,
                "{:<20} {:>12} {:>12} {:>12} {:>12}",
                stage.name,
                format!("{:.1?}", stage.elapsed),
                format_bytes(stage.rss_before),
                format_bytes(stage.rss_after),
                format_signed_bytes(stage.rss_delta)
            );
        }
        out
    }
}

/// Human-readable binary units, one decimal place above bytes.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

/// Signed variant of [`format_bytes`] for growth columns.
pub fn format_signed_bytes(delta: i64) -> String {
    if delta < 0 {
        format!("-{}", format_bytes(delta.unsigned_abs()))
    } else {
        format!("+{}", format_bytes(delta as u64))
    }
}
