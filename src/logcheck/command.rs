//! The `log-check` command: emit the demo records and verify the file.

use std::fs::{self, File};
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDateTime;
use clap::Args;
use tracing::{debug, error, info, trace, warn};

use crate::app::config::AppConfig;
use crate::app::logging::TIMESTAMP_PATTERN;
use crate::logcheck::emitter;

/// Severities of the demo sequence, in emission order.
const EXPECTED_LEVELS: [&str; 7] = [
    "TRACE", "DEBUG", "INFO", "WARN", "ERROR", "ERROR", "DEBUG",
];

/// Command-line arguments for the log-check command
#[derive(Debug, Args, Clone)]
pub struct LogCheckCommand {
    /// Emit the records without re-reading the file to verify them
    /// (useful when other processes append to the same sink concurrently)
    #[arg(long)]
    pub no_verify: bool,
}

/// One parsed `TIMESTAMP - TARGET - LEVEL - MESSAGE` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: String,
    pub target: String,
    pub level: String,
    pub message: String,
}

impl LogRecord {
    /// Parse one line of the fixed record format, checking the timestamp
    /// against the configured pattern.
    pub fn parse(line: &str) -> Result<Self> {
        let mut parts = line.splitn(4, " - ");
        let (Some(timestamp), Some(target), Some(level), Some(message)) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            bail!("malformed log record: {line:?}");
        };

        NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_PATTERN)
            .with_context(|| format!("bad timestamp {timestamp:?} in record {line:?}"))?;

        Ok(Self {
            timestamp: timestamp.to_string(),
            target: target.to_string(),
            level: level.to_string(),
            message: message.to_string(),
        })
    }
}

/// Snapshot the file length, emit the demo records, then verify exactly
/// the appended region.
pub async fn run(command: LogCheckCommand, config: &AppConfig) -> Result<()> {
    let log_path = config.log_file.as_path();
    let before = fs::metadata(log_path)
        .with_context(|| format!("no log file at {}", log_path.display()))?
        .len();

    emit_demo_records();

    if command.no_verify {
        println!(
            "Emitted {} records to {}",
            EXPECTED_LEVELS.len(),
            log_path.display()
        );
        return Ok(());
    }

    let appended = read_appended(log_path, before)
        .with_context(|| format!("failed to re-read {}", log_path.display()))?;
    let records = verify_demo_records(&appended)?;

    println!(
        "log pipeline OK: {} records appended to {}",
        records.len(),
        log_path.display()
    );
    Ok(())
}

/// Emit the fixed demonstration sequence: one record per severity, one
/// caught failure, and one record from the emitter module.
pub fn emit_demo_records() {
    trace!("this is a trace message");
    debug!("this is a debug message");
    info!("this is an info message");
    warn!("this is a warning");
    error!("this is an error");

    // The failure is caught and logged with its context chain; execution
    // continues past it.
    if let Err(err) = exercise_division(1, 0) {
        error!("failed to perform division: {:#}", err);
    }

    emitter::emit_debug();
}

/// A division that fails on purpose when the denominator is zero.
fn exercise_division(numerator: i64, denominator: i64) -> Result<i64> {
    numerator
        .checked_div(denominator)
        .ok_or_else(|| anyhow!("attempt to divide {numerator} by zero"))
        .context("computing the demonstration quotient")
}

fn read_appended(path: &Path, offset: u64) -> Result<String> {
    let mut file = File::open(path)?;
    file.seek(SeekFrom::Start(offset))?;
    let mut appended = String::new();
    file.read_to_string(&mut appended)?;
    Ok(appended)
}

/// Check that `appended` holds exactly the demo sequence: seven records,
/// severities in emission order, the caught division failure in the sixth,
/// and the emitter module's target on the last.
pub fn verify_demo_records(appended: &str) -> Result<Vec<LogRecord>> {
    let lines: Vec<&str> = appended.lines().collect();
    if lines.len() != EXPECTED_LEVELS.len() {
        bail!(
            "expected {} appended records, found {}",
            EXPECTED_LEVELS.len(),
            lines.len()
        );
    }

    let mut records = Vec::with_capacity(lines.len());
    for (line, expected_level) in lines.iter().copied().zip(EXPECTED_LEVELS) {
        let record = LogRecord::parse(line)?;
        if record.level != expected_level {
            bail!(
                "expected a {expected_level} record, found {} in {line:?}",
                record.level
            );
        }
        records.push(record);
    }

    if !records[5].message.contains("divide") {
        bail!(
            "the caught-failure record does not mention the division: {:?}",
            records[5].message
        );
    }
    if !records[6].target.ends_with("logcheck::emitter") {
        bail!(
            "the cross-module record carries target {:?}, expected the emitter module",
            records[6].target
        );
    }

    Ok(records)
}
