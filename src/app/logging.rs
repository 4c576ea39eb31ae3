//! Logging configuration and initialization
//!
//! All records go to a single append-mode file in the fixed line format
//! `TIMESTAMP - TARGET - LEVEL - MESSAGE`. The pipeline is built as an
//! explicit [`LogHandle`] value: callers construct it, decide where it is
//! installed, and keep it for as long as records should flow. There is no
//! silent first-caller-wins initialization; installing a second global
//! sink is an error.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{dispatcher, Dispatch, Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

use crate::error::WastrelError;

/// Timestamp layout used in every record, `2026-08-26 14:03:59` style.
pub const TIMESTAMP_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// Where records go and which ones get through.
#[derive(Debug, Clone)]
pub struct LogSettings {
    /// Log file destination, opened in append mode
    pub path: PathBuf,
    /// Filter directives, overridable through `RUST_LOG`
    pub filter: String,
}

/// An opened logging pipeline.
///
/// Owning a handle means the file is open and the subscriber is built;
/// nothing is recorded until the handle is installed globally with
/// [`LogHandle::install`] or used for one closure with
/// [`LogHandle::scoped`].
#[derive(Debug)]
pub struct LogHandle {
    path: PathBuf,
    dispatch: Dispatch,
}

/// Renders one record per line as `TIMESTAMP - TARGET - LEVEL - MESSAGE`.
struct RecordFormat;

impl<S, N> FormatEvent<S, N> for RecordFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        write!(
            writer,
            "{} - {} - {} - ",
            Local::now().format(TIMESTAMP_PATTERN),
            metadata.target(),
            metadata.level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

impl LogHandle {
    /// Open the log file and build the record pipeline.
    ///
    /// The file is opened for appending and created if absent; a missing
    /// parent directory is an error, not something to silently create.
    /// `RUST_LOG` takes precedence over the configured filter.
    pub fn open(settings: &LogSettings) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&settings.path)
            .with_context(|| {
                format!(
                    "failed to open log file {} for appending",
                    settings.path.display()
                )
            })?;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&settings.filter));

        let subscriber = tracing_subscriber::registry().with(filter).with(
            fmt::layer()
                .event_format(RecordFormat)
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        );

        Ok(Self {
            path: settings.path.clone(),
            dispatch: Dispatch::new(subscriber),
        })
    }

    /// Install this pipeline as the process-wide record sink.
    ///
    /// Each process configures logging exactly once; a second install
    /// fails loudly instead of being ignored.
    pub fn install(&self) -> Result<()> {
        dispatcher::set_global_default(self.dispatch.clone()).map_err(|_| {
            WastrelError::logging(
                "a global logging sink is already installed for this process",
                Some(self.path.clone()),
            )
            .into()
        })
    }

    /// Run `f` with this pipeline installed for the current thread only.
    pub fn scoped<T>(&self, f: impl FnOnce() -> T) -> T {
        dispatcher::with_default(&self.dispatch, f)
    }

    /// The file this handle appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
