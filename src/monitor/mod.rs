//! Memory instrumentation for the profiled workload
//!
//! The profiler never hides inside the functions it measures. Callers
//! wrap a stage explicitly with [`Profiler::instrument`] and get back a
//! callable that samples memory around every invocation, so the
//! attachment is visible wherever a stage is measured.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use chrono::{DateTime, Utc};

pub mod memory;
pub mod report;

pub use memory::{MemoryMonitor, MemorySample};
pub use report::{format_bytes, format_signed_bytes, ProfileReport, StageReport};

/// Collects per-call stage measurements through instrumented wrappers.
///
/// Wrappers share the profiler's state through `Arc`s, so they stay
/// usable after being handed off while the profiler keeps the report.
///
/// ```
/// let profiler = wastrel::monitor::Profiler::new();
/// let build_squares = profiler.instrument("build_squares", wastrel::workload::build_squares);
///
/// let squares = build_squares(16);
///
/// assert_eq!(squares.len(), 16);
/// assert_eq!(profiler.report().stages.len(), 1);
/// ```
pub struct Profiler {
    monitor: Arc<Mutex<MemoryMonitor>>,
    stages: Arc<Mutex<Vec<StageReport>>>,
    started_at: DateTime<Utc>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Profiler {
    pub fn new() -> Self {
        Self {
            monitor: Arc::new(Mutex::new(MemoryMonitor::new())),
            stages: Arc::new(Mutex::new(Vec::new())),
            started_at: Utc::now(),
        }
    }

    /// Wrap `f`, recording one [`StageReport`] per call.
    ///
    /// Memory is sampled immediately before and after each call and the
    /// wrapped function's return value passes through untouched.
    pub fn instrument<A, R, F>(&self, name: &str, f: F) -> impl Fn(A) -> R
    where
        F: Fn(A) -> R,
    {
        let name = name.to_string();
        let monitor = Arc::clone(&self.monitor);
        let stages = Arc::clone(&self.stages);

        move |arg| {
            let before = lock(&monitor).sample();
            let started = Instant::now();
            let result = f(arg);
            let elapsed = started.elapsed();
            let after = lock(&monitor).sample();

            lock(&stages).push(StageReport {
                name: name.clone(),
                elapsed,
                rss_before: before.process_bytes,
                rss_after: after.process_bytes,
                rss_delta: after.process_bytes as i64 - before.process_bytes as i64,
            });

            result
        }
    }

    /// Snapshot of everything recorded so far, in call order.
    pub fn report(&self) -> ProfileReport {
        ProfileReport {
            captured_at: self.started_at,
            stages: lock(&self.stages).clone(),
        }
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}
