//! Deliberately wasteful workload primitives
//!
//! Everything in this module is intentionally expensive: a full
//! materialized list where an iterator would do, a quadratic string
//! build, and a long summation loop that keeps yielding the CPU. The
//! waste is the point; profilers and log pipelines need something
//! predictable to chew on. None of it may be "fixed" for performance.

use std::thread;
use std::time::Duration;

pub mod command;

pub use command::{run, WorkloadCommand};

/// Iterations between sleeps in [`burn_cpu`].
const SLEEP_EVERY: u64 = 1000;
/// Pause inserted into the burn loop at each sleep point.
const SLEEP_INTERVAL: Duration = Duration::from_micros(10);

/// Materialize the squares of `0..size` as one fully allocated vector.
pub fn build_squares(size: usize) -> Vec<u64> {
    (0..size as u64).map(|i| i * i).collect()
}

/// Concatenate the decimal representations of `0..count` into one string.
///
/// Each pass rebuilds the accumulator from scratch, so the total work is
/// quadratic in `count`. An amortized `push_str` would defeat the purpose.
pub fn concatenate_range(count: usize) -> String {
    let mut result = String::new();
    for i in 0..count {
        result = format!("{result}{i}");
    }
    result
}

/// Sum `0..n`, sleeping briefly every [`SLEEP_EVERY`] iterations.
///
/// The sleeps hand the CPU back often enough that the loop shows up in a
/// profile as a long-running stage rather than one hot spin. Returns
/// `n * (n - 1) / 2`, computed the slow way.
pub fn burn_cpu(n: u64) -> u64 {
    let mut total: u64 = 0;
    for i in 0..n {
        total += i;
        if i % SLEEP_EVERY == 0 {
            thread::sleep(SLEEP_INTERVAL);
        }
    }
    total
}
