//! The `run` command: execute the full wasteful workload.

use std::hint::black_box;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::cli::validation::{
    validate_computation_limit, validate_list_size, validate_string_count,
};
use crate::workload::{build_squares, burn_cpu, concatenate_range};

/// Command-line arguments for the run command
///
/// Defaults match the canonical full-size workload: a million squares,
/// ten thousand concatenated integers, ten million burn iterations.
#[derive(Debug, Args, Clone)]
pub struct WorkloadCommand {
    /// Number of squared integers to materialize
    #[arg(long, value_name = "N", default_value_t = 1_000_000)]
    pub list_size: usize,

    /// How many integers to append to the accumulator string
    #[arg(long, value_name = "N", default_value_t = 10_000)]
    pub string_count: usize,

    /// Upper bound of the CPU-burn summation
    #[arg(long, value_name = "N", default_value_t = 10_000_000)]
    pub burn: u64,
}

/// Validate the sizes, then run every stage on a blocking worker.
pub async fn run(command: WorkloadCommand) -> Result<()> {
    validate_list_size(command.list_size)?;
    validate_string_count(command.string_count)?;
    validate_computation_limit(command.burn)?;

    tokio::task::spawn_blocking(move || execute(&command))
        .await
        .context("workload task panicked")?;
    Ok(())
}

fn execute(command: &WorkloadCommand) {
    println!("Starting wasteful workload...");

    let started = Instant::now();
    let squares = build_squares(command.list_size);
    debug!("built {} squares in {:?}", squares.len(), started.elapsed());
    println!("Materialized {} squared integers.", squares.len());

    let started = Instant::now();
    let joined = concatenate_range(command.string_count);
    debug!(
        "concatenated {} integers in {:?}",
        command.string_count,
        started.elapsed()
    );
    println!("Concatenated string length: {}", joined.len());

    let started = Instant::now();
    let total = burn_cpu(command.burn);
    debug!(
        "burned through {} iterations in {:?}",
        command.burn,
        started.elapsed()
    );
    println!("Computation result: {}", total);

    // Keep the allocations alive to the end of the run and out of the
    // optimizer's reach; the resident memory is part of the exercise.
    black_box((&squares, &joined));

    println!("Workload finished.");
}
