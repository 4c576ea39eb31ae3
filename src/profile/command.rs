//! The `profile` command: run the reduced workload under instrumentation.

use std::hint::black_box;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::cli::validation::{
    validate_computation_limit, validate_list_size, validate_string_count,
};
use crate::monitor::{ProfileReport, Profiler};
use crate::workload::{build_squares, burn_cpu, concatenate_range};

/// Command-line arguments for the profile command
///
/// Defaults are one tenth of the full workload, sized so an instrumented
/// run stays comfortable while still allocating enough to see.
#[derive(Debug, Args, Clone)]
pub struct ProfileCommand {
    /// Number of squared integers to materialize
    #[arg(long, value_name = "N", default_value_t = 100_000)]
    pub list_size: usize,

    /// How many integers to append to the accumulator string
    #[arg(long, value_name = "N", default_value_t = 1_000)]
    pub string_count: usize,

    /// Upper bound of the CPU-burn summation
    #[arg(long, value_name = "N", default_value_t = 1_000_000)]
    pub burn: u64,

    /// Emit the stage report as pretty-printed JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Validate the sizes, run the instrumented workload, print the report.
pub async fn run(command: ProfileCommand) -> Result<()> {
    validate_list_size(command.list_size)?;
    validate_string_count(command.string_count)?;
    validate_computation_limit(command.burn)?;

    let json = command.json;
    let report = tokio::task::spawn_blocking(move || execute(&command))
        .await
        .context("profiling task panicked")?;
    debug!("profiled run captured {} stage reports", report.stages.len());

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize profile report")?
        );
    } else {
        println!();
        print!("{}", report.render());
    }
    Ok(())
}

fn execute(command: &ProfileCommand) -> ProfileReport {
    println!("Starting profiled workload...");
    let profiler = Profiler::new();

    // Instrumentation is attached here, where it can be seen: the two
    // allocation-heavy stages are wrapped, the burn loop runs bare.
    let build_squares = profiler.instrument("build_squares", build_squares);
    let concatenate_range = profiler.instrument("concatenate_range", concatenate_range);

    let squares = build_squares(command.list_size);
    println!("Materialized {} squared integers.", squares.len());

    let joined = concatenate_range(command.string_count);
    println!("Concatenated string length: {}", joined.len());

    let total = burn_cpu(command.burn);
    println!("Computation result: {}", total);

    black_box((&squares, &joined));
    println!("Profiled workload finished.");

    profiler.report()
}
