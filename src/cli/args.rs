//! CLI argument structures
//!
//! This module defines the main CLI structure and all subcommand
//! definitions for wastrel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::logcheck::LogCheckCommand;
use crate::profile::ProfileCommand;
use crate::workload::WorkloadCommand;

/// Deliberately wasteful workloads for exercising profilers and log pipelines
#[derive(Parser)]
#[command(name = "wastrel")]
#[command(about = "wastrel - deliberately wasteful workloads for exercising profilers and log pipelines", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging (-v includes dependency records, -vv records everything)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log file destination (default: first three components of the working directory plus logs/app.log)
    #[arg(long, value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full-size wasteful workload
    #[command(name = "run")]
    Run(WorkloadCommand),

    /// Run the reduced workload with memory instrumentation attached
    #[command(name = "profile")]
    Profile(ProfileCommand),

    /// Exercise the logging pipeline and verify the appended records
    #[command(name = "log-check")]
    LogCheck(LogCheckCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_defaults_to_the_full_workload() {
        let cli = Cli::parse_from(["wastrel", "run"]);
        match cli.command {
            Commands::Run(command) => {
                assert_eq!(command.list_size, 1_000_000);
                assert_eq!(command.string_count, 10_000);
                assert_eq!(command.burn, 10_000_000);
            }
            _ => panic!("expected the run command"),
        }
    }

    #[test]
    fn test_profile_defaults_to_the_reduced_workload() {
        let cli = Cli::parse_from(["wastrel", "profile"]);
        match cli.command {
            Commands::Profile(command) => {
                assert_eq!(command.list_size, 100_000);
                assert_eq!(command.string_count, 1_000);
                assert_eq!(command.burn, 1_000_000);
                assert!(!command.json);
            }
            _ => panic!("expected the profile command"),
        }
    }

    #[test]
    fn test_global_flags_parse_after_the_subcommand() {
        let cli = Cli::parse_from(["wastrel", "log-check", "-vv", "--log-file", "/tmp/x.log"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/x.log")));
        assert!(matches!(cli.command, Commands::LogCheck(_)));
    }
}
