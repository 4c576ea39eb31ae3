//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective
//! implementations.

use anyhow::Result;

use crate::app::config::AppConfig;
use crate::cli::args::Commands;

/// Execute a CLI command based on the parsed arguments
pub async fn execute_command(command: Commands, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Run(workload_command) => crate::workload::run(workload_command).await,
        Commands::Profile(profile_command) => crate::profile::run(profile_command).await,
        Commands::LogCheck(logcheck_command) => {
            crate::logcheck::run(logcheck_command, config).await
        }
    }
}
