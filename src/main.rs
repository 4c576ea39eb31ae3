use clap::Parser;
use tracing::{debug, trace};

use wastrel::app::config::AppConfig;
use wastrel::app::error_handling::handle_fatal_error;
use wastrel::app::logging::LogHandle;
use wastrel::cli::args::Cli;
use wastrel::cli::router::execute_command;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(error) => handle_fatal_error(error, cli.verbose),
    };

    // The logging pipeline is an owned value: opened here, installed
    // exactly once, and held for the life of the process.
    let _log_handle = match open_logging(&config) {
        Ok(handle) => handle,
        Err(error) => handle_fatal_error(error, cli.verbose),
    };

    debug!("wastrel started with verbosity level: {}", config.verbose);
    trace!("full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(error) = execute_command(cli.command, &config).await {
        handle_fatal_error(error, config.verbose);
    }
}

fn build_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::new(cli.verbose)?;
    if let Some(path) = &cli.log_file {
        config = config.with_log_file(path.clone());
    }
    Ok(config)
}

fn open_logging(config: &AppConfig) -> anyhow::Result<LogHandle> {
    let handle = LogHandle::open(&config.log_settings())?;
    handle.install()?;
    Ok(handle)
}
