//! Error handling utilities
//!
//! This module provides the single exit path for fatal errors.

use tracing::error;

use crate::error::WastrelError;

/// Handle a fatal error and exit with its classified status code.
///
/// The full context chain is always written to the log; stderr carries
/// the condensed message, plus the chain when running with `-v`.
/// Classified [`WastrelError`]s pick the exit code (invalid input exits
/// with 2); anything else exits with 1.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("fatal: {:#}", error);

    eprintln!("Error: {error:#}");
    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    let exit_code = error
        .downcast_ref::<WastrelError>()
        .map(WastrelError::exit_code)
        .unwrap_or(1);
    std::process::exit(exit_code)
}
