//! CLI mode
//!
//! This module contains the CLI mode startup logic.
//! It delegates to the actual CLI implementation.

use crate::cli::Commands;
use crate::interfaces::cli::CliError;
use crate::runtime::lifetime;
use crate::system::LogTarget;

/// Run CLI mode
///
/// This function:
/// 1. Performs pre-startup processing (logging to the console)
/// 2. Delegates to the actual CLI implementation
pub async fn run_cli(command: Commands) -> Result<(), CliError> {
    let _guard = lifetime::startup::cli_tui_pre_startup(LogTarget::Console)
        .map_err(|e| CliError::CommandError(e.to_string()))?;
    crate::interfaces::cli::run_cli_command(command).await
}
