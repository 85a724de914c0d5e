//! Mode routing
//!
//! This module provides unified entry points for the execution modes:
//! - CLI mode (one subcommand, then exit)
//! - TUI mode (interactive terminal dashboard)
//!
//! The mode selection is based on the parsed command and feature flags.

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::Commands;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "cli")]
    Cli,
    #[cfg(feature = "tui")]
    Tui,
    /// No subcommand: print usage
    Help,
}

/// Detect which mode to run based on the parsed subcommand
///
/// # Mode Detection Logic
/// 1. `tui` with the TUI feature enabled -> TUI mode
/// 2. Any other subcommand with the CLI feature enabled -> CLI mode
/// 3. Otherwise -> Help
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    #[cfg(feature = "tui")]
    if matches!(command, Some(Commands::Tui)) {
        return Mode::Tui;
    }

    #[cfg(feature = "cli")]
    if command.is_some() {
        return Mode::Cli;
    }

    #[cfg(not(feature = "cli"))]
    let _ = command;

    Mode::Help
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_is_help() {
        assert_eq!(detect_mode(None), Mode::Help);
    }

    #[test]
    fn test_subcommand_is_cli() {
        assert_eq!(detect_mode(Some(&Commands::Logout)), Mode::Cli);
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_tui_subcommand() {
        assert_eq!(detect_mode(Some(&Commands::Tui)), Mode::Tui);
    }
}
