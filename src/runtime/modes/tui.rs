//! TUI mode
//!
//! This module contains the TUI (Terminal User Interface) mode startup logic.
//! It delegates to the actual TUI implementation.

use crate::runtime::lifetime;
use crate::system::LogTarget;

/// Run TUI mode
///
/// This function:
/// 1. Performs pre-startup processing (logging to a file only, the
///    terminal belongs to the UI)
/// 2. Delegates to the actual TUI implementation
pub async fn run_tui() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = lifetime::startup::cli_tui_pre_startup(LogTarget::FileOnly)?;
    crate::interfaces::tui::run_tui().await
}
