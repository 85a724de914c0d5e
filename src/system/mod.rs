//! Platform glue shared by the CLI and TUI entry points

pub mod logging;

pub use logging::{LogTarget, init_logging};
