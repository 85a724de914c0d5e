//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod bookmarks;
mod categories;
mod config_io;
mod helpers;
mod preview;
mod services;
mod session;
mod widgets;

pub use bookmarks::*;
pub use categories::*;
pub use config_io::*;
pub use preview::*;
pub use services::*;
pub use session::*;
pub use widgets::*;
