//! TUI application state and the operations behind each key binding

mod navigation;
mod operations;
mod state;

pub use state::*;
