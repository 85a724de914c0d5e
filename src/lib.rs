//! homepage-admin - administration client for a Homepage dashboard backend
//!
//! This library provides the pieces behind the `homepage-admin` binary: a
//! typed REST client for the services/bookmarks/config backend, the service
//! editor with its declarative widget forms, drag-and-drop reordering, live
//! preview handling and the CLI/TUI front ends built on top of them.
//!
//! # Features
//! - **cli**: Command-line interface (default)
//! - **tui**: Terminal user interface (default)
//!
//! # Architecture
//! - `client`: HTTP transport, session/token storage and endpoint groups
//! - `models`: Wire types (services, widgets, bookmarks, payloads)
//! - `editor`: Widget schema table, generic form and service editor
//! - `dashboard` / `bookmarks`: Controllers that turn user actions into requests and toasts
//! - `reorder`: Sortable bindings and drop → request planning
//! - `render` / `state` / `notify` / `preview`: View model, loaded state, toasts, live preview
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging initialization

pub mod bookmarks;
pub mod cli;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod editor;
pub mod errors;
pub mod interfaces;
pub mod models;
pub mod notify;
pub mod preview;
pub mod render;
pub mod reorder;
pub mod runtime;
pub mod state;
pub mod system;
pub mod utils;
