//! Logging system initialization
//!
//! This module provides functions to initialize the tracing/logging system
//! based on application configuration.

use std::path::{Path, PathBuf};

use tracing_appender::rolling;

use crate::config::{StaticConfig, default_state_dir};

/// Where console-less modes should send their log output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// CLI: log to stderr unless a file is configured
    Console,
    /// TUI: never write to the terminal, fall back to a file in the state dir
    FileOnly,
}

/// Resolve the log file to use, if any.
pub fn resolve_log_file(config: &StaticConfig, target: LogTarget) -> Option<PathBuf> {
    match config.logging.file.as_deref() {
        Some(file) if !file.is_empty() => Some(PathBuf::from(file)),
        _ if target == LogTarget::FileOnly => Some(default_state_dir().join("homepage-admin.log")),
        _ => None,
    }
}

/// Initialize logging system based on configuration
///
/// **Note**: This should be called only once during application startup,
/// after the configuration has been loaded.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
pub fn init_logging(
    config: &StaticConfig,
    target: LogTarget,
) -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_file = resolve_log_file(config, target);

    let writer: Box<dyn std::io::Write + Send + Sync> = match log_file.as_deref() {
        Some(path) if config.logging.enable_rotation => {
            let dir = path.parent().unwrap_or(Path::new("."));
            std::fs::create_dir_all(dir)?;
            let filename = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("homepage-admin.log");
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(filename.trim_end_matches(".log"))
                .filename_suffix("log")
                .max_log_files(config.logging.max_backups as usize)
                .build(dir)?;
            Box::new(appender)
        }
        Some(path) => {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            Box::new(file)
        }
        None => Box::new(std::io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.logging.level.clone()));

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_target(false)
        .with_ansi(log_file.is_none());

    if config.logging.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    }
    .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(guard)
}
