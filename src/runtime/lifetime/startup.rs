use anyhow::{Context, Result};
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::get_config;
use crate::system::{LogTarget, init_logging};

/// CLI / TUI 模式预处理
///
/// 初始化日志并记录本次运行使用的后端与会话文件。返回的 guard 必须在
/// 进程结束前保持存活，否则缓冲中的日志会丢失。
pub fn cli_tui_pre_startup(target: LogTarget) -> Result<WorkerGuard> {
    let config = get_config();
    let guard = init_logging(&config, target).context("Failed to initialize logging")?;
    debug!(
        base_url = %config.api.base_url,
        state_file = %config.state_file().display(),
        timeout_secs = config.api.timeout_secs,
        "Starting homepage-admin"
    );
    Ok(guard)
}
