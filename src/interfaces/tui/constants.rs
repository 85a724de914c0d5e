//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

use std::time::Duration;

/// URL 显示截断长度
pub const URL_TRUNCATE_LENGTH: usize = 50;

/// 翻页滚动步长
pub const PAGE_SCROLL_STEP: usize = 10;

/// 事件轮询间隔（用于提示消息过期刷新）
pub const TICK_RATE: Duration = Duration::from_millis(250);

/// 导出默认文件名
pub const DEFAULT_CONFIG_EXPORT: &str = "services.yaml";
pub const DEFAULT_BOOKMARK_EXPORT: &str = "bookmarks.yaml";

/// 弹窗尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// 宽度百分比 (0-100)
    pub width: u16,
    /// 高度百分比 (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 各弹窗的尺寸配置
pub mod popup {
    use super::PopupSize;

    /// 登录
    pub const LOGIN: PopupSize = PopupSize::new(50, 40);
    /// 服务表单
    pub const SERVICE_FORM: PopupSize = PopupSize::new(80, 90);
    /// 书签表单
    pub const BOOKMARK_FORM: PopupSize = PopupSize::new(70, 60);
    /// 单行输入
    pub const PROMPT: PopupSize = PopupSize::new(60, 25);
    /// 确认
    pub const CONFIRM: PopupSize = PopupSize::new(60, 35);
    /// 帮助弹窗
    pub const HELP: PopupSize = PopupSize::new(80, 90);
    /// 退出确认
    pub const EXITING: PopupSize = PopupSize::new(50, 25);
}

/// 颜色主题
pub mod colors {
    use ratatui::style::Color;

    /// 主色调
    pub const PRIMARY: Color = Color::Cyan;
    /// 成功色
    pub const SUCCESS: Color = Color::Green;
    /// 警告色
    pub const WARNING: Color = Color::Yellow;
    /// 错误色
    pub const ERROR: Color = Color::Red;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;
    /// 高亮背景色
    pub const HIGHLIGHT_BG: Color = Color::Yellow;
    /// 高亮前景色
    pub const HIGHLIGHT_FG: Color = Color::Black;
    /// 拖拽中条目
    pub const GRABBED: Color = Color::Magenta;
}
