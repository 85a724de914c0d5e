//! 单行输入框
//!
//! 用于登录、书签表单和弹窗输入，支持激活高亮、错误提示和密码遮蔽

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
///
/// ```rust,ignore
/// InputField::new("URL", &editor.href)
///     .active(true)
///     .required()
///     .placeholder("https://github.com")
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    is_active: bool,
    error: Option<&'a str>,
    placeholder: Option<&'a str>,
    masked: bool,
    required: bool,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            error: None,
            placeholder: None,
            masked: false,
            required: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        if !placeholder.is_empty() {
            self.placeholder = Some(placeholder);
        }
        self
    }

    /// 密码遮蔽模式
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// 输入框 + 错误行
    pub fn height(&self) -> u16 {
        if self.error.is_some() { 4 } else { 3 }
    }

    fn display_title(&self) -> String {
        if self.required {
            format!("{} *", self.title)
        } else {
            self.title.to_string()
        }
    }

    fn border_style(&self) -> Style {
        if self.error.is_some() {
            Style::default().fg(colors::ERROR)
        } else if self.is_active {
            Style::default().fg(colors::WARNING).bold()
        } else {
            Style::default().fg(Color::White)
        }
    }

    fn display_line(&self) -> Line<'a> {
        if self.value.is_empty() {
            let placeholder = if self.is_active {
                String::new()
            } else {
                self.placeholder.unwrap_or_default().to_string()
            };
            return Line::from(Span::styled(placeholder, Style::default().fg(colors::MUTED)));
        }
        let mut text = if self.masked {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.to_string()
        };
        if self.is_active {
            text.push('▏');
        }
        Line::from(text)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let input = Paragraph::new(self.display_line()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, chunks[0]);

        if let Some(error) = self.error {
            let error_text = Paragraph::new(error).style(Style::default().fg(colors::ERROR));
            frame.render_widget(error_text, chunks[1]);
        }
    }
}
