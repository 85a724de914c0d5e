use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{InputField, Popup};
use crate::interfaces::tui::app::{App, LoginField};
use crate::interfaces::tui::constants::{colors, popup};

pub fn draw_login_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner = Popup::new("Login", popup::LOGIN)
        .margin(Margin::new(2, 1))
        .hint("Tab switch · Enter login · Esc quit")
        .render(frame, area);

    let form = &app.login;
    let username = InputField::new("Username", &form.username)
        .active(form.focus == LoginField::Username)
        .required();
    // 登录失败的提示显示在密码框下方
    let password = InputField::new("Password", &form.password)
        .active(form.focus == LoginField::Password)
        .required()
        .masked()
        .error(form.error.as_deref());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(username.height()),
            Constraint::Length(password.height()),
            Constraint::Min(0),
        ])
        .split(inner);

    let backend = Paragraph::new(Line::from(vec![
        Span::styled("Backend: ", Style::default().fg(colors::MUTED)),
        Span::styled(
            app.dashboard.client().base_url().to_string(),
            Style::default().fg(colors::PRIMARY).add_modifier(Modifier::UNDERLINED),
        ),
    ]));
    frame.render_widget(backend, chunks[0]);

    username.render(frame, chunks[1]);
    password.render(frame, chunks[2]);
}
