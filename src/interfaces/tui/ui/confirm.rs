use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};

pub fn draw_confirm_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Some(confirm) = &app.confirm else {
        return;
    };
    let inner = Popup::new(&confirm.title, popup::CONFIRM)
        .theme_color(colors::ERROR)
        .margin(Margin::new(2, 2))
        .render(frame, area);

    let mut text = vec![Line::from("")];
    text.extend(confirm.message.lines().map(|line| {
        Line::from(Span::styled(
            line.to_string(),
            Style::default().fg(Color::White).bold(),
        ))
    }));
    text.push(Line::from(""));
    text.push(Line::from(vec![
        Span::styled("[y]", Style::default().fg(colors::SUCCESS).bold()),
        Span::styled(" Yes    ", Style::default().fg(colors::MUTED)),
        Span::styled("[n]", Style::default().fg(colors::ERROR).bold()),
        Span::styled(" No", Style::default().fg(colors::MUTED)),
    ]));

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
