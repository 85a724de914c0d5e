//! Live preview pane
//!
//! A terminal cannot embed the dashboard, so the pane shows the configured
//! target, the cache-busted frame source and how to open it.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::colors;

fn flag(on: bool) -> Span<'static> {
    if on {
        Span::styled("on", Style::default().fg(colors::SUCCESS))
    } else {
        Span::styled("off", Style::default().fg(colors::MUTED))
    }
}

pub fn draw_preview_screen(frame: &mut Frame, app: &App, area: Rect) {
    let preview = app.dashboard.preview();
    let title = if preview.is_fullscreen() {
        "Live Preview (fullscreen)"
    } else {
        "Live Preview"
    };
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(colors::PRIMARY).bold())
        .borders(Borders::ALL)
        .border_type(if preview.is_fullscreen() {
            BorderType::Double
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(colors::PRIMARY));

    let label = |text: &'static str| Span::styled(text, Style::default().fg(colors::MUTED));
    let mut lines = vec![Line::from("")];
    match preview.url() {
        Some(url) => {
            lines.push(Line::from(vec![
                label("Homepage URL:  "),
                Span::styled(
                    url.to_string(),
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]));
            lines.push(Line::from(vec![
                label("Frame source:  "),
                Span::raw(preview.frame_src().unwrap_or_default().to_string()),
            ]));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "No Homepage URL configured",
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(vec![
                label("Press "),
                Span::styled("[u]", Style::default().fg(colors::SUCCESS).bold()),
                label(" to set one, e.g. http://10.0.0.2:3000"),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![label("Visible:       "), flag(preview.is_visible())]));
    lines.push(Line::from(vec![
        label("Fullscreen:    "),
        flag(preview.is_fullscreen()),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(label(
        "Refresh reloads the frame source and checks that Homepage answers.",
    )));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false }),
        area,
    );
}
