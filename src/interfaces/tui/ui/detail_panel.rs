//! Detail panel for the selected category or service, plus the preview summary

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use serde_json::Value;

use crate::interfaces::tui::app::{App, TreeRow};
use crate::interfaces::tui::constants::colors;
use crate::models::Service;

const SECRET_KEYS: &[&str] = &["password", "key"];

fn field(label: &str, value: impl Into<String>, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<11}", label), Style::default().fg(colors::MUTED)),
        Span::styled(value.into(), Style::default().fg(color)),
    ])
}

fn setting_text(key: &str, value: &Value) -> String {
    if SECRET_KEYS.contains(&key) {
        return "••••••".to_string();
    }
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                Value::Object(map) => format!(
                    "{}={}",
                    map.get("field").and_then(Value::as_str).unwrap_or_default(),
                    map.get("label").and_then(Value::as_str).unwrap_or_default()
                ),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

fn service_lines(category: &str, service: &Service) -> Vec<Line<'static>> {
    let config = &service.config;
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            service.name.clone(),
            Style::default().fg(colors::PRIMARY).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("Category:", category, Color::White),
        field(
            "URL:",
            config.href.clone().unwrap_or_else(|| "-".into()),
            Color::Blue,
        ),
        field(
            "Icon:",
            config.icon.clone().unwrap_or_else(|| "-".into()),
            Color::White,
        ),
    ];
    if config.is_hidden() {
        lines.push(field("Status:", "Hidden", colors::MUTED));
    } else {
        lines.push(field("Status:", "Visible", colors::SUCCESS));
    }
    if config.show_stats == Some(true) {
        lines.push(field("Stats:", "shown", Color::White));
    }

    lines.push(Line::from(""));
    if config.health_check_enabled() {
        for (label, value) in [
            ("Ping:", &config.ping),
            ("Server:", &config.server),
            ("Container:", &config.container),
        ] {
            if let Some(value) = value {
                lines.push(field(label, value.clone(), Color::White));
            }
        }
    } else {
        lines.push(field("Health:", "disabled", colors::MUTED));
    }

    if let Some(widget) = &config.widget {
        lines.push(Line::from(""));
        let label = widget
            .kind()
            .map(|k| k.label().to_string())
            .unwrap_or_else(|| widget.widget_type.clone());
        lines.push(field("Widget:", label, colors::WARNING));
        for (key, value) in &widget.settings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}: ", key), Style::default().fg(colors::MUTED)),
                Span::raw(setting_text(key, value)),
            ]));
        }
        if let Some(display) = &config.display {
            lines.push(field("Display:", display.clone(), Color::White));
        }
    }
    lines
}

/// Draw the detail panel showing information about the selected row
pub fn draw_detail_panel(frame: &mut Frame, app: &App, area: Rect) {
    let preview = app.dashboard.preview();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if preview.is_visible() {
            [Constraint::Min(8), Constraint::Length(6)]
        } else {
            [Constraint::Min(8), Constraint::Length(0)]
        })
        .split(area);

    let block = Block::default()
        .title("Details")
        .title_style(Style::default().fg(colors::PRIMARY).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::MUTED));

    let config = app.dashboard.configuration();
    let lines = match app.selected_row() {
        Some(TreeRow::Service { category, name, .. }) => {
            match config.find_service(&category, &name) {
                Some(service) => service_lines(&category, service),
                None => vec![Line::from("Service not found")],
            }
        }
        Some(TreeRow::Category { name, .. }) => {
            let services = config.services(&name).unwrap_or_default();
            let hidden = services.iter().filter(|s| s.config.is_hidden()).count();
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    name.clone(),
                    Style::default().fg(colors::WARNING).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                field("Services:", services.len().to_string(), Color::White),
                field("Hidden:", hidden.to_string(), colors::MUTED),
                Line::from(""),
                Line::from(Span::styled(
                    "[a] add service  [r] rename  [d] delete  [m] move",
                    Style::default().fg(colors::MUTED),
                )),
            ]
        }
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Nothing selected",
                Style::default().fg(colors::MUTED),
            )),
        ],
    };

    let details = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(details, chunks[0]);

    if preview.is_visible() {
        draw_preview_summary(frame, app, chunks[1]);
    }
}

fn draw_preview_summary(frame: &mut Frame, app: &App, area: Rect) {
    let preview = app.dashboard.preview();
    let lines = match preview.url() {
        Some(url) => vec![
            field("URL:", url, Color::Blue),
            field(
                "Frame:",
                preview.frame_src().unwrap_or_default(),
                colors::MUTED,
            ),
            Line::from(Span::styled(
                "[p] open  [Ctrl+R] refresh  [Ctrl+F] fullscreen",
                Style::default().fg(colors::MUTED),
            )),
        ],
        None => vec![Line::from(Span::styled(
            "No Homepage URL set. Press [p] then [u].",
            Style::default().fg(colors::MUTED),
        ))],
    };
    let block = Block::default()
        .title("Live Preview")
        .title_style(Style::default().fg(colors::PRIMARY).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::MUTED));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
