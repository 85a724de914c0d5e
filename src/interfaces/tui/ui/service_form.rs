//! Add/edit service popup
//!
//! Rows are rebuilt from the editor every frame, so widget fields appear and
//! disappear as the widget type or health check changes.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::editor::{FieldKind, ServiceEditor};
use crate::interfaces::tui::app::{App, FormRow, ServiceFormState};
use crate::interfaces::tui::constants::{colors, popup};

const LABEL_WIDTH: usize = 24;

/// Label, value and whether the row is required
fn row_content(row: FormRow, editor: &ServiceEditor, form: &ServiceFormState) -> (String, String, bool) {
    let checkbox = |on: bool| (if on { "[x]" } else { "[ ]" }).to_string();
    match row {
        FormRow::Name => (row.label().into(), editor.name.clone(), true),
        FormRow::Category => (row.label().into(), format!("‹ {} ›", editor.category), true),
        FormRow::Icon => (row.label().into(), editor.icon.clone(), false),
        FormRow::Href => (row.label().into(), editor.href.clone(), false),
        FormRow::Display => {
            let value = if editor.display.is_empty() {
                "default"
            } else {
                editor.display.as_str()
            };
            (row.label().into(), format!("‹ {} ›", value), false)
        }
        FormRow::ShowStats => (row.label().into(), checkbox(editor.show_stats), false),
        FormRow::HealthCheck => (
            row.label().into(),
            checkbox(editor.health_check_enabled()),
            false,
        ),
        FormRow::Ping => (row.label().into(), editor.ping.clone(), false),
        FormRow::Server => (row.label().into(), editor.server.clone(), false),
        FormRow::Container => (row.label().into(), editor.container.clone(), false),
        FormRow::WidgetType => {
            let value = editor
                .widget_kind()
                .map(|k| k.label().to_string())
                .unwrap_or_else(|| "None".into());
            (row.label().into(), format!("‹ {} ›", value), false)
        }
        FormRow::WidgetField(i) => {
            let Some(handle) = editor.widget().and_then(|w| w.fields().get(i)) else {
                return (String::new(), String::new(), false);
            };
            let descriptor = handle.descriptor;
            let value = match descriptor.kind {
                FieldKind::Mappings => form.mappings_input.clone(),
                FieldKind::Select(_) => format!("‹ {} ›", handle.text()),
                _ => handle.display_value(),
            };
            (format!("  {}", descriptor.label), value, descriptor.required)
        }
    }
}

fn placeholder(row: FormRow, editor: &ServiceEditor) -> &'static str {
    match row {
        FormRow::Href | FormRow::Ping => "https://...",
        FormRow::Icon => "emby.png or https://...",
        FormRow::WidgetField(i) => editor
            .widget()
            .and_then(|w| w.fields().get(i))
            .map(|h| {
                if h.descriptor.kind == FieldKind::Mappings {
                    "field=Label, field=Label"
                } else {
                    h.descriptor.placeholder
                }
            })
            .unwrap_or_default(),
        _ => "",
    }
}

pub fn draw_service_form_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(editor) = app.dashboard.editor() else {
        return;
    };
    let form = &app.service_form;
    let inner = Popup::new(editor.title(), popup::SERVICE_FORM)
        .theme_color(if editor.is_edit() {
            colors::WARNING
        } else {
            colors::SUCCESS
        })
        .hint("Tab next · ←/→ choose · Space toggle · Enter save · Esc cancel")
        .render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(inner);

    let rows = ServiceFormState::rows(editor);
    let focus = form.focus.min(rows.len().saturating_sub(1));
    let visible = chunks[0].height.max(1) as usize;
    let offset = (focus + 1).saturating_sub(visible);

    let mut lines = Vec::new();
    for (index, row) in rows.iter().enumerate().skip(offset).take(visible) {
        let (label, value, required) = row_content(*row, editor, form);
        let focused = index == focus;
        let label = if required {
            format!("{} *", label)
        } else {
            label
        };
        let label_style = if focused {
            Style::default().fg(colors::WARNING).add_modifier(Modifier::BOLD)
        } else if matches!(row, FormRow::WidgetField(_)) {
            Style::default().fg(Color::Blue)
        } else {
            Style::default().fg(colors::MUTED)
        };
        let value_span = if value.is_empty() && !focused {
            Span::styled(placeholder(*row, editor), Style::default().fg(colors::MUTED))
        } else if focused {
            let cursor = if row.is_choice(editor) || row.is_toggle(editor) {
                ""
            } else {
                "▏"
            };
            Span::styled(
                format!("{}{}", value, cursor),
                Style::default()
                    .fg(colors::HIGHLIGHT_FG)
                    .bg(colors::HIGHLIGHT_BG),
            )
        } else {
            Span::styled(value, Style::default().fg(Color::White))
        };
        lines.push(Line::from(vec![
            Span::styled(if focused { "> " } else { "  " }, label_style),
            Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH), label_style),
            value_span,
        ]));
    }
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let footer = match &form.error {
        Some(error) => Line::from(Span::styled(
            error.clone(),
            Style::default().fg(colors::ERROR).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            format!("Field {}/{}", focus + 1, rows.len()),
            Style::default().fg(colors::MUTED),
        )),
    };
    frame.render_widget(Paragraph::new(footer), chunks[1]);
}
