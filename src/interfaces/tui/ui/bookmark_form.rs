use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{InputField, Popup};
use crate::interfaces::tui::app::{App, BookmarkField};
use crate::interfaces::tui::constants::{colors, popup};

pub fn draw_bookmark_form_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Some(editor) = app.bookmarks.editor() else {
        return;
    };
    let form = &app.bookmark_form;
    let inner = Popup::new(editor.title(), popup::BOOKMARK_FORM)
        .hint("Tab next · Enter save · Esc cancel")
        .render(frame, area);

    let fields = [
        (BookmarkField::Name, editor.name.as_str(), true, ""),
        (BookmarkField::Href, editor.href.as_str(), true, "https://github.com"),
        (BookmarkField::Icon, editor.icon.as_str(), false, "github.png"),
        (BookmarkField::Description, editor.description.as_str(), false, ""),
    ];
    let inputs: Vec<InputField> = fields
        .into_iter()
        .map(|(field, value, required, placeholder)| {
            let input = InputField::new(field.title(), value)
                .active(form.focus == field)
                .placeholder(placeholder)
                .error(form.field_error(field));
            if required {
                input.required()
            } else {
                input
            }
        })
        .collect();

    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(inputs.iter().map(|input| Constraint::Length(input.height())));
    constraints.push(Constraint::Min(1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Group: ", Style::default().fg(colors::MUTED)),
            Span::styled(editor.group().to_string(), Style::default().fg(colors::WARNING)),
        ])),
        chunks[0],
    );

    for (index, input) in inputs.iter().enumerate() {
        input.render(frame, chunks[index + 1]);
    }

    if let Some(error) = form.form_error() {
        frame.render_widget(
            Paragraph::new(error)
                .style(Style::default().fg(colors::ERROR).add_modifier(Modifier::BOLD)),
            chunks[inputs.len() + 1],
        );
    }
}
