use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{URL_TRUNCATE_LENGTH, colors};
use crate::utils::truncate;

pub fn draw_bookmarks_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::PRIMARY))
        .title(format!(
            "Bookmarks ({} in {} groups)",
            app.bookmarks.total_bookmarks(),
            app.bookmarks.groups().len()
        ))
        .title_style(Style::default().fg(colors::PRIMARY).bold());

    if app.bookmarks.groups().is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No bookmark groups yet",
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(colors::MUTED)),
                Span::styled("[g]", Style::default().fg(colors::SUCCESS).bold()),
                Span::styled(" to create a group", Style::default().fg(colors::MUTED)),
            ]),
        ])
        .block(block)
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let mut items = Vec::new();
    for group in app.bookmarks.groups() {
        items.push(ListItem::new(Line::from(vec![
            Span::styled(
                format!("▼ {}", group.name),
                Style::default().fg(colors::WARNING).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({})", group.bookmarks.len()),
                Style::default().fg(colors::MUTED),
            ),
        ])));
        for bookmark in &group.bookmarks {
            let mut spans = vec![
                Span::styled(
                    format!("    {}  ", bookmark.name),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    truncate(&bookmark.href, URL_TRUNCATE_LENGTH),
                    Style::default().fg(Color::Blue),
                ),
            ];
            if let Some(description) = bookmark.description.as_deref().filter(|d| !d.is_empty()) {
                spans.push(Span::styled(
                    format!("  {}", description),
                    Style::default().fg(colors::MUTED),
                ));
            }
            items.push(ListItem::new(Line::from(spans)));
        }
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(colors::HIGHLIGHT_BG)
                .fg(colors::HIGHLIGHT_FG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(app.bookmark_index));
    frame.render_stateful_widget(list, area, &mut state);
}
