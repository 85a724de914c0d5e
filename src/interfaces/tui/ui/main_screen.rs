use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState},
};

use crate::interfaces::tui::app::{App, Grab};
use crate::interfaces::tui::constants::{URL_TRUNCATE_LENGTH, colors};
use crate::render::{BadgeKind, ServiceCard};
use crate::utils::truncate;

fn badge_spans(card: &ServiceCard) -> Line<'static> {
    let spans: Vec<Span> = card
        .badges
        .iter()
        .flat_map(|badge| {
            let color = match badge.kind {
                BadgeKind::Widget => Color::Blue,
                BadgeKind::Container => Color::Green,
                BadgeKind::Hidden => colors::MUTED,
            };
            [
                Span::styled(format!("[{}]", badge.label), Style::default().fg(color)),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

pub fn draw_main_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let view = app.dashboard.view();

    if let Some(message) = view.empty_message {
        let empty_text = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                message,
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(colors::MUTED)),
                Span::styled("[c]", Style::default().fg(colors::SUCCESS).bold()),
                Span::styled(" to add a category", Style::default().fg(colors::MUTED)),
            ]),
        ];
        let empty = Paragraph::new(empty_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(colors::MUTED))
                    .title("Services")
                    .title_style(Style::default().fg(colors::PRIMARY)),
            )
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let (grab_category, grab_service) = match &app.grab {
        Some(Grab::Category { from, .. }) => (Some(*from), None),
        Some(Grab::Service {
            from_category,
            from,
            ..
        }) => (None, Some((from_category.clone(), *from))),
        None => (None, None),
    };

    let mut rows: Vec<Row> = Vec::new();
    for (position, category) in view.categories.iter().enumerate() {
        let grabbed = grab_category == Some(position);
        let style = if grabbed {
            Style::default().fg(colors::GRABBED).bold()
        } else {
            Style::default().fg(colors::WARNING).bold()
        };
        let marker = if grabbed { "⇅ " } else { "▼ " };
        let hint = match category.empty_hint {
            Some(hint) => Line::styled(
                hint,
                Style::default()
                    .fg(colors::MUTED)
                    .add_modifier(Modifier::ITALIC),
            ),
            None => Line::styled(
                format!("{} services", category.services.len()),
                Style::default().fg(colors::MUTED),
            ),
        };
        rows.push(Row::new(vec![
            Line::styled(format!("{}{}", marker, category.name), style),
            hint,
            Line::from(""),
        ]));

        for (index, card) in category.services.iter().enumerate() {
            let grabbed = grab_service
                .as_ref()
                .is_some_and(|(c, i)| *c == category.name && *i == index);
            let name_style = if grabbed {
                Style::default().fg(colors::GRABBED).bold()
            } else if card.hidden {
                Style::default().fg(colors::MUTED).add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::White)
            };
            let marker = if grabbed { "  ⇅ " } else { "    " };
            rows.push(Row::new(vec![
                Line::styled(format!("{}{} {}", marker, card.initial, card.name), name_style),
                Line::styled(
                    truncate(&card.href, URL_TRUNCATE_LENGTH),
                    Style::default().fg(colors::PRIMARY),
                ),
                badge_spans(card),
            ]));
        }
    }

    // 边框 2 行 + 表头 1 行
    app.last_visible_height = area.height.saturating_sub(3).max(1) as usize;
    app.adjust_scroll_offset();

    let header = Row::new(vec!["Name", "URL", "Badges"]).style(
        Style::default()
            .fg(colors::WARNING)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    );

    let title = if app.grab.is_some() {
        "Services (moving)".to_string()
    } else {
        format!(
            "Services ({} in {} categories)",
            view.total_services(),
            view.categories.len()
        )
    };

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(40),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if app.grab.is_some() {
                colors::GRABBED
            } else {
                colors::PRIMARY
            }))
            .title(title)
            .title_style(Style::default().fg(colors::PRIMARY).bold()),
    )
    .row_highlight_style(
        Style::default()
            .bg(colors::HIGHLIGHT_BG)
            .fg(colors::HIGHLIGHT_FG)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ");

    let mut state = TableState::default()
        .with_offset(app.scroll_offset)
        .with_selected(Some(app.selected_index));
    frame.render_stateful_widget(table, area, &mut state);
}
