use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen, Grab};
use crate::interfaces::tui::constants::colors;
use crate::notify::ToastLevel;

/// Draw title bar with version and statistics
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let config = app.dashboard.configuration();
    let drag = if app.dashboard.reorder().drag_enabled() {
        Span::styled("Drag: on", Style::default().fg(colors::SUCCESS))
    } else {
        Span::styled("Drag: off", Style::default().fg(colors::MUTED))
    };
    let title_text = Line::from(vec![
        Span::styled("Homepage Admin", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors::MUTED),
        ),
        Span::styled("| ", Style::default().fg(colors::MUTED)),
        Span::styled(
            format!(
                "Categories: {}  Services: {}  Bookmarks: {} ",
                config.category_count(),
                config.total_services(),
                app.bookmarks.total_bookmarks()
            ),
            Style::default().fg(colors::WARNING),
        ),
        Span::styled("| ", Style::default().fg(colors::MUTED)),
        drag,
    ]);

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::PRIMARY)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

fn toast_style(level: ToastLevel) -> (&'static str, Style) {
    match level {
        ToastLevel::Info => ("INFO", Style::default().fg(Color::Black).bg(Color::Blue)),
        ToastLevel::Success => ("SUCCESS", Style::default().fg(Color::Black).bg(colors::SUCCESS)),
        ToastLevel::Warning => ("WARNING", Style::default().fg(Color::Black).bg(colors::WARNING)),
        ToastLevel::Error => ("ERROR", Style::default().fg(Color::White).bg(colors::ERROR)),
    }
}

/// Draw status bar: grab state, else the newest unexpired toast
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if let Some(grab) = &app.grab {
        let text = match grab {
            Grab::Category { to, .. } => format!("Moving category to position {}", to + 1),
            Grab::Service { to_category, to, .. } => {
                format!("Moving service to {} #{}", to_category, to + 1)
            }
        };
        (text, Style::default().fg(Color::White).bg(colors::GRABBED).bold())
    } else if let Some(toast) = app.dashboard.notifier().active().last() {
        let (label, style) = toast_style(toast.level);
        (format!("[{}] {}", label, toast.message), style.bold())
    } else {
        ("Ready".to_string(), Style::default().fg(colors::PRIMARY))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.current_screen {
        CurrentScreen::Main if app.grab.is_some() => vec![
            ("Up/Down", "Position", Color::Cyan),
            ("Left/Right", "Category", Color::Cyan),
            ("Enter", "Drop", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
        CurrentScreen::Main => vec![
            ("Up/Down", "Navigate", Color::Cyan),
            ("a", "Add", Color::Green),
            ("c", "Category", Color::Green),
            ("e", "Edit", Color::Yellow),
            ("d", "Delete", Color::Red),
            ("h", "Hide", Color::Yellow),
            ("m", "Move", Color::Magenta),
            ("b", "Bookmarks", Color::Blue),
            ("p", "Preview", Color::Blue),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::Login => vec![
            ("Tab", "Switch Field", Color::Cyan),
            ("Enter", "Login", Color::Green),
            ("Esc", "Quit", Color::Red),
        ],
        CurrentScreen::ServiceForm => vec![
            ("Tab", "Next", Color::Cyan),
            ("Left/Right", "Choose", Color::Cyan),
            ("Space", "Toggle", Color::Cyan),
            ("Enter", "Save", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
        CurrentScreen::BookmarkForm => vec![
            ("Tab", "Switch Field", Color::Cyan),
            ("Enter", "Save", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
        CurrentScreen::Prompt => vec![
            ("Enter", "Confirm", Color::Green),
            ("Ctrl+U", "Clear", Color::Yellow),
            ("Esc", "Cancel", Color::Red),
        ],
        CurrentScreen::Confirm | CurrentScreen::Exiting => {
            vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)]
        }
        CurrentScreen::Bookmarks => vec![
            ("Up/Down", "Navigate", Color::Cyan),
            ("a", "Add", Color::Green),
            ("g", "Group", Color::Green),
            ("e", "Edit", Color::Yellow),
            ("r", "Rename Group", Color::Yellow),
            ("d", "Delete", Color::Red),
            ("x/i", "Export/Import", Color::Magenta),
            ("Esc", "Back", Color::Red),
        ],
        CurrentScreen::Preview => vec![
            ("u", "Set URL", Color::Green),
            ("r", "Refresh", Color::Cyan),
            ("v", "Show/Hide", Color::Cyan),
            ("Ctrl+F", "Fullscreen", Color::Cyan),
            ("c", "Clear", Color::Red),
            ("Esc", "Back", Color::Red),
        ],
        CurrentScreen::Help => vec![("any key", "Close", Color::Red)],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::MUTED)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
