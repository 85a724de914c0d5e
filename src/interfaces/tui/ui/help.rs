use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::{colors, popup};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "NAVIGATION",
        &[
            ("Up/Down, j/k", "Move selection"),
            ("Home/End, g/G", "Jump to top / bottom"),
            ("PageUp/PageDown", "Scroll 10 rows"),
        ],
    ),
    (
        "SERVICES & CATEGORIES",
        &[
            ("a", "Add service to the selected category"),
            ("Enter, e", "Edit service / rename category"),
            ("c", "Add category"),
            ("r", "Rename category"),
            ("d, Delete", "Delete selected item"),
            ("h", "Hide / show service"),
            ("y", "Copy service URL"),
        ],
    ),
    (
        "REORDER",
        &[
            ("D", "Toggle drag mode"),
            ("m", "Pick up selected item"),
            ("Up/Down", "Choose drop position"),
            ("Left/Right", "Move service to another category"),
            ("Enter / Esc", "Drop / cancel"),
        ],
    ),
    (
        "CONFIGURATION",
        &[
            ("i", "Import services.yaml"),
            ("x", "Export services.yaml"),
            ("B", "Create backup on the server"),
            ("Ctrl+R", "Reload and refresh preview"),
        ],
    ),
    (
        "PREVIEW & BOOKMARKS",
        &[
            ("p", "Open live preview"),
            ("v", "Show / hide preview pane"),
            ("Ctrl+F", "Toggle fullscreen preview"),
            ("b", "Open bookmarks"),
        ],
    ),
    (
        "SESSION",
        &[("L", "Log out"), ("q, Esc", "Quit"), ("Ctrl+C", "Quit immediately")],
    ),
];

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner = Popup::new("Help - Keyboard Shortcuts", popup::HELP)
        .hint("any key to close")
        .render(frame, area);

    let mut lines = Vec::new();
    for (title, keys) in SECTIONS {
        lines.push(Line::from(Span::styled(
            *title,
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, description) in *keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<18}", key), Style::default().fg(colors::PRIMARY)),
                Span::styled(*description, Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
