// UI submodules
mod bookmark_form;
mod bookmarks;
mod common;
mod confirm;
mod detail_panel;
mod exiting;
mod help;
mod login;
mod main_screen;
mod preview;
mod prompt;
mod service_form;
pub mod widgets;

// Re-export common utilities
pub use common::{draw_footer, draw_status_bar, draw_title_bar};

// Re-export screen drawing functions
pub use bookmark_form::draw_bookmark_form_screen;
pub use bookmarks::draw_bookmarks_screen;
pub use confirm::draw_confirm_screen;
pub use detail_panel::draw_detail_panel;
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use login::draw_login_screen;
pub use main_screen::draw_main_screen;
pub use preview::draw_preview_screen;
pub use prompt::draw_prompt_screen;
pub use service_form::draw_service_form_screen;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);

    // Overlays draw on top of the screen they were opened from
    let base = match app.current_screen {
        CurrentScreen::Prompt | CurrentScreen::Confirm | CurrentScreen::Help => app.return_screen,
        CurrentScreen::ServiceForm | CurrentScreen::Exiting => CurrentScreen::Main,
        CurrentScreen::BookmarkForm => CurrentScreen::Bookmarks,
        other => other,
    };
    draw_base(frame, app, base, main_chunks[1]);

    match app.current_screen {
        CurrentScreen::ServiceForm => draw_service_form_screen(frame, app, main_chunks[1]),
        CurrentScreen::BookmarkForm => draw_bookmark_form_screen(frame, app, main_chunks[1]),
        CurrentScreen::Prompt => draw_prompt_screen(frame, app, main_chunks[1]),
        CurrentScreen::Confirm => draw_confirm_screen(frame, app, main_chunks[1]),
        CurrentScreen::Help => draw_help_screen(frame, main_chunks[1]),
        CurrentScreen::Exiting => draw_exiting_screen(frame, main_chunks[1]),
        _ => {}
    }

    draw_status_bar(frame, app, main_chunks[2]);
    draw_footer(frame, app, main_chunks[3]);
}

fn draw_base(frame: &mut Frame, app: &mut App, screen: CurrentScreen, area: Rect) {
    match screen {
        CurrentScreen::Login => draw_login_screen(frame, app, area),
        CurrentScreen::Bookmarks => draw_bookmarks_screen(frame, app, area),
        CurrentScreen::Preview => draw_preview_screen(frame, app, area),
        _ => {
            let preview = app.dashboard.preview();
            if preview.is_fullscreen() && preview.is_visible() {
                draw_preview_screen(frame, app, area);
                return;
            }
            // Dual-panel layout for main screen
            let content_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(area);

            draw_main_screen(frame, app, content_chunks[0]);
            draw_detail_panel(frame, app, content_chunks[1]);
        }
    }
}
