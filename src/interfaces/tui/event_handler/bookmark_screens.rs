//! Event handlers for the bookmark manager

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::interfaces::tui::app::{
    App, BookmarkRow, ConfirmAction, ConfirmState, CurrentScreen, PromptAction, PromptState,
};
use crate::interfaces::tui::constants::DEFAULT_BOOKMARK_EXPORT;

/// Handle bookmark list input
pub async fn handle_bookmarks_screen(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.current_screen = CurrentScreen::Main,
        KeyCode::Up | KeyCode::Char('k') => app.bookmark_up(),
        KeyCode::Down | KeyCode::Char('j') => app.bookmark_down(),
        KeyCode::Char('a') => app.open_add_bookmark(),
        KeyCode::Char('g') => {
            app.open_prompt(PromptState::new("New group name", "", PromptAction::AddGroup));
        }
        KeyCode::Char('r') => {
            if let Some(row) = app.selected_bookmark_row() {
                let group = row.group().to_string();
                app.open_prompt(PromptState::new(
                    format!("Rename group '{}'", group),
                    group.clone(),
                    PromptAction::RenameGroup(group),
                ));
            }
        }
        KeyCode::Enter | KeyCode::Char('e') => app.open_edit_bookmark().await,
        KeyCode::Char('d') | KeyCode::Delete => match app.selected_bookmark_row() {
            Some(BookmarkRow::Group { name }) => {
                app.open_confirm(ConfirmState::new(
                    "Delete Group",
                    format!(
                        "Are you sure you want to delete group \"{}\" and all its bookmarks?",
                        name
                    ),
                    ConfirmAction::DeleteGroup(name),
                ));
            }
            Some(BookmarkRow::Bookmark { group, name }) => {
                app.open_confirm(ConfirmState::new(
                    "Delete Bookmark",
                    format!("Are you sure you want to delete \"{}\"?", name),
                    ConfirmAction::DeleteBookmark { group, name },
                ));
            }
            None => {}
        },
        KeyCode::Char('x') => {
            app.open_prompt(PromptState::new(
                "Export bookmarks to",
                DEFAULT_BOOKMARK_EXPORT,
                PromptAction::ExportBookmarks,
            ));
        }
        KeyCode::Char('i') => {
            app.open_prompt(PromptState::new(
                "Import bookmarks.yaml from",
                "",
                PromptAction::ImportBookmarks,
            ));
        }
        KeyCode::Char('?') => {
            app.return_screen = CurrentScreen::Bookmarks;
            app.current_screen = CurrentScreen::Help;
        }
        _ => {}
    }
    Ok(false)
}
