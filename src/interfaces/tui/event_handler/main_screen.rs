//! Event handlers for the category/service tree

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::interfaces::tui::app::{
    App, ConfirmAction, ConfirmState, CurrentScreen, PromptAction, PromptState, TreeRow,
};
use crate::interfaces::tui::constants::DEFAULT_CONFIG_EXPORT;
use crate::interfaces::tui::input_handler::is_ctrl;

/// Handle main screen input
pub async fn handle_main_screen(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    if app.grab.is_some() {
        handle_grab(app, key).await;
        return Ok(false);
    }

    if is_ctrl(&key) {
        match key.code {
            KeyCode::Char('r') => {
                app.reload_all().await;
                app.refresh_and_probe_preview().await;
            }
            KeyCode::Char('f') => {
                app.dashboard.preview_parts().0.toggle_fullscreen();
            }
            _ => {}
        }
        return Ok(false);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Char('?') => {
            app.return_screen = CurrentScreen::Main;
            app.current_screen = CurrentScreen::Help;
        }
        KeyCode::Enter | KeyCode::Char('e') => match app.selected_row() {
            Some(TreeRow::Service { .. }) => app.open_edit_service().await,
            Some(TreeRow::Category { name, .. }) => {
                app.open_prompt(PromptState::new(
                    format!("Rename category '{}'", name),
                    name.clone(),
                    PromptAction::RenameCategory(name),
                ));
            }
            None => {}
        },
        KeyCode::Char('a') => app.open_add_service(),
        KeyCode::Char('c') => {
            app.open_prompt(PromptState::new(
                "New category name",
                "",
                PromptAction::AddCategory,
            ));
        }
        KeyCode::Char('r') => {
            if let Some(row) = app.selected_row() {
                let name = row.category().to_string();
                app.open_prompt(PromptState::new(
                    format!("Rename category '{}'", name),
                    name.clone(),
                    PromptAction::RenameCategory(name),
                ));
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => match app.selected_row() {
            Some(TreeRow::Category { name, .. }) => {
                app.open_confirm(ConfirmState::new(
                    "Delete Category",
                    format!(
                        "Are you sure you want to delete category \"{}\" and all its services?",
                        name
                    ),
                    ConfirmAction::DeleteCategory(name),
                ));
            }
            Some(TreeRow::Service { category, name, .. }) => {
                app.open_confirm(ConfirmState::new(
                    "Delete Service",
                    format!("Are you sure you want to delete \"{}\"?", name),
                    ConfirmAction::DeleteService { category, name },
                ));
            }
            None => {}
        },
        KeyCode::Char('h') => app.toggle_selected_hidden().await,
        KeyCode::Char('m') => app.begin_grab(),
        KeyCode::Char('D') => {
            let enabled = app.dashboard.toggle_drag_mode();
            let notifier = app.dashboard.notifier_mut();
            if enabled {
                notifier.info("Drag mode enabled");
            } else {
                notifier.info("Drag mode disabled");
            }
        }
        KeyCode::Char('b') => app.open_bookmarks().await,
        KeyCode::Char('p') => app.current_screen = CurrentScreen::Preview,
        KeyCode::Char('v') => {
            let (preview, notifier) = app.dashboard.preview_parts();
            preview.toggle_visible(chrono::Utc::now(), notifier);
        }
        KeyCode::Char('i') => {
            app.open_prompt(PromptState::new(
                "Import services.yaml from",
                "",
                PromptAction::ImportConfig,
            ));
        }
        KeyCode::Char('x') => {
            app.open_prompt(PromptState::new(
                "Export configuration to",
                DEFAULT_CONFIG_EXPORT,
                PromptAction::ExportConfig,
            ));
        }
        KeyCode::Char('B') => {
            app.dashboard.backup_configuration().await;
        }
        KeyCode::Char('y') => app.copy_selected_href(),
        KeyCode::Char('L') => {
            app.open_confirm(ConfirmState::new(
                "Logout",
                "Log out and forget the stored session?",
                ConfirmAction::Logout,
            ));
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Exiting;
        }
        _ => {}
    }
    Ok(false)
}

/// Keys while an item is picked up
async fn handle_grab(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_grab_target(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_grab_target(1),
        KeyCode::Left | KeyCode::Char('h') => app.move_grab_category(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_grab_category(1),
        KeyCode::Enter | KeyCode::Char('m') => app.drop_grab().await,
        KeyCode::Esc => app.cancel_grab(),
        _ => {}
    }
}
