//! Event handlers for miscellaneous screens
//!
//! Handles: Prompt, Confirm, Preview, Help, Exiting

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::interfaces::tui::app::{App, CurrentScreen, PromptAction, PromptState};
use crate::interfaces::tui::input_handler::{edit_line, is_ctrl};

/// Handle single-line prompt input
pub async fn handle_prompt_screen(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    match key.code {
        KeyCode::Esc => app.close_overlay(),
        KeyCode::Enter => app.submit_prompt().await,
        _ => {
            if let Some(prompt) = app.prompt.as_mut() {
                edit_line(&mut prompt.input, &key);
            }
        }
    }
    Ok(false)
}

/// Handle confirmation dialog input
pub async fn handle_confirm_screen(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_action().await,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_overlay(),
        _ => {}
    }
    Ok(false)
}

/// Handle live preview screen input
pub async fn handle_preview_screen(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    if is_ctrl(&key) {
        match key.code {
            KeyCode::Char('r') => app.refresh_and_probe_preview().await,
            KeyCode::Char('f') => {
                app.dashboard.preview_parts().0.toggle_fullscreen();
            }
            _ => {}
        }
        return Ok(false);
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.current_screen = CurrentScreen::Main,
        KeyCode::Char('u') => {
            let current = app.dashboard.preview().url().unwrap_or_default().to_string();
            app.open_prompt(PromptState::new(
                "Homepage URL",
                current,
                PromptAction::SetPreviewUrl,
            ));
        }
        KeyCode::Char('r') => app.refresh_and_probe_preview().await,
        KeyCode::Char('v') => {
            let (preview, notifier) = app.dashboard.preview_parts();
            preview.toggle_visible(chrono::Utc::now(), notifier);
        }
        KeyCode::Char('c') => {
            let (preview, notifier) = app.dashboard.preview_parts();
            preview.clear(notifier);
        }
        _ => {}
    }
    Ok(false)
}

/// Handle help screen input
pub fn handle_help_screen(app: &mut App, _key: KeyEvent) -> std::io::Result<bool> {
    app.current_screen = app.return_screen;
    Ok(false)
}

/// Handle exit confirmation input
pub fn handle_exiting_screen(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Ok(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
            Ok(false)
        }
        _ => Ok(false),
    }
}
