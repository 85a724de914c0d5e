//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! This module is organized by screen type:
//! - main_screen: Main (tree navigation, drag mode)
//! - form_screens: Login, ServiceForm, BookmarkForm
//! - bookmark_screens: Bookmarks
//! - misc_screens: Prompt, Confirm, Preview, Help, Exiting

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::input_handler::is_ctrl;

mod bookmark_screens;
mod form_screens;
mod main_screen;
mod misc_screens;

use bookmark_screens::*;
use form_screens::*;
use main_screen::*;
use misc_screens::*;

/// Handle keyboard input based on current screen
pub async fn handle_key_event(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    // Ctrl+C 在任何界面都直接退出
    if is_ctrl(&key) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match app.current_screen {
        CurrentScreen::Login => handle_login_screen(app, key).await,
        CurrentScreen::Main => handle_main_screen(app, key).await,
        CurrentScreen::ServiceForm => handle_service_form_screen(app, key).await,
        CurrentScreen::Prompt => handle_prompt_screen(app, key).await,
        CurrentScreen::Confirm => handle_confirm_screen(app, key).await,
        CurrentScreen::Bookmarks => handle_bookmarks_screen(app, key).await,
        CurrentScreen::BookmarkForm => handle_bookmark_form_screen(app, key).await,
        CurrentScreen::Preview => handle_preview_screen(app, key).await,
        CurrentScreen::Help => handle_help_screen(app, key),
        CurrentScreen::Exiting => handle_exiting_screen(app, key),
    }
}
