//! Event handlers for form screens
//!
//! Handles: Login, ServiceForm, BookmarkForm

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::interfaces::tui::app::{App, LoginField};
use crate::interfaces::tui::input_handler::{edit_line, typed_char};

/// Handle login screen input
pub async fn handle_login_screen(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    match key.code {
        KeyCode::Esc => return Ok(true),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.login.focus = app.login.focus.next();
        }
        KeyCode::Enter => {
            if app.login.username.trim().is_empty() {
                app.login.focus = LoginField::Username;
            } else if app.login.password.is_empty() {
                app.login.focus = LoginField::Password;
            } else {
                app.submit_login().await;
            }
        }
        _ => {
            if edit_line(app.login.current_input_mut(), &key) {
                app.login.error = None;
            }
        }
    }
    Ok(false)
}

/// Handle add/edit service form input
pub async fn handle_service_form_screen(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    if key.code == KeyCode::Esc {
        app.cancel_service_form();
        return Ok(false);
    }
    if key.code == KeyCode::Enter {
        app.save_service_form().await;
        return Ok(false);
    }

    if app.dashboard.editor().is_none() {
        app.cancel_service_form();
        return Ok(false);
    }
    let form = &mut app.service_form;
    let Some(editor) = app.dashboard.editor_mut() else {
        return Ok(false);
    };
    let row = form.focused_row(editor);

    match key.code {
        KeyCode::Tab | KeyCode::Down => form.next(editor),
        KeyCode::BackTab | KeyCode::Up => form.prev(editor),
        KeyCode::Left if row.is_some_and(|r| r.is_choice(editor)) => form.cycle(editor, false),
        KeyCode::Right if row.is_some_and(|r| r.is_choice(editor)) => form.cycle(editor, true),
        KeyCode::Char(' ') if row.is_some_and(|r| r.is_toggle(editor)) => form.toggle(editor),
        KeyCode::Backspace => form.pop_char(editor),
        _ => {
            if let Some(c) = typed_char(&key) {
                if row.is_some_and(|r| r.is_choice(editor) || r.is_toggle(editor)) {
                    return Ok(false);
                }
                form.push_char(editor, c);
            }
        }
    }
    Ok(false)
}

/// Handle add/edit bookmark form input
pub async fn handle_bookmark_form_screen(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    match key.code {
        KeyCode::Esc => app.cancel_bookmark_form(),
        KeyCode::Enter => app.save_bookmark_form().await,
        KeyCode::Tab | KeyCode::Down => app.bookmark_form.focus = app.bookmark_form.focus.next(),
        KeyCode::BackTab | KeyCode::Up => {
            app.bookmark_form.focus = app.bookmark_form.focus.prev()
        }
        _ => {
            let focus = app.bookmark_form.focus;
            if let Some(editor) = app.bookmarks.editor_mut()
                && edit_line(focus.input_mut(editor), &key)
            {
                app.bookmark_form.clear_error();
            }
        }
    }
    Ok(false)
}
