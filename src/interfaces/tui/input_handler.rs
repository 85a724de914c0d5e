//! Input handling utilities
//!
//! Provides unified single-line editing for text fields across different screens

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Whether `key` carries Ctrl
pub fn is_ctrl(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Printable character typed without Ctrl/Alt
pub fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

/// Apply an editing key to `buffer`. Returns whether the key was consumed.
///
/// Ctrl+U clears the whole line.
pub fn edit_line(buffer: &mut String, key: &KeyEvent) -> bool {
    if let Some(c) = typed_char(key) {
        buffer.push(c);
        return true;
    }
    match key.code {
        KeyCode::Backspace => {
            buffer.pop();
            true
        }
        KeyCode::Char('u') if is_ctrl(key) => {
            buffer.clear();
            true
        }
        _ => false,
    }
}
