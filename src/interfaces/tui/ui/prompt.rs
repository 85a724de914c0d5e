use ratatui::{Frame, layout::Rect};

use super::widgets::{InputField, Popup};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;

pub fn draw_prompt_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Some(prompt) = &app.prompt else {
        return;
    };
    let inner = Popup::new(&prompt.title, popup::PROMPT)
        .hint("Enter confirm · Esc cancel")
        .render(frame, area);
    InputField::new("Value", &prompt.input)
        .active(true)
        .render(frame, inner);
}
