//! Navigation and selection logic

use super::state::{App, Grab, TreeRow};
use crate::interfaces::tui::constants::PAGE_SCROLL_STEP;

impl App {
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
        self.adjust_scroll_offset();
    }

    pub fn move_selection_down(&mut self) {
        let len = self.rows().len();
        if self.selected_index < len.saturating_sub(1) {
            self.selected_index += 1;
        }
        self.adjust_scroll_offset();
    }

    pub fn jump_to_top(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        let len = self.rows().len();
        if len > 0 {
            self.selected_index = len - 1;
        }
        self.adjust_scroll_offset();
    }

    pub fn page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(PAGE_SCROLL_STEP);
        self.adjust_scroll_offset();
    }

    pub fn page_down(&mut self) {
        let max_index = self.rows().len().saturating_sub(1);
        self.selected_index = (self.selected_index + PAGE_SCROLL_STEP).min(max_index);
        self.adjust_scroll_offset();
    }

    /// 调整 scroll_offset 确保 selected_index 在可见窗口内
    pub fn adjust_scroll_offset(&mut self) {
        let vh = self.last_visible_height.max(1);
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        }
        if self.selected_index >= self.scroll_offset + vh {
            self.scroll_offset = self.selected_index + 1 - vh;
        }
    }

    /// Keep the cursor on a valid row after the tree changed
    pub fn clamp_selection(&mut self) {
        let len = self.rows().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
        self.adjust_scroll_offset();
    }

    /// Put the cursor on a given category or service, if it still exists
    pub fn select_row(&mut self, category: &str, service: Option<&str>) {
        let found = self.rows().iter().position(|row| match (row, service) {
            (TreeRow::Category { name, .. }, None) => name == category,
            (TreeRow::Service { category: c, name, .. }, Some(s)) => c == category && name == s,
            _ => false,
        });
        if let Some(index) = found {
            self.selected_index = index;
        }
        self.clamp_selection();
    }

    pub fn bookmark_up(&mut self) {
        self.bookmark_index = self.bookmark_index.saturating_sub(1);
    }

    pub fn bookmark_down(&mut self) {
        let len = self.bookmark_rows().len();
        if self.bookmark_index < len.saturating_sub(1) {
            self.bookmark_index += 1;
        }
    }

    pub fn clamp_bookmark_selection(&mut self) {
        let len = self.bookmark_rows().len();
        if self.bookmark_index >= len {
            self.bookmark_index = len.saturating_sub(1);
        }
    }

    /// Move the drop target of the grabbed item up (`-1`) or down (`+1`)
    pub fn move_grab_target(&mut self, delta: isize) {
        let Some(grab) = self.grab.as_mut() else {
            return;
        };
        let layout = self.dashboard.reorder().layout();
        match grab {
            Grab::Category { to, .. } => {
                let max = layout.categories().len().saturating_sub(1);
                *to = to.saturating_add_signed(delta).min(max);
            }
            Grab::Service {
                from_category,
                to_category,
                to,
                ..
            } => {
                let len = layout.services_of(to_category).len();
                // 跨分类时可以放到末尾之后
                let max = if from_category == to_category {
                    len.saturating_sub(1)
                } else {
                    len
                };
                *to = to.saturating_add_signed(delta).min(max);
            }
        }
    }

    /// Move a grabbed service to the previous (`-1`) or next (`+1`) category
    pub fn move_grab_category(&mut self, delta: isize) {
        let Some(Grab::Service {
            from_category,
            to_category,
            to,
            ..
        }) = self.grab.as_mut()
        else {
            return;
        };
        let layout = self.dashboard.reorder().layout();
        let categories = layout.categories();
        let Some(current) = categories.iter().position(|c| c == to_category) else {
            return;
        };
        let next = current.saturating_add_signed(delta).min(categories.len().saturating_sub(1));
        if next == current {
            return;
        }
        *to_category = categories[next].clone();
        let len = layout.services_of(to_category).len();
        let max = if from_category == to_category {
            len.saturating_sub(1)
        } else {
            len
        };
        *to = (*to).min(max);
    }
}
