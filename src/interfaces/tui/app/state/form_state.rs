//! 表单状态管理
//!
//! 登录、服务编辑、书签编辑以及单行输入/确认弹窗的状态

use crate::bookmarks::BookmarkEditor;
use crate::editor::{FieldKind, FieldValue, ServiceEditor};
use crate::models::WidgetKind;

/// Display modes offered for customapi services; empty means the backend default
pub const DISPLAY_MODES: &[&str] = &["", "list", "block", "dynamic-list"];

/// 登录表单当前字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

impl LoginField {
    pub fn next(&self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Username,
        }
    }
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn current_input_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }
}

/// One row of the service form. Rows come and go with the editor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Name,
    Category,
    Icon,
    Href,
    Display,
    ShowStats,
    HealthCheck,
    Ping,
    Server,
    Container,
    WidgetType,
    /// Index into the widget's field set
    WidgetField(usize),
}

impl FormRow {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Service Name",
            Self::Category => "Category",
            Self::Icon => "Icon",
            Self::Href => "Service URL",
            Self::Display => "Display Mode",
            Self::ShowStats => "Show Stats",
            Self::HealthCheck => "Health Check",
            Self::Ping => "Ping URL",
            Self::Server => "Docker Server",
            Self::Container => "Container",
            Self::WidgetType => "Widget Type",
            Self::WidgetField(_) => "",
        }
    }

    /// Rows cycled with ←/→ instead of typed into
    pub fn is_choice(&self, editor: &ServiceEditor) -> bool {
        match self {
            Self::Category | Self::Display | Self::WidgetType => true,
            Self::WidgetField(i) => editor
                .widget()
                .and_then(|w| w.fields().get(*i))
                .is_some_and(|f| matches!(f.descriptor.kind, FieldKind::Select(_))),
            _ => false,
        }
    }

    /// Rows flipped with Space
    pub fn is_toggle(&self, editor: &ServiceEditor) -> bool {
        match self {
            Self::ShowStats | Self::HealthCheck => true,
            Self::WidgetField(i) => editor
                .widget()
                .and_then(|w| w.fields().get(*i))
                .is_some_and(|f| f.descriptor.kind == FieldKind::Checkbox),
            _ => false,
        }
    }
}

/// 服务表单状态，实际字段值保存在 [`ServiceEditor`] 中
#[derive(Debug, Default)]
pub struct ServiceFormState {
    pub focus: usize,
    pub error: Option<String>,
    /// Raw `field=label, ...` text of the customapi mappings row
    pub mappings_input: String,
}

impl ServiceFormState {
    /// Reset for a freshly opened editor
    pub fn open(editor: &ServiceEditor) -> Self {
        let mappings_input = editor
            .widget()
            .and_then(|w| {
                w.fields()
                    .iter()
                    .find(|f| matches!(f.value, FieldValue::Mappings(_)))
                    .map(|f| f.display_value())
            })
            .unwrap_or_default();
        Self {
            focus: 0,
            error: None,
            mappings_input,
        }
    }

    pub fn rows(editor: &ServiceEditor) -> Vec<FormRow> {
        let mut rows = vec![FormRow::Name, FormRow::Category, FormRow::Icon, FormRow::Href];
        if editor.display_mode_visible() {
            rows.push(FormRow::Display);
        }
        rows.push(FormRow::ShowStats);
        rows.push(FormRow::HealthCheck);
        if editor.health_check_enabled() {
            rows.extend([FormRow::Ping, FormRow::Server, FormRow::Container]);
        }
        rows.push(FormRow::WidgetType);
        if let Some(widget) = editor.widget() {
            rows.extend((0..widget.fields().len()).map(FormRow::WidgetField));
        }
        rows
    }

    pub fn focused_row(&self, editor: &ServiceEditor) -> Option<FormRow> {
        let rows = Self::rows(editor);
        rows.get(self.focus.min(rows.len().saturating_sub(1))).copied()
    }

    pub fn next(&mut self, editor: &ServiceEditor) {
        let len = Self::rows(editor).len().max(1);
        self.focus = (self.focus + 1) % len;
    }

    pub fn prev(&mut self, editor: &ServiceEditor) {
        let len = Self::rows(editor).len().max(1);
        self.focus = (self.focus + len - 1) % len;
    }

    /// Keep focus inside the row list after rows disappeared
    pub fn clamp(&mut self, editor: &ServiceEditor) {
        let len = Self::rows(editor).len();
        if self.focus >= len {
            self.focus = len.saturating_sub(1);
        }
    }

    /// Text typed into the focused row
    pub fn push_char(&mut self, editor: &mut ServiceEditor, c: char) {
        self.edit_text(editor, |s| s.push(c));
    }

    pub fn pop_char(&mut self, editor: &mut ServiceEditor) {
        self.edit_text(editor, |s| {
            s.pop();
        });
    }

    fn edit_text<F: FnOnce(&mut String)>(&mut self, editor: &mut ServiceEditor, f: F) {
        let Some(row) = self.focused_row(editor) else {
            return;
        };
        match row {
            FormRow::Name => f(&mut editor.name),
            FormRow::Icon => f(&mut editor.icon),
            FormRow::Href => f(&mut editor.href),
            FormRow::Ping => f(&mut editor.ping),
            FormRow::Server => f(&mut editor.server),
            FormRow::Container => f(&mut editor.container),
            FormRow::WidgetField(i) => {
                let Some(widget) = editor.widget_mut() else {
                    return;
                };
                let Some((key, kind, mut text)) = widget
                    .fields()
                    .get(i)
                    .map(|h| (h.key(), h.descriptor.kind, h.text().to_string()))
                else {
                    return;
                };
                match kind {
                    FieldKind::Mappings => {
                        f(&mut self.mappings_input);
                        // 输入未完成时保留缓冲区，保存时再报告
                        let _ = widget.set_text(key, self.mappings_input.clone());
                    }
                    FieldKind::Checkbox | FieldKind::Select(_) => {}
                    _ => {
                        f(&mut text);
                        let _ = widget.set_text(key, text);
                    }
                }
            }
            _ => {}
        }
        self.error = None;
    }

    /// Space on a checkbox row
    pub fn toggle(&mut self, editor: &mut ServiceEditor) {
        match self.focused_row(editor) {
            Some(FormRow::ShowStats) => editor.show_stats = !editor.show_stats,
            Some(FormRow::HealthCheck) => {
                let enabled = editor.health_check_enabled();
                editor.set_health_check(!enabled);
            }
            Some(FormRow::WidgetField(i)) => {
                if let Some(widget) = editor.widget_mut()
                    && let Some(key) = widget.fields().get(i).map(|f| f.key())
                {
                    widget.toggle(key);
                }
            }
            _ => {}
        }
        self.clamp(editor);
    }

    /// ←/→ on a choice row
    pub fn cycle(&mut self, editor: &mut ServiceEditor, forward: bool) {
        match self.focused_row(editor) {
            Some(FormRow::Category) => {
                let categories = editor.categories().to_vec();
                editor.category = cycle_value(&categories, &editor.category, forward);
            }
            Some(FormRow::Display) => {
                let modes: Vec<String> = DISPLAY_MODES.iter().map(|m| m.to_string()).collect();
                editor.display = cycle_value(&modes, &editor.display, forward);
            }
            Some(FormRow::WidgetType) => {
                // None 在列表首位
                let mut kinds: Vec<Option<WidgetKind>> = vec![None];
                kinds.extend(WidgetKind::all().into_iter().map(Some));
                let current = kinds
                    .iter()
                    .position(|k| *k == editor.widget_kind())
                    .unwrap_or(0);
                let next = step(current, kinds.len(), forward);
                editor.set_widget_kind(kinds[next]);
                self.mappings_input.clear();
            }
            Some(FormRow::WidgetField(i)) => {
                if let Some(widget) = editor.widget_mut()
                    && let Some(key) = widget.fields().get(i).map(|f| f.key())
                {
                    widget.cycle_option(key);
                }
            }
            _ => {}
        }
        self.clamp(editor);
    }
}

fn step(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

fn cycle_value(options: &[String], current: &str, forward: bool) -> String {
    if options.is_empty() {
        return current.to_string();
    }
    let next = match options.iter().position(|o| o == current) {
        Some(i) => step(i, options.len(), forward),
        None => 0,
    };
    options[next].clone()
}

/// 书签表单当前字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookmarkField {
    #[default]
    Name,
    Href,
    Icon,
    Description,
}

impl BookmarkField {
    const ALL: [Self; 4] = [Self::Name, Self::Href, Self::Icon, Self::Description];

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Href => "URL",
            Self::Icon => "Icon",
            Self::Description => "Description",
        }
    }

    pub fn input_mut<'a>(&self, editor: &'a mut BookmarkEditor) -> &'a mut String {
        match self {
            Self::Name => &mut editor.name,
            Self::Href => &mut editor.href,
            Self::Icon => &mut editor.icon,
            Self::Description => &mut editor.description,
        }
    }
}

#[derive(Debug, Default)]
pub struct BookmarkFormState {
    pub focus: BookmarkField,
    pub error: Option<String>,
    /// 校验失败时错误显示在该字段下方，否则显示在表单底部
    pub error_field: Option<BookmarkField>,
}

impl BookmarkFormState {
    /// Record a validation failure against the field that caused it
    pub fn reject(&mut self, editor: &BookmarkEditor, message: String) {
        let field = if editor.name.trim().is_empty() {
            BookmarkField::Name
        } else {
            BookmarkField::Href
        };
        self.focus = field;
        self.error_field = Some(field);
        self.error = Some(message);
    }

    pub fn fail(&mut self, message: String) {
        self.error_field = None;
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
        self.error_field = None;
    }

    pub fn field_error(&self, field: BookmarkField) -> Option<&str> {
        match self.error_field {
            Some(f) if f == field => self.error.as_deref(),
            _ => None,
        }
    }

    /// Error not tied to a single field
    pub fn form_error(&self) -> Option<&str> {
        match self.error_field {
            None => self.error.as_deref(),
            Some(_) => None,
        }
    }
}

/// What a submitted prompt does with its input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    AddCategory,
    RenameCategory(String),
    SetPreviewUrl,
    ImportConfig,
    ExportConfig,
    AddGroup,
    RenameGroup(String),
    ImportBookmarks,
    ExportBookmarks,
}

#[derive(Debug, Clone)]
pub struct PromptState {
    pub title: String,
    pub input: String,
    pub action: PromptAction,
}

impl PromptState {
    pub fn new(title: impl Into<String>, input: impl Into<String>, action: PromptAction) -> Self {
        Self {
            title: title.into(),
            input: input.into(),
            action,
        }
    }
}

/// What a confirmed dialog does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteCategory(String),
    DeleteService { category: String, name: String },
    DeleteGroup(String),
    DeleteBookmark { group: String, name: String },
    ImportConfig(String),
    Logout,
}

#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub title: String,
    pub message: String,
    pub action: ConfirmAction,
}

impl ConfirmState {
    pub fn new(title: impl Into<String>, message: impl Into<String>, action: ConfirmAction) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> ServiceEditor {
        ServiceEditor::add("Media", vec!["Media".into(), "Tools".into()])
    }

    #[test]
    fn test_bookmark_validation_error_sits_under_its_field() {
        let mut bookmark = BookmarkEditor::add("Dev");
        let mut form = BookmarkFormState {
            focus: BookmarkField::Description,
            ..Default::default()
        };
        form.reject(&bookmark, "Bookmark name is required".into());
        assert_eq!(form.focus, BookmarkField::Name);
        assert_eq!(form.field_error(BookmarkField::Name), Some("Bookmark name is required"));
        assert_eq!(form.field_error(BookmarkField::Href), None);
        assert_eq!(form.form_error(), None);

        bookmark.name = "GitHub".into();
        form.reject(&bookmark, "Bookmark URL is required".into());
        assert_eq!(form.field_error(BookmarkField::Href), Some("Bookmark URL is required"));

        form.fail("Group not found".into());
        assert_eq!(form.field_error(BookmarkField::Href), None);
        assert_eq!(form.form_error(), Some("Group not found"));

        form.clear_error();
        assert_eq!(form.form_error(), None);
    }

    #[test]
    fn test_rows_follow_editor_state() {
        let mut ed = editor();
        let rows = ServiceFormState::rows(&ed);
        assert!(!rows.contains(&FormRow::Display));
        assert!(!rows.contains(&FormRow::Ping));

        ed.set_health_check(true);
        ed.set_widget_kind(Some(WidgetKind::CustomApi));
        let rows = ServiceFormState::rows(&ed);
        assert!(rows.contains(&FormRow::Display));
        assert!(rows.contains(&FormRow::Ping));
        assert!(rows.contains(&FormRow::WidgetField(0)));
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut ed = editor();
        let mut form = ServiceFormState::open(&ed);
        for c in "Emby".chars() {
            form.push_char(&mut ed, c);
        }
        form.pop_char(&mut ed);
        assert_eq!(ed.name, "Emb");
    }

    #[test]
    fn test_cycle_category_and_widget_type() {
        let mut ed = editor();
        let mut form = ServiceFormState::open(&ed);
        form.focus = 1;
        form.cycle(&mut ed, true);
        assert_eq!(ed.category, "Tools");
        form.cycle(&mut ed, true);
        assert_eq!(ed.category, "Media");

        let widget_row = ServiceFormState::rows(&ed)
            .iter()
            .position(|r| *r == FormRow::WidgetType)
            .unwrap();
        form.focus = widget_row;
        form.cycle(&mut ed, true);
        assert_eq!(ed.widget_kind(), Some(WidgetKind::Emby));
        form.cycle(&mut ed, false);
        assert_eq!(ed.widget_kind(), None);
    }

    #[test]
    fn test_health_check_toggle_clamps_focus() {
        let mut ed = editor();
        let mut form = ServiceFormState::open(&ed);
        form.focus = ServiceFormState::rows(&ed)
            .iter()
            .position(|r| *r == FormRow::HealthCheck)
            .unwrap();
        form.toggle(&mut ed);
        assert!(ed.health_check_enabled());
        form.toggle(&mut ed);
        assert!(!ed.health_check_enabled());
        assert!(form.focus < ServiceFormState::rows(&ed).len());
    }

    #[test]
    fn test_mappings_buffer_keeps_partial_input() {
        let mut ed = editor();
        ed.set_widget_kind(Some(WidgetKind::CustomApi));
        let mut form = ServiceFormState::open(&ed);
        let rows = ServiceFormState::rows(&ed);
        let idx = ed
            .widget()
            .unwrap()
            .fields()
            .iter()
            .position(|f| f.key() == "mappings")
            .unwrap();
        form.focus = rows.iter().position(|r| *r == FormRow::WidgetField(idx)).unwrap();
        for c in "cpu=CPU, mem".chars() {
            form.push_char(&mut ed, c);
        }
        assert_eq!(form.mappings_input, "cpu=CPU, mem");
        assert_eq!(ed.widget().unwrap().mappings().len(), 1);
        for c in "=Memory".chars() {
            form.push_char(&mut ed, c);
        }
        assert_eq!(ed.widget().unwrap().mappings().len(), 2);
    }

    #[test]
    fn test_bookmark_field_cycle() {
        assert_eq!(BookmarkField::Name.next(), BookmarkField::Href);
        assert_eq!(BookmarkField::Description.next(), BookmarkField::Name);
        assert_eq!(BookmarkField::Name.prev(), BookmarkField::Description);
    }
}
