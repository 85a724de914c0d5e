//! Dashboard, bookmark and session operations bound to TUI keys

use std::path::PathBuf;

use tracing::{debug, info};

use super::state::{
    App, BookmarkFormState, BookmarkRow, ConfirmAction, CurrentScreen, Grab, PromptAction,
    ServiceFormState, TreeRow,
};
use crate::errors::AdminError;

impl App {
    /// Verify the stored session, then load everything or ask for a login
    pub async fn bootstrap(&mut self) {
        match self.dashboard.client().auth().verify().await {
            Ok(user) => {
                info!("Session valid for {}", user.username);
                self.session.take_login_request();
                self.reload_all().await;
                self.current_screen = CurrentScreen::Main;
            }
            Err(e) => {
                debug!("Startup verification failed: {}", e);
                self.session.take_login_request();
                self.require_login(None);
            }
        }
    }

    pub async fn reload_all(&mut self) {
        self.dashboard.load_configuration().await;
        self.bookmarks.load(self.dashboard.notifier_mut()).await;
        self.clamp_selection();
        self.clamp_bookmark_selection();
    }

    pub async fn submit_login(&mut self) {
        let username = self.login.username.clone();
        let password = self.login.password.clone();
        match self.dashboard.client().auth().login(&username, &password).await {
            Ok(user) => {
                self.session.take_login_request();
                self.login = Default::default();
                self.dashboard
                    .notifier_mut()
                    .success(format!("Logged in as {}", user.username));
                self.current_screen = CurrentScreen::Main;
                self.reload_all().await;
            }
            Err(e) => {
                // 登录接口的 401 表示凭据错误，而不是会话过期
                self.session.take_login_request();
                self.login.password.clear();
                self.login.error = Some(match &e {
                    AdminError::Unauthorized(_) => "Invalid username or password".to_string(),
                    other => other.user_message("Login failed"),
                });
            }
        }
    }

    pub async fn logout(&mut self) {
        self.dashboard.client().auth().logout().await;
        self.session.take_login_request();
        self.require_login(Some("Logged out"));
    }

    // ---- services ----

    pub fn open_add_service(&mut self) {
        let category = match self.selected_row() {
            Some(row) => row.category().to_string(),
            None => match self.dashboard.configuration().category_names().first() {
                Some(first) => first.clone(),
                None => {
                    self.dashboard
                        .notifier_mut()
                        .warning("Add a category before adding services");
                    return;
                }
            },
        };
        let editor = self.dashboard.begin_add_service(&category);
        self.service_form = ServiceFormState::open(editor);
        self.current_screen = CurrentScreen::ServiceForm;
    }

    pub async fn open_edit_service(&mut self) {
        let Some(TreeRow::Service { category, name, .. }) = self.selected_row() else {
            return;
        };
        if self.dashboard.begin_edit_service(&category, &name).await
            && let Some(editor) = self.dashboard.editor()
        {
            self.service_form = ServiceFormState::open(editor);
            self.current_screen = CurrentScreen::ServiceForm;
        }
    }

    pub async fn save_service_form(&mut self) {
        // 映射缓冲区在保存前必须能解析
        let mappings = self.service_form.mappings_input.clone();
        if let Some(widget) = self.dashboard.editor_mut().and_then(|e| e.widget_mut())
            && let Some(key) = widget
                .fields()
                .iter()
                .find(|f| f.descriptor.kind == crate::editor::FieldKind::Mappings)
                .map(|f| f.key())
            && let Err(e) = widget.set_text(key, mappings)
        {
            self.service_form.error = Some(e.message());
            return;
        }

        let target = self
            .dashboard
            .editor()
            .map(|e| (e.category.trim().to_string(), e.name.trim().to_string()));
        match self.dashboard.save_service().await {
            Ok(()) => {
                self.service_form = ServiceFormState::default();
                self.current_screen = CurrentScreen::Main;
                if let Some((category, name)) = target {
                    self.select_row(&category, Some(&name));
                }
            }
            Err(AdminError::Validation(msg)) => self.service_form.error = Some(msg),
            // 请求失败时表单保持打开，便于修改后重试
            Err(e) => self.service_form.error = Some(e.user_message("Failed to save service")),
        }
    }

    pub fn cancel_service_form(&mut self) {
        self.dashboard.cancel_edit();
        self.service_form = ServiceFormState::default();
        self.current_screen = CurrentScreen::Main;
    }

    pub async fn toggle_selected_hidden(&mut self) {
        if let Some(TreeRow::Service { category, name, .. }) = self.selected_row() {
            self.dashboard.toggle_service_visibility(&category, &name).await;
            self.select_row(&category, Some(&name));
        }
    }

    /// `y`: copy the selected service URL
    pub fn copy_selected_href(&mut self) {
        let Some(TreeRow::Service { category, name, .. }) = self.selected_row() else {
            return;
        };
        let href = self
            .dashboard
            .configuration()
            .find_service(&category, &name)
            .and_then(|s| s.config.href.clone());
        let notifier = self.dashboard.notifier_mut();
        match href {
            Some(href) if !href.is_empty() => {
                if let Ok(mut clipboard) = arboard::Clipboard::new()
                    && clipboard.set_text(&href).is_ok()
                {
                    notifier.info(format!("Copied: {}", href));
                } else {
                    notifier.warning("Clipboard unavailable");
                }
            }
            _ => notifier.warning("Service has no URL"),
        }
    }

    // ---- drag and drop ----

    /// `m`: pick up the selected row
    pub fn begin_grab(&mut self) {
        if !self.dashboard.reorder().drag_enabled() {
            self.dashboard
                .notifier_mut()
                .warning("Drag mode is off (press D)");
            return;
        }
        self.grab = match self.selected_row() {
            Some(TreeRow::Category { position, .. }) => Some(Grab::Category {
                from: position,
                to: position,
            }),
            Some(TreeRow::Service {
                category, position, ..
            }) => Some(Grab::Service {
                from_category: category.clone(),
                from: position,
                to_category: category,
                to: position,
            }),
            None => None,
        };
    }

    pub fn cancel_grab(&mut self) {
        self.grab = None;
    }

    /// Enter while grabbing: persist the drop and follow the moved item
    pub async fn drop_grab(&mut self) {
        let Some(grab) = self.grab.take() else {
            return;
        };
        let follow = match &grab {
            Grab::Category { from, .. } => self
                .dashboard
                .reorder()
                .layout()
                .categories()
                .get(*from)
                .map(|c| (c.clone(), None)),
            Grab::Service {
                from_category,
                from,
                to_category,
                ..
            } => self
                .dashboard
                .reorder()
                .layout()
                .services_of(from_category)
                .get(*from)
                .map(|s| (to_category.clone(), Some(s.clone()))),
        };
        self.dashboard.drop_item(grab.to_event()).await;
        match follow {
            Some((category, service)) => self.select_row(&category, service.as_deref()),
            None => self.clamp_selection(),
        }
    }

    // ---- prompts and confirmations ----

    pub async fn submit_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            self.close_overlay();
            return;
        };
        self.close_overlay();
        let input = prompt.input.trim().to_string();
        match prompt.action {
            PromptAction::AddCategory => {
                if self.dashboard.add_category(&input).await {
                    self.select_row(&input, None);
                }
            }
            PromptAction::RenameCategory(old) => {
                if self.dashboard.rename_category(&old, &input).await {
                    self.select_row(&input, None);
                }
            }
            PromptAction::SetPreviewUrl => {
                let (preview, notifier) = self.dashboard.preview_parts();
                if preview.set_url(&input, notifier) {
                    self.dashboard.probe_preview().await;
                }
            }
            PromptAction::ImportConfig => {
                if input.is_empty() {
                    return;
                }
                self.open_confirm(super::state::ConfirmState::new(
                    "Import Configuration",
                    format!(
                        "Replace the whole configuration with {}?\nThis cannot be undone.",
                        input
                    ),
                    ConfirmAction::ImportConfig(input),
                ));
            }
            PromptAction::ExportConfig => {
                let path = PathBuf::from(if input.is_empty() {
                    crate::interfaces::tui::constants::DEFAULT_CONFIG_EXPORT
                } else {
                    input.as_str()
                });
                self.dashboard.export_configuration(&path).await;
            }
            PromptAction::AddGroup => {
                self.bookmarks
                    .create_group(&input, self.dashboard.notifier_mut())
                    .await;
            }
            PromptAction::RenameGroup(old) => {
                self.bookmarks
                    .rename_group(&old, &input, self.dashboard.notifier_mut())
                    .await;
            }
            PromptAction::ImportBookmarks => {
                if !input.is_empty() {
                    self.bookmarks
                        .import(&PathBuf::from(&input), self.dashboard.notifier_mut())
                        .await;
                }
            }
            PromptAction::ExportBookmarks => {
                let path = PathBuf::from(if input.is_empty() {
                    crate::interfaces::tui::constants::DEFAULT_BOOKMARK_EXPORT
                } else {
                    input.as_str()
                });
                self.bookmarks
                    .export(&path, self.dashboard.notifier_mut())
                    .await;
            }
        }
        self.clamp_selection();
        self.clamp_bookmark_selection();
    }

    pub async fn confirm_action(&mut self) {
        let Some(confirm) = self.confirm.take() else {
            self.close_overlay();
            return;
        };
        self.close_overlay();
        match confirm.action {
            ConfirmAction::DeleteCategory(name) => {
                self.dashboard.delete_category(&name).await;
            }
            ConfirmAction::DeleteService { category, name } => {
                self.dashboard.delete_service(&category, &name).await;
            }
            ConfirmAction::DeleteGroup(name) => {
                self.bookmarks
                    .delete_group(&name, self.dashboard.notifier_mut())
                    .await;
            }
            ConfirmAction::DeleteBookmark { group, name } => {
                self.bookmarks
                    .delete_bookmark(&group, &name, self.dashboard.notifier_mut())
                    .await;
            }
            ConfirmAction::ImportConfig(path) => {
                self.dashboard
                    .import_configuration(&PathBuf::from(path))
                    .await;
            }
            ConfirmAction::Logout => {
                self.logout().await;
                return;
            }
        }
        self.clamp_selection();
        self.clamp_bookmark_selection();
    }

    // ---- bookmarks ----

    pub async fn open_bookmarks(&mut self) {
        self.bookmarks.load(self.dashboard.notifier_mut()).await;
        self.clamp_bookmark_selection();
        self.current_screen = CurrentScreen::Bookmarks;
    }

    pub fn open_add_bookmark(&mut self) {
        let group = match self.selected_bookmark_row() {
            Some(row) => row.group().to_string(),
            None => {
                self.dashboard
                    .notifier_mut()
                    .warning("Create a group before adding bookmarks");
                return;
            }
        };
        self.bookmarks.begin_add(&group);
        self.bookmark_form = BookmarkFormState::default();
        self.current_screen = CurrentScreen::BookmarkForm;
    }

    pub async fn open_edit_bookmark(&mut self) {
        let Some(BookmarkRow::Bookmark { group, name }) = self.selected_bookmark_row() else {
            return;
        };
        if self
            .bookmarks
            .begin_edit(&group, &name, self.dashboard.notifier_mut())
            .await
        {
            self.bookmark_form = BookmarkFormState::default();
            self.current_screen = CurrentScreen::BookmarkForm;
        }
    }

    pub async fn save_bookmark_form(&mut self) {
        match self.bookmarks.save(self.dashboard.notifier_mut()).await {
            Ok(()) => {
                self.bookmark_form = BookmarkFormState::default();
                self.current_screen = CurrentScreen::Bookmarks;
                self.clamp_bookmark_selection();
            }
            Err(AdminError::Validation(msg)) => match self.bookmarks.editor() {
                Some(editor) => self.bookmark_form.reject(editor, msg),
                None => self.bookmark_form.fail(msg),
            },
            Err(e) => self
                .bookmark_form
                .fail(e.user_message("Failed to save bookmark")),
        }
    }

    pub fn cancel_bookmark_form(&mut self) {
        self.bookmarks.cancel_edit();
        self.bookmark_form = BookmarkFormState::default();
        self.current_screen = CurrentScreen::Bookmarks;
    }

    // ---- preview ----

    pub async fn refresh_and_probe_preview(&mut self) {
        self.dashboard.refresh_preview();
        if self.dashboard.preview().url().is_some() {
            self.dashboard.probe_preview().await;
        }
    }
}
