//! App state definition and basic state management
//!
//! 包含核心 App 结构和基础状态管理，以及拆分后的表单状态模块

mod form_state;

pub use form_state::{
    BookmarkField, BookmarkFormState, ConfirmAction, ConfirmState, FormRow, LoginField,
    LoginForm, PromptAction, PromptState, ServiceFormState,
};

use std::sync::Arc;

use crate::bookmarks::BookmarkManager;
use crate::client::{ApiClient, AuthSession, SessionStore};
use crate::dashboard::Dashboard;
use crate::notify::Notifier;
use crate::reorder::DropEvent;

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Login,
    Main,
    ServiceForm,
    Prompt,
    Confirm,
    Bookmarks,
    BookmarkForm,
    Preview,
    Help,
    Exiting,
}

/// One line of the category/service tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeRow {
    Category {
        name: String,
        position: usize,
    },
    Service {
        category: String,
        name: String,
        position: usize,
    },
}

impl TreeRow {
    pub fn category(&self) -> &str {
        match self {
            TreeRow::Category { name, .. } => name,
            TreeRow::Service { category, .. } => category,
        }
    }
}

/// One line of the bookmark tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkRow {
    Group { name: String },
    Bookmark { group: String, name: String },
}

impl BookmarkRow {
    pub fn group(&self) -> &str {
        match self {
            BookmarkRow::Group { name } => name,
            BookmarkRow::Bookmark { group, .. } => group,
        }
    }
}

/// Item picked up with `m`, with its current drop target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grab {
    Category {
        from: usize,
        to: usize,
    },
    Service {
        from_category: String,
        from: usize,
        to_category: String,
        to: usize,
    },
}

impl Grab {
    pub fn to_event(&self) -> DropEvent {
        match self.clone() {
            Grab::Category { from, to } => DropEvent::Category { from, to },
            Grab::Service {
                from_category,
                from,
                to_category,
                to,
            } => DropEvent::Service {
                from_category,
                from,
                to_category,
                to,
            },
        }
    }
}

pub struct App {
    pub session: Arc<AuthSession>,
    pub dashboard: Dashboard,
    pub bookmarks: BookmarkManager,
    pub current_screen: CurrentScreen,
    /// Screen to return to from Prompt / Confirm / Help
    pub return_screen: CurrentScreen,

    pub login: LoginForm,
    pub service_form: ServiceFormState,
    pub bookmark_form: BookmarkFormState,
    pub prompt: Option<PromptState>,
    pub confirm: Option<ConfirmState>,

    // Tree selection
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub last_visible_height: usize,
    pub bookmark_index: usize,
    pub grab: Option<Grab>,
}

impl App {
    pub fn new() -> Self {
        let session = Arc::new(AuthSession::new(SessionStore::from_config()));
        Self::with_client(ApiClient::from_config(session))
    }

    pub fn with_client(client: ApiClient) -> Self {
        let session = client.session().clone();
        let bookmarks = BookmarkManager::new(client.clone());
        App {
            session,
            dashboard: Dashboard::new(client, Notifier::from_config()),
            bookmarks,
            current_screen: CurrentScreen::Main,
            return_screen: CurrentScreen::Main,
            login: LoginForm::default(),
            service_form: ServiceFormState::default(),
            bookmark_form: BookmarkFormState::default(),
            prompt: None,
            confirm: None,
            selected_index: 0,
            scroll_offset: 0,
            last_visible_height: 10,
            bookmark_index: 0,
            grab: None,
        }
    }

    /// Flattened category/service tree in display order
    pub fn rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        for (position, (name, services)) in self.dashboard.configuration().iter().enumerate() {
            rows.push(TreeRow::Category {
                name: name.clone(),
                position,
            });
            for (index, service) in services.iter().enumerate() {
                rows.push(TreeRow::Service {
                    category: name.clone(),
                    name: service.name.clone(),
                    position: index,
                });
            }
        }
        rows
    }

    pub fn selected_row(&self) -> Option<TreeRow> {
        self.rows().into_iter().nth(self.selected_index)
    }

    pub fn bookmark_rows(&self) -> Vec<BookmarkRow> {
        let mut rows = Vec::new();
        for group in self.bookmarks.groups() {
            rows.push(BookmarkRow::Group {
                name: group.name.clone(),
            });
            for bookmark in &group.bookmarks {
                rows.push(BookmarkRow::Bookmark {
                    group: group.name.clone(),
                    name: bookmark.name.clone(),
                });
            }
        }
        rows
    }

    pub fn selected_bookmark_row(&self) -> Option<BookmarkRow> {
        self.bookmark_rows().into_iter().nth(self.bookmark_index)
    }

    /// Open a single-line input over the current screen
    pub fn open_prompt(&mut self, prompt: PromptState) {
        if !matches!(
            self.current_screen,
            CurrentScreen::Prompt | CurrentScreen::Confirm
        ) {
            self.return_screen = self.current_screen;
        }
        self.prompt = Some(prompt);
        self.current_screen = CurrentScreen::Prompt;
    }

    pub fn open_confirm(&mut self, confirm: ConfirmState) {
        if !matches!(
            self.current_screen,
            CurrentScreen::Prompt | CurrentScreen::Confirm
        ) {
            self.return_screen = self.current_screen;
        }
        self.confirm = Some(confirm);
        self.current_screen = CurrentScreen::Confirm;
    }

    /// Close Prompt / Confirm / Help
    pub fn close_overlay(&mut self) {
        self.prompt = None;
        self.confirm = None;
        self.current_screen = self.return_screen;
    }

    /// Switch to the login view after the session was dropped
    pub fn require_login(&mut self, reason: Option<&str>) {
        self.grab = None;
        self.prompt = None;
        self.confirm = None;
        self.dashboard.cancel_edit();
        self.bookmarks.cancel_edit();
        self.login = LoginForm {
            error: reason.map(str::to_string),
            ..LoginForm::default()
        };
        self.current_screen = CurrentScreen::Login;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
