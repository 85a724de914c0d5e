//! Bookmark groups: CRUD, import and export
//!
//! Mirrors the service editor flow without widget forms. Operations report
//! through a caller-supplied [`Notifier`] so the TUI can share one toast
//! queue with the dashboard.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::client::ApiClient;
use crate::dashboard::file_name;
use crate::errors::{AdminError, Result};
use crate::models::{Bookmark, BookmarkGroup, BookmarkPayload};
use crate::notify::Notifier;
use crate::utils::{non_empty, url_validator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkMode {
    Add,
    Edit { original_name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkEditor {
    mode: BookmarkMode,
    group: String,
    pub name: String,
    pub href: String,
    pub icon: String,
    pub description: String,
}

impl BookmarkEditor {
    pub fn add(group: &str) -> Self {
        Self {
            mode: BookmarkMode::Add,
            group: group.to_string(),
            name: String::new(),
            href: String::new(),
            icon: String::new(),
            description: String::new(),
        }
    }

    pub fn edit(group: &str, bookmark: &Bookmark) -> Self {
        Self {
            mode: BookmarkMode::Edit {
                original_name: bookmark.name.clone(),
            },
            group: group.to_string(),
            name: bookmark.name.clone(),
            href: bookmark.href.clone(),
            icon: bookmark.icon.clone().unwrap_or_default(),
            description: bookmark.description.clone().unwrap_or_default(),
        }
    }

    pub fn mode(&self) -> &BookmarkMode {
        &self.mode
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, BookmarkMode::Edit { .. })
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Bookmark"
        } else {
            "Add Bookmark"
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AdminError::validation("Bookmark name is required"));
        }
        if self.href.trim().is_empty() {
            return Err(AdminError::validation("Bookmark URL is required"));
        }
        url_validator::parse_http_url(&self.href)
            .map_err(|e| AdminError::validation(format!("Bookmark URL: {}", e)))?;
        Ok(())
    }

    /// Empty icon/description go out as `null`
    pub fn build_payload(&self) -> Result<BookmarkPayload> {
        self.validate()?;
        Ok(BookmarkPayload {
            name: self.name.trim().to_string(),
            href: self.href.trim().to_string(),
            icon: non_empty(&self.icon),
            description: non_empty(&self.description),
        })
    }
}

pub struct BookmarkManager {
    client: ApiClient,
    groups: Vec<BookmarkGroup>,
    editor: Option<BookmarkEditor>,
}

fn report(notifier: &mut Notifier, err: &AdminError, fallback: &str) {
    if err.is_unauthorized() {
        debug!("{} (login required)", fallback);
        return;
    }
    notifier.error(err.user_message(fallback));
}

impl BookmarkManager {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            groups: Vec::new(),
            editor: None,
        }
    }

    pub fn groups(&self) -> &[BookmarkGroup] {
        &self.groups
    }

    pub fn group(&self, name: &str) -> Option<&BookmarkGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn total_bookmarks(&self) -> usize {
        self.groups.iter().map(|g| g.bookmarks.len()).sum()
    }

    pub fn editor(&self) -> Option<&BookmarkEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut BookmarkEditor> {
        self.editor.as_mut()
    }

    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }

    pub async fn load(&mut self, notifier: &mut Notifier) -> bool {
        match self.client.bookmarks().list().await {
            Ok(groups) => {
                info!("Loaded {} bookmark groups", groups.len());
                self.groups = groups;
                true
            }
            Err(e) => {
                report(notifier, &e, "Failed to load bookmarks");
                false
            }
        }
    }

    async fn finish(
        &mut self,
        result: Result<()>,
        notifier: &mut Notifier,
        success: &str,
        failure: &str,
    ) -> bool {
        match result {
            Ok(()) => {
                notifier.success(success);
                self.load(notifier).await;
                true
            }
            Err(e) => {
                report(notifier, &e, failure);
                false
            }
        }
    }

    pub async fn create_group(&mut self, name: &str, notifier: &mut Notifier) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let result = self.client.bookmarks().create_group(name).await.map(|_| ());
        self.finish(result, notifier, "Group created successfully", "Failed to create group")
            .await
    }

    pub async fn rename_group(&mut self, old_name: &str, new_name: &str, notifier: &mut Notifier) -> bool {
        let new_name = new_name.trim();
        if new_name.is_empty() || new_name == old_name {
            return false;
        }
        let result = self
            .client
            .bookmarks()
            .rename_group(old_name, new_name)
            .await
            .map(|_| ());
        self.finish(result, notifier, "Group renamed successfully", "Failed to rename group")
            .await
    }

    pub async fn delete_group(&mut self, name: &str, notifier: &mut Notifier) -> bool {
        let result = self.client.bookmarks().delete_group(name).await.map(|_| ());
        self.finish(result, notifier, "Group deleted successfully", "Failed to delete group")
            .await
    }

    pub fn begin_add(&mut self, group: &str) -> &mut BookmarkEditor {
        self.editor.insert(BookmarkEditor::add(group))
    }

    /// Fetch the group fresh and open the named bookmark
    pub async fn begin_edit(&mut self, group: &str, name: &str, notifier: &mut Notifier) -> bool {
        match self.client.bookmarks().group(group).await {
            Ok(data) => match data.bookmarks.iter().find(|b| b.name == name) {
                Some(bookmark) => {
                    self.editor = Some(BookmarkEditor::edit(group, bookmark));
                    true
                }
                None => {
                    notifier.error("Bookmark not found");
                    false
                }
            },
            Err(e) => {
                report(notifier, &e, "Failed to load bookmark");
                false
            }
        }
    }

    /// Submit the open editor; validation errors are returned untoasted
    pub async fn save(&mut self, notifier: &mut Notifier) -> Result<()> {
        let editor = self
            .editor
            .as_ref()
            .ok_or_else(|| AdminError::validation("No bookmark is being edited"))?;
        let payload = editor.build_payload()?;
        let group = editor.group().to_string();

        let api = self.client.bookmarks();
        let (result, verb) = match editor.mode() {
            BookmarkMode::Add => (api.create(&group, &payload).await, "added"),
            BookmarkMode::Edit { original_name } => {
                (api.update(&group, original_name, &payload).await, "updated")
            }
        };

        match result {
            Ok(_) => {
                self.editor = None;
                notifier.success(format!("Bookmark {} successfully", verb));
                self.load(notifier).await;
                Ok(())
            }
            Err(e) => {
                report(notifier, &e, "Failed to save bookmark");
                Err(e)
            }
        }
    }

    pub async fn delete_bookmark(&mut self, group: &str, name: &str, notifier: &mut Notifier) -> bool {
        let result = self.client.bookmarks().delete(group, name).await.map(|_| ());
        self.finish(result, notifier, "Bookmark deleted successfully", "Failed to delete bookmark")
            .await
    }

    /// Save `bookmarks.yaml` to `destination`
    pub async fn export(&mut self, destination: &Path, notifier: &mut Notifier) -> Option<PathBuf> {
        let result = async {
            let data = self.client.bookmarks().export().await?;
            std::fs::write(destination, data)?;
            Ok::<_, AdminError>(destination.to_path_buf())
        }
        .await;
        match result {
            Ok(path) => {
                notifier.success("Bookmarks exported successfully");
                Some(path)
            }
            Err(e) => {
                report(notifier, &e, "Failed to export bookmarks");
                None
            }
        }
    }

    pub async fn import(&mut self, path: &Path, notifier: &mut Notifier) -> bool {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                notifier.error(format!("Cannot read {}: {}", path.display(), e));
                return false;
            }
        };
        let filename = file_name(path, "bookmarks.yaml");
        match self.client.bookmarks().import(&filename, &data).await {
            Ok(summary) => {
                notifier.success(format!(
                    "Imported {} groups with {} bookmarks",
                    summary.groups, summary.total_bookmarks
                ));
                self.load(notifier).await;
                true
            }
            Err(e) => {
                report(notifier, &e, "Failed to import bookmarks");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_payload_nulls_empty_optionals() {
        let mut editor = BookmarkEditor::add("Dev");
        editor.name = " GitHub ".into();
        editor.href = "https://github.com".into();
        let payload = editor.build_payload().unwrap();
        assert_eq!(payload.name, "GitHub");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "name": "GitHub",
                "href": "https://github.com",
                "icon": null,
                "description": null
            })
        );
    }

    #[test]
    fn test_editor_requires_name_and_href() {
        let mut editor = BookmarkEditor::add("Dev");
        assert_eq!(editor.validate().unwrap_err().message(), "Bookmark name is required");
        editor.name = "x".into();
        assert_eq!(editor.validate().unwrap_err().message(), "Bookmark URL is required");
        editor.href = "not-a-url".into();
        assert!(editor.validate().is_err());
    }

    #[test]
    fn test_edit_mode_remembers_original_name() {
        let bookmark = Bookmark {
            name: "Docs".into(),
            href: "https://docs.rs".into(),
            icon: Some("docs.png".into()),
            description: None,
        };
        let mut editor = BookmarkEditor::edit("Dev", &bookmark);
        editor.name = "Rust Docs".into();
        assert_eq!(editor.title(), "Edit Bookmark");
        assert_eq!(
            editor.mode(),
            &BookmarkMode::Edit {
                original_name: "Docs".into()
            }
        );
        assert_eq!(editor.icon, "docs.png");
    }
}
