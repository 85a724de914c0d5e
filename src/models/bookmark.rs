use serde::{Deserialize, Serialize};

/// A single bookmark inside a group; `name` is unique within its group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub name: String,
    #[serde(default)]
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `GET /api/bookmarks/` returns a list of these, in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkGroup {
    pub name: String,
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
}

impl BookmarkGroup {
    pub fn find(&self, name: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.name == name)
    }
}

/// `GET /api/bookmarks/{group}`
#[derive(Debug, Clone, Deserialize)]
pub struct GroupBookmarks {
    pub group: String,
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
}

/// Body for bookmark create / update. Empty optional fields are sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookmarkPayload {
    pub name: String,
    pub href: String,
    pub icon: Option<String>,
    pub description: Option<String>,
}

/// `POST /api/bookmarks/import` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookmarkImportSummary {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub groups: usize,
    #[serde(default)]
    pub total_bookmarks: usize,
}
