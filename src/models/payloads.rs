//! Request bodies for the category / ordering endpoints and import summaries

use serde::{Deserialize, Serialize};

/// `POST /api/categories/`
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPayload {
    pub name: String,
}

/// `PUT /api/categories/{name}` and `PUT /api/bookmarks/groups/{name}`
#[derive(Debug, Clone, Serialize)]
pub struct RenamePayload {
    pub new_name: String,
}

/// `POST /api/services/reorder`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOrderPayload {
    pub category: String,
    pub service_order: Vec<String>,
}

/// `POST /api/services/move`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveServicePayload {
    pub service_name: String,
    pub from_category: String,
    pub to_category: String,
}

/// `POST /api/config/import` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigImportSummary {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub categories: usize,
    #[serde(default)]
    pub services: usize,
}
