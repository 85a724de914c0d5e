//! Data model shared by the client, editors and interfaces
//!
//! Field names follow the backend's JSON/YAML shape (`showStats`,
//! `healthCheckDisabled`, widget `type`, ...) so values round-trip unchanged.

mod auth;
mod bookmark;
mod payloads;
mod service;
mod widget;

pub use auth::{LoginRequest, LoginResponse, MessageResponse, UserInfo};
pub use bookmark::{Bookmark, BookmarkGroup, BookmarkImportSummary, BookmarkPayload, GroupBookmarks};
pub use payloads::{
    CategoryPayload, ConfigImportSummary, MoveServicePayload, RenamePayload, ServiceOrderPayload,
};
pub use service::{Configuration, Service, ServiceConfig, ServicePayload, ServiceRecord};
pub use widget::{FieldMapping, WidgetConfig, WidgetKind};
