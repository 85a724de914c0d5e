//! Service add/edit form state machine. Pure state: the dashboard performs
//! the actual requests.

use serde_json::{Map, Value};

use super::form::FieldSet;
use super::widget_schema::shows_display_mode;
use crate::errors::{AdminError, Result};
use crate::models::{ServiceConfig, ServicePayload, ServiceRecord, WidgetKind};
use crate::utils::{non_empty, url_validator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Add,
    /// Remembers where the service lives now; name and category may change
    Edit {
        original_category: String,
        original_name: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceEditor {
    mode: EditorMode,
    categories: Vec<String>,
    pub name: String,
    pub category: String,
    pub icon: String,
    pub href: String,
    pub display: String,
    pub show_stats: bool,
    health_check: bool,
    pub ping: String,
    pub server: String,
    pub container: String,
    widget: Option<FieldSet>,
    hidden: bool,
    extra: Map<String, Value>,
}

impl ServiceEditor {
    /// Blank form, category pre-selected
    pub fn add(category: &str, categories: Vec<String>) -> Self {
        Self {
            mode: EditorMode::Add,
            categories,
            name: String::new(),
            category: category.to_string(),
            icon: String::new(),
            href: String::new(),
            display: String::new(),
            show_stats: false,
            health_check: false,
            ping: String::new(),
            server: String::new(),
            container: String::new(),
            widget: None,
            hidden: false,
            extra: Map::new(),
        }
    }

    /// Form pre-filled from a fetched record
    pub fn edit(record: &ServiceRecord, categories: Vec<String>) -> Self {
        let config = &record.config;
        let text = |v: &Option<String>| v.clone().unwrap_or_default();

        let widget = config.widget.as_ref().and_then(|stored| {
            let kind = stored.kind()?;
            let mut set = FieldSet::build(kind);
            set.populate(stored);
            Some(set)
        });
        let mut extra = config.extra.clone();
        // 未知类型的 widget 原样保留
        if let Some(stored) = &config.widget
            && stored.kind().is_none()
            && let Ok(value) = serde_json::to_value(stored)
        {
            extra.insert("widget".to_string(), value);
        }

        Self {
            mode: EditorMode::Edit {
                original_category: record.category.clone(),
                original_name: record.name.clone(),
            },
            categories,
            name: record.name.clone(),
            category: record.category.clone(),
            icon: text(&config.icon),
            href: text(&config.href),
            display: text(&config.display),
            show_stats: config.show_stats.unwrap_or(false),
            health_check: config.health_check_enabled(),
            ping: text(&config.ping),
            server: text(&config.server),
            container: text(&config.container),
            widget,
            hidden: config.is_hidden(),
            extra,
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, EditorMode::Edit { .. })
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Service"
        } else {
            "Add Service"
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn health_check_enabled(&self) -> bool {
        self.health_check
    }

    /// Gate ping/server/container. Values are kept while disabled.
    pub fn set_health_check(&mut self, enabled: bool) {
        self.health_check = enabled;
    }

    pub fn widget_kind(&self) -> Option<WidgetKind> {
        self.widget.as_ref().map(FieldSet::kind)
    }

    pub fn widget(&self) -> Option<&FieldSet> {
        self.widget.as_ref()
    }

    pub fn widget_mut(&mut self) -> Option<&mut FieldSet> {
        self.widget.as_mut()
    }

    /// Select a widget type: the field set is destroyed and rebuilt, `None`
    /// leaves no widget fields. Re-selecting the current type keeps values.
    pub fn set_widget_kind(&mut self, kind: Option<WidgetKind>) {
        if self.widget_kind() == kind {
            return;
        }
        self.extra.remove("widget");
        self.widget = kind.map(FieldSet::build);
    }

    pub fn display_mode_visible(&self) -> bool {
        shows_display_mode(self.widget_kind())
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AdminError::validation("Service name is required"));
        }
        let category = self.category.trim();
        if category.is_empty() {
            return Err(AdminError::validation("Category is required"));
        }
        if !self.categories.is_empty() && !self.categories.iter().any(|c| c == category) {
            return Err(AdminError::validation(format!(
                "Unknown category '{}'",
                category
            )));
        }
        if !self.href.trim().is_empty()
            && let Err(e) = url_validator::parse_http_url(&self.href)
        {
            return Err(AdminError::validation(format!("Service URL: {}", e)));
        }
        if let Some(widget) = &self.widget {
            widget.validate()?;
        }
        Ok(())
    }

    /// Validate, then build the body for create/update
    pub fn build_payload(&self) -> Result<ServicePayload> {
        self.validate()?;

        let mut config = ServiceConfig {
            icon: non_empty(&self.icon),
            href: non_empty(&self.href),
            display: non_empty(&self.display),
            show_stats: self.show_stats.then_some(true),
            hidden: self.hidden.then_some(true),
            extra: self.extra.clone(),
            ..Default::default()
        };

        if self.health_check {
            config.ping = non_empty(&self.ping);
            config.server = non_empty(&self.server);
            config.container = non_empty(&self.container);
        } else {
            config.health_check_disabled = Some(true);
        }

        if let Some(widget) = &self.widget {
            config.extra.remove("widget");
            config.widget = Some(widget.collect());
        }

        Ok(ServicePayload {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            config,
        })
    }
}

/// Flip visibility. Showing a service again also drops the
/// `healthCheckDisabled` marker. Returns the new config and the new state.
pub fn toggle_hidden(config: &ServiceConfig) -> (ServiceConfig, bool) {
    let mut updated = config.clone();
    let hide = !config.is_hidden();
    if hide {
        updated.hidden = Some(true);
    } else {
        updated.hidden = None;
        updated.health_check_disabled = None;
    }
    (updated, hide)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(config: Value) -> ServiceRecord {
        serde_json::from_value(json!({
            "name": "Emby",
            "category": "Media",
            "config": config
        }))
        .unwrap()
    }

    fn categories() -> Vec<String> {
        vec!["Media".to_string(), "Tools".to_string()]
    }

    #[test]
    fn test_add_mode_defaults() {
        let editor = ServiceEditor::add("Tools", categories());
        assert_eq!(editor.title(), "Add Service");
        assert_eq!(editor.category, "Tools");
        assert!(!editor.health_check_enabled());
        assert!(!editor.display_mode_visible());
    }

    #[test]
    fn test_missing_required_widget_field_rejected() {
        let mut editor = ServiceEditor::add("Media", categories());
        editor.name = "Emby".into();
        editor.set_widget_kind(Some(WidgetKind::Emby));
        editor
            .widget_mut()
            .unwrap()
            .set_text("url", "http://emby:8096")
            .unwrap();
        assert!(matches!(editor.build_payload(), Err(AdminError::Validation(_))));
    }

    #[test]
    fn test_disabled_health_check_omits_fields() {
        let stored = record(json!({"ping": "http://emby", "container": "emby"}));
        let mut editor = ServiceEditor::edit(&stored, categories());
        assert!(editor.health_check_enabled());

        editor.set_health_check(false);
        let payload = editor.build_payload().unwrap();
        let value = serde_json::to_value(&payload.config).unwrap();
        assert_eq!(value, json!({"healthCheckDisabled": true}));
        assert_eq!(editor.ping, "http://emby");
    }

    #[test]
    fn test_edit_preserves_hidden_and_unknown_keys() {
        let stored = record(json!({
            "href": "http://emby:8096",
            "hidden": true,
            "healthCheckDisabled": true,
            "description": "Movies"
        }));
        let editor = ServiceEditor::edit(&stored, categories());
        assert!(!editor.health_check_enabled());

        let value = serde_json::to_value(editor.build_payload().unwrap().config).unwrap();
        assert_eq!(
            value,
            json!({
                "href": "http://emby:8096",
                "hidden": true,
                "healthCheckDisabled": true,
                "description": "Movies"
            })
        );
    }

    #[test]
    fn test_rename_keeps_original_identity() {
        let mut editor = ServiceEditor::edit(&record(json!({})), categories());
        editor.name = "Jellyfin".into();
        editor.category = "Tools".into();
        assert_eq!(
            editor.mode(),
            &EditorMode::Edit {
                original_category: "Media".into(),
                original_name: "Emby".into()
            }
        );
        let payload = editor.build_payload().unwrap();
        assert_eq!(payload.name, "Jellyfin");
        assert_eq!(payload.category, "Tools");
    }

    #[test]
    fn test_widget_type_switch_rebuilds_fields() {
        let stored = record(json!({
            "widget": {"type": "customapi", "url": "http://api", "method": "POST"}
        }));
        let mut editor = ServiceEditor::edit(&stored, categories());
        assert!(editor.display_mode_visible());
        assert_eq!(editor.widget().unwrap().field("method").unwrap().text(), "POST");

        editor.set_widget_kind(Some(WidgetKind::CustomApi));
        assert_eq!(editor.widget().unwrap().field("method").unwrap().text(), "POST");

        editor.set_widget_kind(Some(WidgetKind::Tailscale));
        assert!(editor.widget().unwrap().field("url").is_none());
        editor.set_widget_kind(None);
        assert!(editor.widget().is_none());
    }

    #[test]
    fn test_unknown_widget_type_passes_through() {
        let stored = record(json!({"widget": {"type": "sonarr", "url": "http://s", "key": "k"}}));
        let editor = ServiceEditor::edit(&stored, categories());
        assert!(editor.widget().is_none());
        let payload = editor.build_payload().unwrap();
        let value = serde_json::to_value(&payload.config).unwrap();
        assert_eq!(value["widget"]["type"], json!("sonarr"));
    }

    #[test]
    fn test_validation_messages() {
        let mut editor = ServiceEditor::add("Media", categories());
        assert_eq!(
            editor.validate().unwrap_err().message(),
            "Service name is required"
        );
        editor.name = "X".into();
        editor.category = "Nope".into();
        assert!(editor.validate().is_err());
        editor.category = "Media".into();
        editor.href = "javascript:alert(1)".into();
        assert!(editor.validate().is_err());
    }

    #[test]
    fn test_toggle_hidden() {
        let visible = ServiceConfig::default();
        let (hidden, now_hidden) = toggle_hidden(&visible);
        assert!(now_hidden);
        assert_eq!(hidden.hidden, Some(true));

        let stored = ServiceConfig {
            hidden: Some(true),
            health_check_disabled: Some(true),
            ping: Some("http://x".into()),
            ..Default::default()
        };
        let (shown, now_hidden) = toggle_hidden(&stored);
        assert!(!now_hidden);
        assert!(shown.hidden.is_none());
        assert!(shown.health_check_disabled.is_none());
        assert_eq!(shown.ping.as_deref(), Some("http://x"));
    }
}
