use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumIter, EnumMessage, EnumString, IntoEnumIterator, IntoStaticStr};

/// Widget types the editor knows how to build forms for.
///
/// The strum tag is the value stored under the widget's `type` key.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumMessage,
    EnumString,
    Display,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum WidgetKind {
    #[strum(serialize = "emby", message = "Emby")]
    Emby,
    #[strum(serialize = "jellyfin", message = "Jellyfin")]
    Jellyfin,
    #[strum(serialize = "qbittorrent", message = "qBittorrent")]
    Qbittorrent,
    #[strum(serialize = "transmission", message = "Transmission")]
    Transmission,
    #[strum(serialize = "customapi", message = "Custom API")]
    CustomApi,
    #[strum(serialize = "homeassistant", message = "Home Assistant")]
    HomeAssistant,
    #[strum(serialize = "diskstation", message = "Synology DiskStation")]
    DiskStation,
    #[strum(serialize = "tailscale", message = "Tailscale")]
    Tailscale,
    #[strum(serialize = "openwrt", message = "OpenWrt")]
    OpenWrt,
}

impl WidgetKind {
    pub fn tag(&self) -> &'static str {
        self.into()
    }

    /// Human-readable name for pickers
    pub fn label(&self) -> &'static str {
        self.get_message().unwrap_or_else(|| self.tag())
    }

    pub fn all() -> Vec<WidgetKind> {
        WidgetKind::iter().collect()
    }

    /// Parse user input, listing the known tags on failure
    pub fn parse_tag(raw: &str) -> Result<Self, String> {
        raw.trim().parse().map_err(|_| {
            let valid: Vec<&str> = WidgetKind::iter().map(|k| k.tag()).collect();
            format!("Invalid widget type: '{}'. Valid: {}", raw, valid.join(", "))
        })
    }
}

/// `{ "field": "...", "label": "..." }` entry of a customapi widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub label: String,
}

/// A service widget: its `type` tag plus type-specific settings.
///
/// Settings are kept as raw JSON so keys unknown to the editor survive a
/// load/save cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(rename = "type")]
    pub widget_type: String,
    #[serde(flatten)]
    pub settings: Map<String, Value>,
}

impl WidgetConfig {
    pub fn new(widget_type: impl Into<String>) -> Self {
        Self {
            widget_type: widget_type.into(),
            settings: Map::new(),
        }
    }

    pub fn kind(&self) -> Option<WidgetKind> {
        self.widget_type.parse().ok()
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.settings.get(key).and_then(Value::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.settings.get(key).and_then(Value::as_bool)
    }

    /// String list setting (e.g. homeassistant `fields`)
    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        match self.settings.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            Some(Value::String(s)) => vec![s.clone()],
            _ => Vec::new(),
        }
    }

    /// customapi `mappings`; malformed entries are skipped
    pub fn mappings(&self) -> Vec<FieldMapping> {
        match self.settings.get("mappings") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| serde_json::from_value(v.clone()).ok())
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.settings.insert(key.into(), value);
    }
}
