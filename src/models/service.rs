use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::widget::WidgetConfig;
use crate::reorder::BoardLayout;

/// Per-service settings as stored in `services.yaml`.
///
/// Keys the editor does not model (`description`, `siteMonitor`, ...) are
/// kept in `extra` and written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_stats: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ping: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check_disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget: Option<WidgetConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

impl ServiceConfig {
    pub fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }

    pub fn has_health_fields(&self) -> bool {
        present(&self.ping) || present(&self.server) || present(&self.container)
    }

    /// Health check counts as enabled when not explicitly suppressed and at
    /// least one of ping/server/container is set
    pub fn health_check_enabled(&self) -> bool {
        !self.health_check_disabled.unwrap_or(false) && self.has_health_fields()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub config: ServiceConfig,
}

/// `GET /api/services/{category}/{name}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceRecord {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub config: ServiceConfig,
}

/// Body of service create / update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServicePayload {
    pub name: String,
    pub category: String,
    pub config: ServiceConfig,
}

/// Category name → ordered services. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration(IndexMap<String, Vec<Service>>);

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn category_count(&self) -> usize {
        self.0.len()
    }

    pub fn total_services(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn contains_category(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn category_names(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    pub fn services(&self, category: &str) -> Option<&[Service]> {
        self.0.get(category).map(Vec::as_slice)
    }

    pub fn find_service(&self, category: &str, name: &str) -> Option<&Service> {
        self.services(category)?.iter().find(|s| s.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<Service>)> {
        self.0.iter()
    }

    /// Builder used by loaders and tests
    pub fn with_category(mut self, name: impl Into<String>, services: Vec<Service>) -> Self {
        self.0.insert(name.into(), services);
        self
    }

    /// Produce a new configuration ordered as `layout` describes.
    ///
    /// Services are looked up in their listed category first, then in any
    /// other category (a cross-category move). Every service and category of
    /// `self` appears exactly once in the result; anything `layout` does not
    /// mention keeps its relative order at the end.
    pub fn arranged_by(&self, layout: &BoardLayout) -> Configuration {
        let mut pool = self.0.clone();
        let mut arranged: IndexMap<String, Vec<Service>> = IndexMap::new();

        for category in layout.categories() {
            if !pool.contains_key(category) || arranged.contains_key(category) {
                continue;
            }
            let mut ordered = Vec::new();
            for name in layout.services_of(category) {
                if let Some(service) = take_service(&mut pool, category, name) {
                    ordered.push(service);
                }
            }
            arranged.insert(category.clone(), ordered);
        }

        for (category, rest) in pool {
            arranged.entry(category).or_default().extend(rest);
        }

        Configuration(arranged)
    }
}

fn take_service(
    pool: &mut IndexMap<String, Vec<Service>>,
    preferred: &str,
    name: &str,
) -> Option<Service> {
    if let Some(list) = pool.get_mut(preferred)
        && let Some(pos) = list.iter().position(|s| s.name == name)
    {
        return Some(list.remove(pos));
    }
    pool.values_mut().find_map(|list| {
        let pos = list.iter().position(|s| s.name == name)?;
        Some(list.remove(pos))
    })
}

impl From<IndexMap<String, Vec<Service>>> for Configuration {
    fn from(map: IndexMap<String, Vec<Service>>) -> Self {
        Configuration(map)
    }
}
