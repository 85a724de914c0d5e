//! Generic widget form built from the schema table
//!
//! [`FieldSet::build`] returns every field handle synchronously, so a stored
//! widget can be poured into the form right after it is built.

use serde_json::{Map, Value};

use super::widget_schema::{FieldDescriptor, FieldKind, fields_for};
use crate::errors::{AdminError, Result};
use crate::models::{FieldMapping, WidgetConfig, WidgetKind};
use crate::utils::{join_list, split_list, url_validator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Mappings(Vec<FieldMapping>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldHandle {
    pub descriptor: &'static FieldDescriptor,
    pub value: FieldValue,
}

impl FieldHandle {
    fn new(descriptor: &'static FieldDescriptor) -> Self {
        let value = match descriptor.kind {
            FieldKind::Checkbox => FieldValue::Flag(descriptor.default == Some("true")),
            FieldKind::Mappings => FieldValue::Mappings(Vec::new()),
            _ => FieldValue::Text(descriptor.default.unwrap_or_default().to_string()),
        };
        Self { descriptor, value }
    }

    pub fn key(&self) -> &'static str {
        self.descriptor.key
    }

    pub fn text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Value as shown in a single-line input
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => {
                if self.descriptor.kind == FieldKind::Password {
                    "*".repeat(s.chars().count())
                } else {
                    s.clone()
                }
            }
            FieldValue::Flag(b) => if *b { "[x]" } else { "[ ]" }.to_string(),
            FieldValue::Mappings(m) => m
                .iter()
                .map(|m| format!("{}={}", m.field, m.label))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSet {
    kind: WidgetKind,
    fields: Vec<FieldHandle>,
    /// Settings of the loaded widget that the table does not describe
    preserved: Map<String, Value>,
}

impl FieldSet {
    pub fn build(kind: WidgetKind) -> Self {
        Self {
            kind,
            fields: fields_for(kind).iter().map(FieldHandle::new).collect(),
            preserved: Map::new(),
        }
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn fields(&self) -> &[FieldHandle] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&FieldHandle> {
        self.fields.iter().find(|f| f.key() == key)
    }

    pub fn field_mut(&mut self, key: &str) -> Option<&mut FieldHandle> {
        self.fields.iter_mut().find(|f| f.key() == key)
    }

    /// Fill the fields from a stored widget of the same type
    pub fn populate(&mut self, widget: &WidgetConfig) {
        self.preserved = widget
            .settings
            .iter()
            .filter(|(key, _)| self.field(key).is_none())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        for handle in &mut self.fields {
            let key = handle.descriptor.key;
            match handle.descriptor.kind {
                FieldKind::Checkbox => {
                    if let Some(flag) = widget.get_bool(key) {
                        handle.value = FieldValue::Flag(flag);
                    }
                }
                FieldKind::List => {
                    let items = widget.get_string_list(key);
                    handle.value = FieldValue::Text(join_list(&items));
                }
                FieldKind::Mappings => {
                    handle.value = FieldValue::Mappings(widget.mappings());
                }
                _ => {
                    if let Some(value) = widget.settings.get(key) {
                        let text = match value {
                            Value::String(s) => s.clone(),
                            Value::Null => String::new(),
                            other => other.to_string(),
                        };
                        handle.value = FieldValue::Text(text);
                    }
                }
            }
        }
    }

    pub fn set_text(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let handle = self
            .field_mut(key)
            .ok_or_else(|| AdminError::validation(format!("Unknown widget field '{}'", key)))?;
        match handle.descriptor.kind {
            FieldKind::Checkbox => {
                let raw: String = value.into();
                let flag = matches!(raw.trim().to_lowercase().as_str(), "true" | "yes" | "1" | "on");
                handle.value = FieldValue::Flag(flag);
            }
            FieldKind::Mappings => {
                let raw: String = value.into();
                handle.value = FieldValue::Mappings(parse_mappings(&raw)?);
            }
            _ => handle.value = FieldValue::Text(value.into()),
        }
        Ok(())
    }

    pub fn toggle(&mut self, key: &str) {
        if let Some(handle) = self.field_mut(key)
            && let FieldValue::Flag(flag) = &mut handle.value
        {
            *flag = !*flag;
        }
    }

    /// Cycle a select field to its next option
    pub fn cycle_option(&mut self, key: &str) {
        if let Some(handle) = self.field_mut(key)
            && let FieldKind::Select(options) = handle.descriptor.kind
            && let FieldValue::Text(current) = &mut handle.value
        {
            let next = options
                .iter()
                .position(|o| o == current)
                .map(|i| (i + 1) % options.len())
                .unwrap_or(0);
            if let Some(option) = options.get(next) {
                *current = option.to_string();
            }
        }
    }

    pub fn mappings(&self) -> &[FieldMapping] {
        self.fields
            .iter()
            .find_map(|f| match &f.value {
                FieldValue::Mappings(m) => Some(m.as_slice()),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn add_mapping(&mut self, field: &str, label: &str) {
        if let Some(FieldValue::Mappings(list)) = self
            .fields
            .iter_mut()
            .map(|f| &mut f.value)
            .find(|v| matches!(v, FieldValue::Mappings(_)))
        {
            list.push(FieldMapping {
                field: field.to_string(),
                label: label.to_string(),
            });
        }
    }

    pub fn remove_mapping(&mut self, index: usize) {
        for handle in &mut self.fields {
            if let FieldValue::Mappings(list) = &mut handle.value
                && index < list.len()
            {
                list.remove(index);
            }
        }
    }

    /// Required fields present and URL fields well formed
    pub fn validate(&self) -> Result<()> {
        for handle in &self.fields {
            let descriptor = handle.descriptor;
            let FieldValue::Text(value) = &handle.value else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                if descriptor.required {
                    return Err(AdminError::validation(format!(
                        "Widget field '{}' is required",
                        descriptor.label
                    )));
                }
                continue;
            }
            if descriptor.kind == FieldKind::Url
                && let Err(e) = url_validator::parse_http_url(value)
            {
                return Err(AdminError::validation(format!(
                    "Widget field '{}': {}",
                    descriptor.label, e
                )));
            }
            if let FieldKind::Select(options) = descriptor.kind
                && !options.contains(&value)
            {
                return Err(AdminError::validation(format!(
                    "Widget field '{}' must be one of {}",
                    descriptor.label,
                    options.join(", ")
                )));
            }
        }
        Ok(())
    }

    /// Build the widget from the current field values
    pub fn collect(&self) -> WidgetConfig {
        let mut widget = WidgetConfig::new(self.kind.tag());
        widget.settings = self.preserved.clone();

        for handle in &self.fields {
            let key = handle.key();
            match (&handle.value, handle.descriptor.kind) {
                (FieldValue::Flag(flag), _) => widget.set(key, Value::Bool(*flag)),
                (FieldValue::Mappings(list), _) => {
                    let kept: Vec<Value> = list
                        .iter()
                        .filter(|m| !m.field.trim().is_empty() && !m.label.trim().is_empty())
                        .map(|m| {
                            serde_json::json!({
                                "field": m.field.trim(),
                                "label": m.label.trim(),
                            })
                        })
                        .collect();
                    if kept.is_empty() {
                        widget.settings.remove(key);
                    } else {
                        widget.set(key, Value::Array(kept));
                    }
                }
                (FieldValue::Text(text), FieldKind::List) => {
                    let items = split_list(text);
                    if items.is_empty() {
                        widget.settings.remove(key);
                    } else {
                        widget.set(
                            key,
                            Value::Array(items.into_iter().map(Value::String).collect()),
                        );
                    }
                }
                (FieldValue::Text(text), _) => {
                    let trimmed = text.trim();
                    if trimmed.is_empty() {
                        widget.settings.remove(key);
                    } else {
                        widget.set(key, Value::String(trimmed.to_string()));
                    }
                }
            }
        }
        widget
    }
}

/// `cpu=CPU, mem=Memory` → mappings
pub fn parse_mappings(raw: &str) -> Result<Vec<FieldMapping>> {
    split_list(raw)
        .into_iter()
        .map(|pair| {
            let (field, label) = pair.split_once('=').ok_or_else(|| {
                AdminError::validation(format!(
                    "Invalid mapping '{}', expected field=label",
                    pair
                ))
            })?;
            Ok(FieldMapping {
                field: field.trim().to_string(),
                label: label.trim().to_string(),
            })
        })
        .collect()
}
