//! Configuration → view model. Pure; the CLI prints it and the TUI draws it.

use crate::models::{Configuration, Service};

pub const EMPTY_CONFIGURATION: &str =
    "No categories yet. Run `category add <name>` or press [c] in the TUI to get started!";
pub const EMPTY_CATEGORY: &str = "No services in this category";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Widget,
    Container,
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub kind: BadgeKind,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCard {
    pub name: String,
    pub category: String,
    /// Shown when there is no icon (or it fails to load)
    pub initial: String,
    pub icon: Option<String>,
    pub href: String,
    pub hidden: bool,
    pub badges: Vec<Badge>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub name: String,
    pub services: Vec<ServiceCard>,
    pub empty_hint: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardView {
    pub categories: Vec<CategoryView>,
    pub empty_message: Option<&'static str>,
}

impl DashboardView {
    pub fn total_services(&self) -> usize {
        self.categories.iter().map(|c| c.services.len()).sum()
    }
}

pub fn render(config: &Configuration) -> DashboardView {
    if config.is_empty() {
        return DashboardView {
            categories: Vec::new(),
            empty_message: Some(EMPTY_CONFIGURATION),
        };
    }

    let categories = config
        .iter()
        .map(|(name, services)| CategoryView {
            name: name.clone(),
            services: services.iter().map(|s| service_card(name, s)).collect(),
            empty_hint: services.is_empty().then_some(EMPTY_CATEGORY),
        })
        .collect();

    DashboardView {
        categories,
        empty_message: None,
    }
}

fn service_card(category: &str, service: &Service) -> ServiceCard {
    let config = &service.config;
    let mut badges = Vec::new();
    if let Some(widget) = &config.widget {
        badges.push(Badge {
            kind: BadgeKind::Widget,
            label: widget.widget_type.clone(),
        });
    }
    if let Some(container) = config.container.as_deref().filter(|c| !c.is_empty()) {
        badges.push(Badge {
            kind: BadgeKind::Container,
            label: container.to_string(),
        });
    }
    if config.is_hidden() {
        badges.push(Badge {
            kind: BadgeKind::Hidden,
            label: "hidden".to_string(),
        });
    }

    ServiceCard {
        name: service.name.clone(),
        category: category.to_string(),
        initial: service
            .name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string()),
        icon: config.icon.clone().filter(|i| !i.is_empty()),
        href: config
            .href
            .clone()
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| "#".to_string()),
        hidden: config.is_hidden(),
        badges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ServiceConfig, WidgetConfig};

    #[test]
    fn test_empty_configuration_placeholder() {
        let view = render(&Configuration::new());
        assert_eq!(view.empty_message, Some(EMPTY_CONFIGURATION));
        assert!(EMPTY_CONFIGURATION.contains("category add"));
        assert!(!EMPTY_CONFIGURATION.contains("Click"));
        assert!(view.categories.is_empty());
    }

    #[test]
    fn test_service_card_fields() {
        let service = Service {
            name: "emby".into(),
            config: ServiceConfig {
                container: Some("emby-server".into()),
                widget: Some(WidgetConfig::new("emby")),
                hidden: Some(true),
                ..Default::default()
            },
        };
        let config = Configuration::new()
            .with_category("Media", vec![service])
            .with_category("Empty", vec![]);
        let view = render(&config);

        let card = &view.categories[0].services[0];
        assert_eq!(card.initial, "E");
        assert_eq!(card.href, "#");
        assert!(card.hidden);
        let labels: Vec<&str> = card.badges.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["emby", "emby-server", "hidden"]);

        assert_eq!(view.categories[1].empty_hint, Some(EMPTY_CATEGORY));
        assert_eq!(view.total_services(), 1);
    }
}
