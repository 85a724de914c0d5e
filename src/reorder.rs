//! Drag-and-drop reorder controller
//!
//! A [`ReorderController`] owns one [`SortableBinding`] for the category list
//! and one per category's service list. Bindings are torn down and recreated
//! on every [`ReorderController::rebind`], so repeated reloads never stack up
//! duplicate bindings. A drop produces a [`DropPlan`]: the backend calls to
//! make plus the layout to adopt once they succeed. The controller's own
//! layout only follows the rendered configuration through `rebind`.

use indexmap::IndexMap;
use tracing::debug;

use crate::models::Configuration;

/// Display order of categories and of the services inside each category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardLayout {
    categories: Vec<String>,
    services: IndexMap<String, Vec<String>>,
}

impl BoardLayout {
    pub fn from_configuration(config: &Configuration) -> Self {
        let services: IndexMap<String, Vec<String>> = config
            .iter()
            .map(|(category, list)| {
                (
                    category.clone(),
                    list.iter().map(|s| s.name.clone()).collect(),
                )
            })
            .collect();
        Self {
            categories: services.keys().cloned().collect(),
            services,
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn services_of(&self, category: &str) -> &[String] {
        self.services
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn set_categories(&mut self, order: Vec<String>) {
        self.categories = order;
    }

    pub fn set_services(&mut self, category: &str, order: Vec<String>) {
        self.services.insert(category.to_string(), order);
    }

    pub fn total_services(&self) -> usize {
        self.services.values().map(Vec::len).sum()
    }
}

/// Which list a binding drives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortableList {
    Categories,
    Services(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortableBinding {
    pub id: u64,
    pub list: SortableList,
    pub disabled: bool,
}

/// A completed drag gesture, expressed as positions in the current layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropEvent {
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

/// Backend synchronization required by a drop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropPlan {
    /// `POST /api/categories/reorder`
    CategoryOrder {
        order: Vec<String>,
        layout: BoardLayout,
    },
    /// `POST /api/services/reorder`
    ServiceOrder {
        category: String,
        order: Vec<String>,
        layout: BoardLayout,
    },
    /// `POST /api/services/move`, then a reorder of the destination list
    Move {
        service: String,
        from_category: String,
        to_category: String,
        destination_order: Vec<String>,
        layout: BoardLayout,
    },
}

impl DropPlan {
    /// Layout the UI should show once the plan has been applied
    pub fn layout(&self) -> &BoardLayout {
        match self {
            DropPlan::CategoryOrder { layout, .. }
            | DropPlan::ServiceOrder { layout, .. }
            | DropPlan::Move { layout, .. } => layout,
        }
    }
}

#[derive(Debug)]
pub struct ReorderController {
    bindings: Vec<SortableBinding>,
    layout: BoardLayout,
    drag_enabled: bool,
    next_id: u64,
}

impl Default for ReorderController {
    fn default() -> Self {
        Self::new()
    }
}

impl ReorderController {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            layout: BoardLayout::default(),
            drag_enabled: true,
            next_id: 1,
        }
    }

    /// Drop every existing binding and create fresh ones for `config`.
    ///
    /// The category binding exists only when there is at least one category.
    pub fn rebind(&mut self, config: &Configuration) {
        self.destroy();
        self.layout = BoardLayout::from_configuration(config);
        let disabled = !self.drag_enabled;

        if !self.layout.categories.is_empty() {
            let id = self.allocate_id();
            self.bindings.push(SortableBinding {
                id,
                list: SortableList::Categories,
                disabled,
            });
        }
        for category in self.layout.categories.clone() {
            let id = self.allocate_id();
            self.bindings.push(SortableBinding {
                id,
                list: SortableList::Services(category),
                disabled,
            });
        }
        debug!("Rebound {} sortable lists", self.bindings.len());
    }

    pub fn destroy(&mut self) {
        self.bindings.clear();
    }

    pub fn bindings(&self) -> &[SortableBinding] {
        &self.bindings
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    /// Disable or enable every binding without destroying it
    pub fn set_drag_enabled(&mut self, enabled: bool) {
        self.drag_enabled = enabled;
        for binding in &mut self.bindings {
            binding.disabled = !enabled;
        }
    }

    pub fn toggle_drag(&mut self) -> bool {
        self.set_drag_enabled(!self.drag_enabled);
        self.drag_enabled
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn binding_for(&self, list: &SortableList) -> Option<&SortableBinding> {
        self.bindings.iter().find(|b| &b.list == list)
    }

    /// Translate a drop into the calls needed to persist it.
    ///
    /// Returns `None` when dragging is disabled, the positions do not match
    /// the current layout, or the item was dropped where it started. The
    /// controller's layout is left untouched until the caller rebinds.
    pub fn handle_drop(&self, event: DropEvent) -> Option<DropPlan> {
        if !self.drag_enabled {
            return None;
        }

        let plan = match event {
            DropEvent::Category { from, to } => {
                self.binding_for(&SortableList::Categories)?;
                let order = move_within(&self.layout.categories, from, to)?;
                let mut layout = self.layout.clone();
                layout.set_categories(order.clone());
                DropPlan::CategoryOrder { order, layout }
            }
            DropEvent::Service {
                from_category,
                from,
                to_category,
                to,
            } => {
                self.binding_for(&SortableList::Services(from_category.clone()))?;
                self.binding_for(&SortableList::Services(to_category.clone()))?;

                if from_category == to_category {
                    let current = self.layout.services_of(&from_category);
                    let order = move_within(current, from, to)?;
                    let mut layout = self.layout.clone();
                    layout.set_services(&from_category, order.clone());
                    DropPlan::ServiceOrder {
                        category: from_category,
                        order,
                        layout,
                    }
                } else {
                    let mut source = self.layout.services_of(&from_category).to_vec();
                    let mut destination = self.layout.services_of(&to_category).to_vec();
                    if from >= source.len() || to > destination.len() {
                        return None;
                    }
                    let service = source.remove(from);
                    destination.insert(to, service.clone());

                    let mut layout = self.layout.clone();
                    layout.set_services(&from_category, source);
                    layout.set_services(&to_category, destination.clone());
                    DropPlan::Move {
                        service,
                        from_category,
                        to_category,
                        destination_order: destination,
                        layout,
                    }
                }
            }
        };

        debug_assert_eq!(plan.layout().total_services(), self.layout.total_services());
        Some(plan)
    }
}

fn move_within(items: &[String], from: usize, to: usize) -> Option<Vec<String>> {
    if from >= items.len() || to >= items.len() || from == to {
        return None;
    }
    let mut order = items.to_vec();
    let item = order.remove(from);
    order.insert(to, item);
    Some(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Service, ServiceConfig};

    fn config() -> Configuration {
        let svc = |n: &str| Service {
            name: n.to_string(),
            config: ServiceConfig::default(),
        };
        Configuration::new()
            .with_category("Media", vec![svc("Emby"), svc("Jellyfin"), svc("Plex")])
            .with_category("Downloads", vec![svc("qB")])
            .with_category("Empty", vec![])
    }

    #[test]
    fn test_rebind_replaces_bindings() {
        let mut controller = ReorderController::new();
        controller.rebind(&config());
        assert_eq!(controller.bindings().len(), 4);
        controller.rebind(&config());
        assert_eq!(controller.bindings().len(), 4);
        assert!(controller.bindings().iter().all(|b| b.id > 4));
    }

    #[test]
    fn test_rebind_empty_configuration_has_no_category_binding() {
        let mut controller = ReorderController::new();
        controller.rebind(&Configuration::new());
        assert!(controller.bindings().is_empty());
        assert!(
            controller
                .handle_drop(DropEvent::Category { from: 0, to: 1 })
                .is_none()
        );
    }

    #[test]
    fn test_category_drop() {
        let mut controller = ReorderController::new();
        controller.rebind(&config());
        let plan = controller
            .handle_drop(DropEvent::Category { from: 2, to: 0 })
            .unwrap();
        match plan {
            DropPlan::CategoryOrder { order, .. } => {
                assert_eq!(order, vec!["Empty", "Media", "Downloads"])
            }
            other => panic!("unexpected plan {:?}", other),
        }
        // 布局只在 rebind 后更新
        assert_eq!(controller.layout().categories()[0], "Media");
    }

    #[test]
    fn test_service_drop_within_list() {
        let mut controller = ReorderController::new();
        controller.rebind(&config());
        let plan = controller
            .handle_drop(DropEvent::Service {
                from_category: "Media".into(),
                from: 0,
                to_category: "Media".into(),
                to: 2,
            })
            .unwrap();
        assert_eq!(
            plan,
            DropPlan::ServiceOrder {
                category: "Media".into(),
                order: vec!["Jellyfin".into(), "Plex".into(), "Emby".into()],
                layout: {
                    let mut layout = controller.layout().clone();
                    layout.set_services(
                        "Media",
                        vec!["Jellyfin".into(), "Plex".into(), "Emby".into()],
                    );
                    layout
                },
            }
        );
    }

    #[test]
    fn test_move_across_lists_preserves_membership() {
        let mut controller = ReorderController::new();
        controller.rebind(&config());
        let before = controller.layout().total_services();
        let plan = controller
            .handle_drop(DropEvent::Service {
                from_category: "Media".into(),
                from: 1,
                to_category: "Empty".into(),
                to: 0,
            })
            .unwrap();
        match &plan {
            DropPlan::Move {
                service,
                from_category,
                to_category,
                destination_order,
                layout,
            } => {
                assert_eq!(service, "Jellyfin");
                assert_eq!(from_category, "Media");
                assert_eq!(to_category, "Empty");
                assert_eq!(destination_order, &vec!["Jellyfin".to_string()]);
                assert_eq!(layout.services_of("Media"), ["Emby", "Plex"]);
            }
            other => panic!("unexpected plan {:?}", other),
        }
        assert_eq!(plan.layout().total_services(), before);
    }

    #[test]
    fn test_disabled_drag_ignores_drops_and_survives_rebind() {
        let mut controller = ReorderController::new();
        controller.rebind(&config());
        controller.set_drag_enabled(false);
        assert!(controller.bindings().iter().all(|b| b.disabled));
        assert!(
            controller
                .handle_drop(DropEvent::Category { from: 0, to: 1 })
                .is_none()
        );

        controller.rebind(&config());
        assert!(controller.bindings().iter().all(|b| b.disabled));
        assert!(controller.toggle_drag());
        assert!(controller.bindings().iter().all(|b| !b.disabled));
    }

    #[test]
    fn test_out_of_range_and_noop_drops() {
        let mut controller = ReorderController::new();
        controller.rebind(&config());
        assert!(
            controller
                .handle_drop(DropEvent::Category { from: 1, to: 1 })
                .is_none()
        );
        assert!(
            controller
                .handle_drop(DropEvent::Service {
                    from_category: "Downloads".into(),
                    from: 5,
                    to_category: "Media".into(),
                    to: 0,
                })
                .is_none()
        );
        assert!(
            controller
                .handle_drop(DropEvent::Service {
                    from_category: "Nope".into(),
                    from: 0,
                    to_category: "Media".into(),
                    to: 0,
                })
                .is_none()
        );
    }
}
