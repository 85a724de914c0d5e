//! Dashboard controller
//!
//! Owns the configuration state and wires the client, editor, reorder
//! controller and preview together. Every mutation is one request followed
//! by a full reload; failures end up as toasts and leave the last good
//! state on screen. Authentication failures are not toasted: the client has
//! already requested a login.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info};

use crate::client::ApiClient;
use crate::editor::{ServiceEditor, toggle_hidden};
use crate::errors::{AdminError, Result};
use crate::models::{Configuration, MoveServicePayload, ServiceOrderPayload, ServicePayload};
use crate::notify::Notifier;
use crate::preview::LivePreview;
use crate::render::{DashboardView, render};
use crate::reorder::{DropEvent, DropPlan, ReorderController};
use crate::state::ConfigState;

pub struct Dashboard {
    client: ApiClient,
    state: ConfigState,
    notifier: Notifier,
    reorder: ReorderController,
    preview: LivePreview,
    editor: Option<ServiceEditor>,
}

impl Dashboard {
    pub fn new(client: ApiClient, notifier: Notifier) -> Self {
        let preview = LivePreview::new(client.session().clone());
        Self {
            client,
            state: ConfigState::new(),
            notifier,
            reorder: ReorderController::new(),
            preview,
            editor: None,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn configuration(&self) -> &Configuration {
        self.state.configuration()
    }

    pub fn state(&self) -> &ConfigState {
        &self.state
    }

    pub fn view(&self) -> DashboardView {
        render(self.state.configuration())
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    pub fn reorder(&self) -> &ReorderController {
        &self.reorder
    }

    pub fn preview(&self) -> &LivePreview {
        &self.preview
    }

    /// Preview plus the notifier its operations report to
    pub fn preview_parts(&mut self) -> (&mut LivePreview, &mut Notifier) {
        (&mut self.preview, &mut self.notifier)
    }

    pub fn editor(&self) -> Option<&ServiceEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut ServiceEditor> {
        self.editor.as_mut()
    }

    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }

    fn report(&mut self, err: &AdminError, fallback: &str) {
        if err.is_unauthorized() {
            debug!("{} (login required)", fallback);
            return;
        }
        self.notifier.error(err.user_message(fallback));
    }

    /// Fetch the whole configuration and replace the local state.
    ///
    /// Drag bindings are recreated from scratch. On failure the previous
    /// state stays visible.
    pub async fn load_configuration(&mut self) -> bool {
        match self.client.services().all().await {
            Ok(configuration) => {
                info!(
                    "Loaded {} categories, {} services",
                    configuration.category_count(),
                    configuration.total_services()
                );
                self.state.replace(configuration);
                self.reorder.rebind(self.state.configuration());
                true
            }
            Err(e) => {
                self.report(&e, "Failed to load configuration");
                false
            }
        }
    }

    async fn finish(&mut self, result: Result<()>, success: &str, failure: &str) -> bool {
        match result {
            Ok(()) => {
                self.notifier.success(success);
                self.load_configuration().await;
                true
            }
            Err(e) => {
                self.report(&e, failure);
                false
            }
        }
    }

    pub async fn add_category(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let result = self.client.categories().create(name).await.map(|_| ());
        self.finish(result, "Category added successfully", "Failed to add category")
            .await
    }

    /// No request when the new name is blank or unchanged
    pub async fn rename_category(&mut self, old_name: &str, new_name: &str) -> bool {
        let new_name = new_name.trim();
        if new_name.is_empty() || new_name == old_name {
            return false;
        }
        let result = self
            .client
            .categories()
            .rename(old_name, new_name)
            .await
            .map(|_| ());
        self.finish(result, "Category renamed successfully", "Failed to rename category")
            .await
    }

    /// Removes the category and all of its services
    pub async fn delete_category(&mut self, name: &str) -> bool {
        let result = self.client.categories().delete(name).await.map(|_| ());
        self.finish(result, "Category deleted successfully", "Failed to delete category")
            .await
    }

    pub fn begin_add_service(&mut self, category: &str) -> &mut ServiceEditor {
        let categories = self.state.configuration().category_names();
        self.editor.insert(ServiceEditor::add(category, categories))
    }

    pub async fn begin_edit_service(&mut self, category: &str, name: &str) -> bool {
        match self.client.services().get(category, name).await {
            Ok(record) => {
                let categories = self.state.configuration().category_names();
                self.editor = Some(ServiceEditor::edit(&record, categories));
                true
            }
            Err(e) => {
                self.report(&e, "Failed to load service");
                false
            }
        }
    }

    /// Submit the open editor.
    ///
    /// Validation failures come back as `Err(Validation)` without any request
    /// or toast so the form can show them inline. Request failures are
    /// toasted and the editor stays open.
    pub async fn save_service(&mut self) -> Result<()> {
        let editor = self
            .editor
            .as_ref()
            .ok_or_else(|| AdminError::validation("No service is being edited"))?;
        let payload = editor.build_payload()?;

        let result = match editor.mode().clone() {
            crate::editor::EditorMode::Add => self.client.services().create(&payload).await,
            crate::editor::EditorMode::Edit {
                original_category,
                original_name,
            } => {
                self.client
                    .services()
                    .update(&original_category, &original_name, &payload)
                    .await
            }
        };
        let was_edit = self.editor.as_ref().is_some_and(ServiceEditor::is_edit);

        match result {
            Ok(_) => {
                self.editor = None;
                self.notifier.success(if was_edit {
                    "Service updated successfully"
                } else {
                    "Service added successfully"
                });
                self.load_configuration().await;
                Ok(())
            }
            Err(e) => {
                self.report(&e, "Failed to save service");
                Err(e)
            }
        }
    }

    pub async fn delete_service(&mut self, category: &str, name: &str) -> bool {
        let result = self.client.services().delete(category, name).await.map(|_| ());
        self.finish(result, "Service deleted successfully", "Failed to delete service")
            .await
    }

    /// Flip `hidden` on the stored config; showing also clears
    /// `healthCheckDisabled`
    pub async fn toggle_service_visibility(&mut self, category: &str, name: &str) -> bool {
        let result: Result<bool> = async {
            let record = self.client.services().get(category, name).await?;
            let (config, hidden) = toggle_hidden(&record.config);
            let payload = ServicePayload {
                name: name.to_string(),
                category: category.to_string(),
                config,
            };
            self.client
                .services()
                .update(category, name, &payload)
                .await?;
            Ok(hidden)
        }
        .await;

        match result {
            Ok(hidden) => {
                let state = if hidden { "hidden" } else { "shown" };
                self.finish(
                    Ok(()),
                    &format!("Service {} successfully", state),
                    "Failed to toggle service visibility",
                )
                .await
            }
            Err(e) => {
                self.report(&e, "Failed to toggle service visibility");
                false
            }
        }
    }

    /// Upload a `services.yaml` replacing the backend configuration
    pub async fn import_configuration(&mut self, path: &Path) -> bool {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                self.notifier.error(format!(
                    "Cannot read {}: {}",
                    path.display(),
                    e
                ));
                return false;
            }
        };
        let filename = file_name(path, "services.yaml");
        match self.client.config_io().import(&filename, &data).await {
            Ok(summary) => {
                self.notifier.success(format!(
                    "Configuration imported successfully! {} categories, {} services",
                    summary.categories, summary.services
                ));
                self.load_configuration().await;
                true
            }
            Err(e) => {
                self.report(&e, "Failed to import configuration");
                false
            }
        }
    }

    /// Download `services.yaml` to `destination`
    pub async fn export_configuration(&mut self, destination: &Path) -> Option<PathBuf> {
        let result = async {
            let data = self.client.config_io().export().await?;
            std::fs::write(destination, data)?;
            Ok::<_, AdminError>(destination.to_path_buf())
        }
        .await;
        match result {
            Ok(path) => {
                self.notifier
                    .success(format!("Configuration exported to {}", path.display()));
                Some(path)
            }
            Err(e) => {
                self.report(&e, "Failed to export configuration");
                None
            }
        }
    }

    pub async fn backup_configuration(&mut self) -> Option<String> {
        match self.client.config_io().backup().await {
            Ok(summary) => {
                let file = summary.backup_file.unwrap_or_default();
                self.notifier.success(format!("Backup created: {}", file));
                Some(file)
            }
            Err(e) => {
                self.report(&e, "Failed to create backup");
                None
            }
        }
    }

    pub fn set_drag_enabled(&mut self, enabled: bool) {
        self.reorder.set_drag_enabled(enabled);
    }

    pub fn toggle_drag_mode(&mut self) -> bool {
        self.reorder.toggle_drag()
    }

    pub fn refresh_preview(&mut self) {
        self.preview.refresh(Utc::now(), &mut self.notifier);
    }

    pub async fn probe_preview(&mut self) -> bool {
        let transport = self.client.transport().clone();
        self.preview
            .probe(transport.as_ref(), &mut self.notifier)
            .await
    }

    /// Persist a drag-and-drop result.
    ///
    /// On success the state is replaced by the configuration rearranged to
    /// the dropped layout and the preview is refreshed. On failure the
    /// configuration is reloaded so the board shows the server's order again.
    pub async fn drop_item(&mut self, event: DropEvent) -> bool {
        let Some(plan) = self.reorder.handle_drop(event) else {
            return false;
        };
        self.persist_plan(plan).await
    }

    /// Set the whole category order at once (`category reorder`).
    ///
    /// `order` must name every current category exactly once.
    pub async fn set_category_order(&mut self, order: Vec<String>) -> bool {
        let current = self.reorder.layout().categories().to_vec();
        if !same_members(&current, &order) {
            self.notifier.error(format!(
                "Category order must list every category exactly once: {}",
                current.join(", ")
            ));
            return false;
        }
        if current == order {
            return true;
        }
        let mut layout = self.reorder.layout().clone();
        layout.set_categories(order.clone());
        self.persist_plan(DropPlan::CategoryOrder { order, layout })
            .await
    }

    /// Set the whole service order of one category (`service reorder`)
    pub async fn set_service_order(&mut self, category: &str, order: Vec<String>) -> bool {
        if !self.configuration().contains_category(category) {
            self.notifier
                .error(format!("Category '{}' not found", category));
            return false;
        }
        let current = self.reorder.layout().services_of(category).to_vec();
        if !same_members(&current, &order) {
            self.notifier.error(format!(
                "Service order must list every service of '{}' exactly once: {}",
                category,
                current.join(", ")
            ));
            return false;
        }
        if current == order {
            return true;
        }
        let mut layout = self.reorder.layout().clone();
        layout.set_services(category, order.clone());
        self.persist_plan(DropPlan::ServiceOrder {
            category: category.to_string(),
            order,
            layout,
        })
        .await
    }

    async fn persist_plan(&mut self, plan: DropPlan) -> bool {
        match self.apply_plan(&plan).await {
            Ok(message) => {
                let arranged = self.state.configuration().arranged_by(plan.layout());
                self.state.replace(arranged);
                self.reorder.rebind(self.state.configuration());
                self.notifier.success(message);
                self.preview.refresh_if_configured(Utc::now());
                true
            }
            Err((e, fallback)) => {
                self.report(&e, fallback);
                // 重新加载也可能失败，先让拖拽布局回到当前显示的状态
                self.reorder.rebind(self.state.configuration());
                if !e.is_unauthorized() {
                    self.load_configuration().await;
                }
                false
            }
        }
    }

    async fn apply_plan(
        &self,
        plan: &DropPlan,
    ) -> std::result::Result<String, (AdminError, &'static str)> {
        match plan {
            DropPlan::CategoryOrder { order, .. } => {
                self.client
                    .categories()
                    .reorder(order)
                    .await
                    .map_err(|e| (e, "Failed to reorder categories"))?;
                Ok("Categories reordered successfully".to_string())
            }
            DropPlan::ServiceOrder {
                category, order, ..
            } => {
                let payload = ServiceOrderPayload {
                    category: category.clone(),
                    service_order: order.clone(),
                };
                self.client
                    .services()
                    .reorder(&payload)
                    .await
                    .map_err(|e| (e, "Failed to reorder services"))?;
                Ok("Services reordered successfully".to_string())
            }
            DropPlan::Move {
                service,
                from_category,
                to_category,
                destination_order,
                ..
            } => {
                let failed = "Failed to move service";
                let payload = MoveServicePayload {
                    service_name: service.clone(),
                    from_category: from_category.clone(),
                    to_category: to_category.clone(),
                };
                self.client
                    .services()
                    .move_service(&payload)
                    .await
                    .map_err(|e| (e, failed))?;
                let order = ServiceOrderPayload {
                    category: to_category.clone(),
                    service_order: destination_order.clone(),
                };
                self.client
                    .services()
                    .reorder(&order)
                    .await
                    .map_err(|e| (e, failed))?;
                Ok(format!("Moved \"{}\" to \"{}\"", service, to_category))
            }
        }
    }
}

fn same_members(current: &[String], requested: &[String]) -> bool {
    let mut a: Vec<&String> = current.iter().collect();
    let mut b: Vec<&String> = requested.iter().collect();
    a.sort();
    b.sort();
    a == b
}

pub(crate) fn file_name(path: &Path, fallback: &str) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(fallback)
        .to_string()
}
