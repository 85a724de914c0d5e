//! Service commands: list, show, add, edit, delete, visibility, ordering

use colored::Colorize;

use super::helpers::{confirm, parse_key_value};
use crate::cli::ServiceFields;
use crate::editor::ServiceEditor;
use crate::interfaces::cli::{CliContext, CliError};
use crate::models::WidgetKind;
use crate::render::BadgeKind;
use crate::reorder::DropEvent;

async fn load(ctx: &mut CliContext) -> Result<(), CliError> {
    let ok = ctx.dashboard.load_configuration().await;
    if ok {
        // 加载成功的提示对 CLI 没有意义
        ctx.dashboard.notifier_mut().drain();
        Ok(())
    } else {
        ctx.finish(false, "Failed to load configuration")
    }
}

pub async fn list_services(ctx: &mut CliContext, json: bool) -> Result<(), CliError> {
    load(ctx).await?;

    if json {
        let output = serde_json::to_string_pretty(ctx.dashboard.configuration())
            .map_err(|e| CliError::CommandError(e.to_string()))?;
        println!("{}", output);
        return Ok(());
    }

    let view = ctx.dashboard.view();
    if let Some(message) = view.empty_message {
        println!("{} {}", "ℹ".bold().blue(), message);
        return Ok(());
    }

    for category in &view.categories {
        println!("{}", category.name.bold().green());
        if let Some(hint) = category.empty_hint {
            println!("  {}", hint.dimmed());
        }
        for card in &category.services {
            let mut parts = vec![format!(
                "{} -> {}",
                card.name.cyan(),
                card.href.blue().underline()
            )];
            for badge in &card.badges {
                let text = format!("[{}]", badge.label);
                parts.push(match badge.kind {
                    BadgeKind::Widget => text.magenta().to_string(),
                    BadgeKind::Container => text.dimmed().to_string(),
                    BadgeKind::Hidden => text.yellow().to_string(),
                });
            }
            println!("  {}", parts.join(" "));
        }
        println!();
    }
    println!(
        "{} Total {} categories, {} services",
        "ℹ".bold().blue(),
        view.categories.len().to_string().green(),
        view.total_services().to_string().green()
    );
    Ok(())
}

pub async fn show_service(ctx: &mut CliContext, category: &str, name: &str) -> Result<(), CliError> {
    let record = ctx.client().services().get(category, name).await?;
    println!(
        "{} {} {}",
        record.category.bold().green(),
        "/".dimmed(),
        record.name.cyan()
    );
    let output = serde_json::to_string_pretty(&record.config)
        .map_err(|e| CliError::CommandError(e.to_string()))?;
    println!("{}", output);
    Ok(())
}

/// Apply command-line flags on top of the editor's current values
fn apply_fields(editor: &mut ServiceEditor, fields: ServiceFields) -> Result<(), CliError> {
    let health_values_given =
        fields.ping.is_some() || fields.server.is_some() || fields.container.is_some();

    if let Some(icon) = fields.icon {
        editor.icon = icon;
    }
    if let Some(href) = fields.href {
        editor.href = href;
    }
    if let Some(display) = fields.display {
        editor.display = display;
    }
    if let Some(show_stats) = fields.show_stats {
        editor.show_stats = show_stats;
    }
    if let Some(ping) = fields.ping {
        editor.ping = ping;
    }
    if let Some(server) = fields.server {
        editor.server = server;
    }
    if let Some(container) = fields.container {
        editor.container = container;
    }
    match fields.health_check {
        Some(enabled) => editor.set_health_check(enabled),
        None if health_values_given => editor.set_health_check(true),
        None => {}
    }

    if let Some(widget_type) = fields.widget {
        if widget_type.trim().eq_ignore_ascii_case("none") {
            editor.set_widget_kind(None);
        } else {
            let kind = WidgetKind::parse_tag(&widget_type).map_err(CliError::ParseError)?;
            editor.set_widget_kind(Some(kind));
        }
    }

    if fields.widget_fields.is_empty() && fields.mappings.is_empty() {
        return Ok(());
    }
    let widget = editor.widget_mut().ok_or_else(|| {
        CliError::ParseError("Widget fields given but the service has no widget (use --widget)".into())
    })?;

    for raw in &fields.widget_fields {
        let (key, value) = parse_key_value(raw)?;
        widget.set_text(&key, value)?;
    }

    if !fields.mappings.is_empty() {
        if widget.kind() != WidgetKind::CustomApi {
            return Err(CliError::ParseError(
                "--mapping only applies to customapi widgets".to_string(),
            ));
        }
        while !widget.mappings().is_empty() {
            widget.remove_mapping(0);
        }
        for raw in &fields.mappings {
            let (field, label) = parse_key_value(raw)?;
            widget.add_mapping(&field, &label);
        }
    }
    Ok(())
}

async fn save(ctx: &mut CliContext) -> Result<(), CliError> {
    match ctx.dashboard.save_service().await {
        Ok(()) => ctx.finish(true, ""),
        Err(e) if e.is_unauthorized() => ctx.finish(false, "Failed to save service"),
        Err(crate::errors::AdminError::Validation(msg)) => Err(CliError::ParseError(msg)),
        Err(_) => ctx.finish(false, "Failed to save service"),
    }
}

pub async fn add_service(
    ctx: &mut CliContext,
    category: &str,
    name: &str,
    fields: ServiceFields,
) -> Result<(), CliError> {
    load(ctx).await?;
    let editor = ctx.dashboard.begin_add_service(category);
    editor.name = name.to_string();
    apply_fields(editor, fields)?;
    save(ctx).await
}

pub async fn edit_service(
    ctx: &mut CliContext,
    category: &str,
    name: &str,
    new_name: Option<String>,
    new_category: Option<String>,
    fields: ServiceFields,
) -> Result<(), CliError> {
    load(ctx).await?;
    if !ctx.dashboard.begin_edit_service(category, name).await {
        return ctx.finish(false, "Failed to load service");
    }
    let editor = ctx
        .dashboard
        .editor_mut()
        .ok_or_else(|| CliError::CommandError("Editor not available".to_string()))?;
    if let Some(new_name) = new_name {
        editor.name = new_name;
    }
    if let Some(new_category) = new_category {
        editor.category = new_category;
    }
    apply_fields(editor, fields)?;
    save(ctx).await
}

pub async fn delete_service(
    ctx: &mut CliContext,
    category: &str,
    name: &str,
    yes: bool,
) -> Result<(), CliError> {
    if !yes && !confirm(&format!("Delete service '{}' from '{}'?", name, category))? {
        println!("{}", "Aborted.".red());
        return Ok(());
    }
    let ok = ctx.dashboard.delete_service(category, name).await;
    ctx.finish(ok, "Failed to delete service")
}

pub async fn toggle_hidden(ctx: &mut CliContext, category: &str, name: &str) -> Result<(), CliError> {
    let ok = ctx.dashboard.toggle_service_visibility(category, name).await;
    ctx.finish(ok, "Failed to toggle service visibility")
}

pub async fn reorder_services(
    ctx: &mut CliContext,
    category: &str,
    names: Vec<String>,
) -> Result<(), CliError> {
    load(ctx).await?;
    let ok = ctx.dashboard.set_service_order(category, names).await;
    ctx.finish(ok, "Failed to reorder services")
}

pub async fn move_service(
    ctx: &mut CliContext,
    category: &str,
    name: &str,
    to_category: &str,
    position: Option<usize>,
) -> Result<(), CliError> {
    load(ctx).await?;
    let layout = ctx.dashboard.reorder().layout();
    if !layout.categories().iter().any(|c| c == to_category) {
        return Err(CliError::CommandError(format!(
            "Category '{}' not found",
            to_category
        )));
    }
    let from = layout
        .services_of(category)
        .iter()
        .position(|s| s == name)
        .ok_or_else(|| {
            CliError::CommandError(format!("Service '{}' not found in '{}'", name, category))
        })?;

    let event = if category == to_category {
        let last = layout.services_of(category).len().saturating_sub(1);
        DropEvent::Service {
            from_category: category.to_string(),
            from,
            to_category: to_category.to_string(),
            to: position.unwrap_or(last).min(last),
        }
    } else {
        let len = layout.services_of(to_category).len();
        DropEvent::Service {
            from_category: category.to_string(),
            from,
            to_category: to_category.to_string(),
            to: position.unwrap_or(len).min(len),
        }
    };

    let ok = ctx.dashboard.drop_item(event).await;
    if !ok && ctx.dashboard.notifier().is_empty() && !ctx.session.login_requested() {
        println!("{} Nothing to move", "ℹ".bold().blue());
        return Ok(());
    }
    ctx.finish(ok, "Failed to move service")
}
