//! Bookmark commands

use std::path::Path;

use colored::Colorize;

use super::helpers::confirm;
use crate::errors::AdminError;
use crate::interfaces::cli::{CliContext, CliError};

pub async fn list_bookmarks(ctx: &mut CliContext) -> Result<(), CliError> {
    let (manager, notifier) = ctx.bookmark_parts();
    let ok = manager.load(notifier).await;
    if !ok {
        return ctx.finish(false, "Failed to load bookmarks");
    }

    let groups = ctx.bookmarks.groups();
    if groups.is_empty() {
        println!("{} No bookmark groups yet", "ℹ".bold().blue());
        return Ok(());
    }
    for group in groups {
        println!("{}", group.name.bold().green());
        if group.bookmarks.is_empty() {
            println!("  {}", "No bookmarks in this group".dimmed());
        }
        for bookmark in &group.bookmarks {
            let mut line = format!(
                "{} -> {}",
                bookmark.name.cyan(),
                bookmark.href.blue().underline()
            );
            if let Some(description) = bookmark.description.as_deref().filter(|d| !d.is_empty()) {
                line.push_str(&format!(" {}", format!("({})", description).dimmed()));
            }
            println!("  {}", line);
        }
        println!();
    }
    println!(
        "{} Total {} groups, {} bookmarks",
        "ℹ".bold().blue(),
        groups.len().to_string().green(),
        ctx.bookmarks.total_bookmarks().to_string().green()
    );
    Ok(())
}

async fn save(ctx: &mut CliContext) -> Result<(), CliError> {
    let (manager, notifier) = ctx.bookmark_parts();
    match manager.save(notifier).await {
        Ok(()) => ctx.finish(true, ""),
        Err(AdminError::Validation(msg)) => Err(CliError::ParseError(msg)),
        Err(_) => ctx.finish(false, "Failed to save bookmark"),
    }
}

pub async fn add_bookmark(
    ctx: &mut CliContext,
    group: &str,
    name: String,
    href: String,
    icon: Option<String>,
    description: Option<String>,
) -> Result<(), CliError> {
    let editor = ctx.bookmarks.begin_add(group);
    editor.name = name;
    editor.href = href;
    editor.icon = icon.unwrap_or_default();
    editor.description = description.unwrap_or_default();
    save(ctx).await
}

pub async fn edit_bookmark(
    ctx: &mut CliContext,
    group: &str,
    name: &str,
    new_name: Option<String>,
    href: Option<String>,
    icon: Option<String>,
    description: Option<String>,
) -> Result<(), CliError> {
    let (manager, notifier) = ctx.bookmark_parts();
    if !manager.begin_edit(group, name, notifier).await {
        return ctx.finish(false, "Failed to load bookmark");
    }
    let editor = ctx
        .bookmarks
        .editor_mut()
        .ok_or_else(|| CliError::CommandError("Editor not available".to_string()))?;
    if let Some(new_name) = new_name {
        editor.name = new_name;
    }
    if let Some(href) = href {
        editor.href = href;
    }
    if let Some(icon) = icon {
        editor.icon = icon;
    }
    if let Some(description) = description {
        editor.description = description;
    }
    save(ctx).await
}

pub async fn delete_bookmark(
    ctx: &mut CliContext,
    group: &str,
    name: &str,
    yes: bool,
) -> Result<(), CliError> {
    if !yes && !confirm(&format!("Delete bookmark '{}' from '{}'?", name, group))? {
        println!("{}", "Aborted.".red());
        return Ok(());
    }
    let (manager, notifier) = ctx.bookmark_parts();
    let ok = manager.delete_bookmark(group, name, notifier).await;
    ctx.finish(ok, "Failed to delete bookmark")
}

pub async fn add_group(ctx: &mut CliContext, name: &str) -> Result<(), CliError> {
    if name.trim().is_empty() {
        return Err(CliError::ParseError("Group name is required".to_string()));
    }
    let (manager, notifier) = ctx.bookmark_parts();
    let ok = manager.create_group(name, notifier).await;
    ctx.finish(ok, "Failed to create group")
}

pub async fn rename_group(ctx: &mut CliContext, name: &str, new_name: &str) -> Result<(), CliError> {
    if new_name.trim().is_empty() || new_name.trim() == name {
        println!("{} Nothing to rename", "ℹ".bold().blue());
        return Ok(());
    }
    let (manager, notifier) = ctx.bookmark_parts();
    let ok = manager.rename_group(name, new_name, notifier).await;
    ctx.finish(ok, "Failed to rename group")
}

pub async fn delete_group(ctx: &mut CliContext, name: &str, yes: bool) -> Result<(), CliError> {
    if !yes && !confirm(&format!("Delete group '{}' and all its bookmarks?", name))? {
        println!("{}", "Aborted.".red());
        return Ok(());
    }
    let (manager, notifier) = ctx.bookmark_parts();
    let ok = manager.delete_group(name, notifier).await;
    ctx.finish(ok, "Failed to delete group")
}

pub async fn export_bookmarks(ctx: &mut CliContext, file_path: Option<String>) -> Result<(), CliError> {
    let path = file_path.unwrap_or_else(|| "bookmarks.yaml".to_string());
    let (manager, notifier) = ctx.bookmark_parts();
    let saved = manager.export(Path::new(&path), notifier).await;
    ctx.finish(saved.is_some(), "Failed to export bookmarks")?;
    if let Some(saved) = saved {
        println!(
            "  {} {}",
            "Written to".dimmed(),
            saved.display().to_string().blue()
        );
    }
    Ok(())
}

pub async fn import_bookmarks(ctx: &mut CliContext, file_path: &str) -> Result<(), CliError> {
    let (manager, notifier) = ctx.bookmark_parts();
    let ok = manager.import(Path::new(file_path), notifier).await;
    ctx.finish(ok, "Failed to import bookmarks")
}
