//! Category commands

use colored::Colorize;

use super::helpers::confirm;
use crate::interfaces::cli::{CliContext, CliError};

pub async fn add_category(ctx: &mut CliContext, name: &str) -> Result<(), CliError> {
    if name.trim().is_empty() {
        return Err(CliError::ParseError("Category name is required".to_string()));
    }
    let ok = ctx.dashboard.add_category(name).await;
    ctx.finish(ok, "Failed to add category")
}

pub async fn rename_category(
    ctx: &mut CliContext,
    name: &str,
    new_name: &str,
) -> Result<(), CliError> {
    if new_name.trim().is_empty() || new_name.trim() == name {
        println!("{} Nothing to rename", "ℹ".bold().blue());
        return Ok(());
    }
    let ok = ctx.dashboard.rename_category(name, new_name).await;
    ctx.finish(ok, "Failed to rename category")
}

pub async fn delete_category(ctx: &mut CliContext, name: &str, yes: bool) -> Result<(), CliError> {
    if !yes
        && !confirm(&format!(
            "Delete category '{}' and all its services?",
            name
        ))?
    {
        println!("{}", "Aborted.".red());
        return Ok(());
    }
    let ok = ctx.dashboard.delete_category(name).await;
    ctx.finish(ok, "Failed to delete category")
}

pub async fn reorder_categories(ctx: &mut CliContext, names: Vec<String>) -> Result<(), CliError> {
    let loaded = ctx.dashboard.load_configuration().await;
    if !loaded {
        return ctx.finish(false, "Failed to load configuration");
    }
    let ok = ctx.dashboard.set_category_order(names).await;
    ctx.finish(ok, "Failed to reorder categories")
}
