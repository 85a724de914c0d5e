//! Live preview target commands

use colored::Colorize;

use crate::interfaces::cli::{CliContext, CliError};

pub async fn set_preview(ctx: &mut CliContext, url: &str) -> Result<(), CliError> {
    let (preview, notifier) = ctx.dashboard.preview_parts();
    if !preview.set_url(url, notifier) {
        return ctx.finish(false, "Invalid Homepage URL");
    }
    println!("{} Homepage URL set to {}", "✓".bold().green(), url.blue().underline());
    let ok = ctx.dashboard.probe_preview().await;
    ctx.finish(ok, "Failed to load Homepage")
}

pub fn show_preview(ctx: &mut CliContext) -> Result<(), CliError> {
    match ctx.dashboard.preview().url() {
        Some(url) => println!("{} {}", "Homepage URL:".bold(), url.blue().underline()),
        None => println!("{} No Homepage URL set", "ℹ".bold().blue()),
    }
    Ok(())
}

pub fn clear_preview(ctx: &mut CliContext) -> Result<(), CliError> {
    let (preview, notifier) = ctx.dashboard.preview_parts();
    preview.clear(notifier);
    ctx.finish(true, "")
}

pub async fn refresh_preview(ctx: &mut CliContext) -> Result<(), CliError> {
    ctx.dashboard.refresh_preview();
    let Some(src) = ctx.dashboard.preview().frame_src().map(str::to_string) else {
        return ctx.finish(false, "Please set a Homepage URL first");
    };
    println!("{} {}", "Reloading".dimmed(), src.blue().underline());
    let ok = ctx.dashboard.probe_preview().await;
    ctx.finish(ok, "Failed to load Homepage")
}
