//! login / logout / whoami

use std::io::{self, Write};

use chrono::Utc;
use colored::Colorize;

use super::helpers::prompt_line;
use crate::errors::AdminError;
use crate::interfaces::cli::{CliContext, CliError};

fn read_password() -> Result<String, CliError> {
    print!("Password: ");
    io::stdout()
        .flush()
        .map_err(|e| CliError::CommandError(e.to_string()))?;
    rpassword::read_password()
        .map_err(|e| CliError::CommandError(format!("Failed to read password: {}", e)))
}

pub async fn login(
    ctx: &mut CliContext,
    username: Option<String>,
    password: Option<String>,
) -> Result<(), CliError> {
    let username = match username {
        Some(name) => name,
        None => prompt_line("Username: ")?,
    };
    let password = match password {
        Some(pwd) => pwd,
        None => read_password()?,
    };

    match ctx.client().auth().login(&username, &password).await {
        Ok(user) => {
            println!(
                "{} Logged in as {}",
                "✓".bold().green(),
                user.username.cyan()
            );
            if let Some(path) = ctx.session.store().path() {
                println!(
                    "  {} {}",
                    "Session saved to".dimmed(),
                    path.display().to_string().blue()
                );
            }
            Ok(())
        }
        // 登录接口的 401 是凭据错误，不是会话过期
        Err(AdminError::Unauthorized(detail)) => {
            ctx.session.take_login_request();
            Err(CliError::CommandError(if detail == "Not authenticated" {
                "Login failed".to_string()
            } else {
                detail
            }))
        }
        Err(e) => Err(CliError::CommandError(e.user_message("Login failed"))),
    }
}

pub async fn logout(ctx: &mut CliContext) -> Result<(), CliError> {
    ctx.client().auth().logout().await;
    ctx.session.take_login_request();
    println!("{} Logged out", "✓".bold().green());
    Ok(())
}

pub async fn whoami(ctx: &mut CliContext) -> Result<(), CliError> {
    let user = ctx.client().auth().verify().await?;
    println!("{} Logged in as {}", "ℹ".bold().blue(), user.username.cyan());
    println!("  {} {}", "Backend:".dimmed(), ctx.client().base_url().blue());

    if let Some(expires_at) = ctx.session.claims().and_then(|c| c.expires_at()) {
        let remaining = expires_at - Utc::now();
        println!(
            "  {} {} ({} min left)",
            "Token expires:".dimmed(),
            expires_at.format("%Y-%m-%d %H:%M:%S UTC").to_string().yellow(),
            remaining.num_minutes().max(0)
        );
    }
    Ok(())
}
