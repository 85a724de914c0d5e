//! CLI interface module
//!
//! Every subcommand runs against the same [`Dashboard`] / [`BookmarkManager`]
//! pair the TUI uses, so the toasts those operations produce become the
//! command's output.

pub mod commands;

use std::fmt;
use std::sync::Arc;

use colored::Colorize;

use crate::bookmarks::BookmarkManager;
use crate::cli::{
    BookmarkCommands, CategoryCommands, Commands, ConfigCommands, PreviewCommands,
    ServiceCommands,
};
use crate::client::{ApiClient, AuthSession, SessionStore};
use crate::dashboard::Dashboard;
use crate::errors::AdminError;
use crate::notify::{Notifier, ToastLevel};

#[derive(Debug)]
pub enum CliError {
    ParseError(String),
    CommandError(String),
    AuthRequired(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
            CliError::AuthRequired(msg) => format!(
                "Authentication required: {} (run `homepage-admin login`)",
                msg
            ),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        match self {
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
            CliError::AuthRequired(msg) => format!(
                "{} {}\n  {} {}",
                "Authentication required:".red().bold(),
                msg.white(),
                "Run".dimmed(),
                "homepage-admin login".cyan()
            ),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<AdminError> for CliError {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::Unauthorized(msg) => CliError::AuthRequired(msg),
            AdminError::Validation(msg) => CliError::ParseError(msg),
            other => CliError::CommandError(other.user_message(&other.message())),
        }
    }
}

/// Session, controllers and the shared toast queue for one CLI invocation
pub struct CliContext {
    pub session: Arc<AuthSession>,
    pub dashboard: Dashboard,
    pub bookmarks: BookmarkManager,
}

impl CliContext {
    pub fn from_config() -> Self {
        let session = Arc::new(AuthSession::new(SessionStore::from_config()));
        Self::with_client(ApiClient::from_config(session))
    }

    pub fn with_client(client: ApiClient) -> Self {
        let session = client.session().clone();
        let bookmarks = BookmarkManager::new(client.clone());
        Self {
            session,
            dashboard: Dashboard::new(client, Notifier::from_config()),
            bookmarks,
        }
    }

    pub fn client(&self) -> &ApiClient {
        self.dashboard.client()
    }

    /// Bookmark manager together with the dashboard's toast queue
    pub fn bookmark_parts(&mut self) -> (&mut BookmarkManager, &mut Notifier) {
        (&mut self.bookmarks, self.dashboard.notifier_mut())
    }

    /// Print queued toasts and turn the outcome into a command result.
    ///
    /// On failure the last error toast becomes the returned message instead
    /// of being printed, so it is shown exactly once.
    pub fn finish(&mut self, ok: bool, failure: &str) -> Result<(), CliError> {
        let toasts = self.dashboard.notifier_mut().drain();
        let mut last_error = None;
        for toast in toasts {
            if !ok && toast.level == ToastLevel::Error {
                last_error = Some(toast.message);
                continue;
            }
            print_toast(toast.level, &toast.message);
        }

        if ok {
            return Ok(());
        }
        if self.session.take_login_request() {
            return Err(CliError::AuthRequired(
                "Not logged in or session expired".to_string(),
            ));
        }
        Err(CliError::CommandError(
            last_error.unwrap_or_else(|| failure.to_string()),
        ))
    }
}

pub fn print_toast(level: ToastLevel, message: &str) {
    let marker = match level {
        ToastLevel::Success => "✓".bold().green(),
        ToastLevel::Info => "ℹ".bold().blue(),
        ToastLevel::Warning => "⚠".bold().yellow(),
        ToastLevel::Error => "✗".bold().red(),
    };
    println!("{} {}", marker, message);
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    // Local-only commands, no backend or session needed
    match &cmd {
        Commands::Widgets { widget_type } => {
            return commands::show_widgets(widget_type.as_deref());
        }
        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => {
            return commands::config_generate(output_path.clone(), *force);
        }
        _ => {}
    }

    let mut ctx = CliContext::from_config();

    match cmd {
        Commands::Login { username, password } => {
            commands::login(&mut ctx, username, password).await
        }
        Commands::Logout => commands::logout(&mut ctx).await,
        Commands::Whoami => commands::whoami(&mut ctx).await,
        Commands::List { json } => commands::list_services(&mut ctx, json).await,

        Commands::Category { action } => match action {
            CategoryCommands::Add { name } => commands::add_category(&mut ctx, &name).await,
            CategoryCommands::Rename { name, new_name } => {
                commands::rename_category(&mut ctx, &name, &new_name).await
            }
            CategoryCommands::Delete { name, yes } => {
                commands::delete_category(&mut ctx, &name, yes).await
            }
            CategoryCommands::Reorder { names } => {
                commands::reorder_categories(&mut ctx, names).await
            }
        },

        Commands::Service { action } => match action {
            ServiceCommands::Show { category, name } => {
                commands::show_service(&mut ctx, &category, &name).await
            }
            ServiceCommands::Add {
                category,
                name,
                fields,
            } => commands::add_service(&mut ctx, &category, &name, fields).await,
            ServiceCommands::Edit {
                category,
                name,
                new_name,
                new_category,
                fields,
            } => {
                commands::edit_service(&mut ctx, &category, &name, new_name, new_category, fields)
                    .await
            }
            ServiceCommands::Delete {
                category,
                name,
                yes,
            } => commands::delete_service(&mut ctx, &category, &name, yes).await,
            ServiceCommands::ToggleHidden { category, name } => {
                commands::toggle_hidden(&mut ctx, &category, &name).await
            }
            ServiceCommands::Reorder { category, names } => {
                commands::reorder_services(&mut ctx, &category, names).await
            }
            ServiceCommands::Move {
                category,
                name,
                to_category,
                position,
            } => commands::move_service(&mut ctx, &category, &name, &to_category, position).await,
        },

        Commands::Bookmark { action } => match action {
            BookmarkCommands::List => commands::list_bookmarks(&mut ctx).await,
            BookmarkCommands::Add {
                group,
                name,
                href,
                icon,
                description,
            } => commands::add_bookmark(&mut ctx, &group, name, href, icon, description).await,
            BookmarkCommands::Edit {
                group,
                name,
                new_name,
                href,
                icon,
                description,
            } => {
                commands::edit_bookmark(&mut ctx, &group, &name, new_name, href, icon, description)
                    .await
            }
            BookmarkCommands::Delete { group, name, yes } => {
                commands::delete_bookmark(&mut ctx, &group, &name, yes).await
            }
            BookmarkCommands::GroupAdd { name } => commands::add_group(&mut ctx, &name).await,
            BookmarkCommands::GroupRename { name, new_name } => {
                commands::rename_group(&mut ctx, &name, &new_name).await
            }
            BookmarkCommands::GroupDelete { name, yes } => {
                commands::delete_group(&mut ctx, &name, yes).await
            }
            BookmarkCommands::Export { file_path } => {
                commands::export_bookmarks(&mut ctx, file_path).await
            }
            BookmarkCommands::Import { file_path } => {
                commands::import_bookmarks(&mut ctx, &file_path).await
            }
        },

        Commands::Config { action } => match action {
            ConfigCommands::Import { file_path } => {
                commands::import_config(&mut ctx, &file_path).await
            }
            ConfigCommands::Export { file_path } => {
                commands::export_config(&mut ctx, file_path).await
            }
            ConfigCommands::Backup => commands::backup_config(&mut ctx).await,
            ConfigCommands::Example { file_path } => {
                commands::example_config(&mut ctx, file_path).await
            }
            ConfigCommands::Generate { .. } => unreachable!("handled above"),
        },

        Commands::Preview { action } => match action {
            PreviewCommands::Set { url } => commands::set_preview(&mut ctx, &url).await,
            PreviewCommands::Show => commands::show_preview(&mut ctx),
            PreviewCommands::Clear => commands::clear_preview(&mut ctx),
            PreviewCommands::Refresh => commands::refresh_preview(&mut ctx).await,
        },

        Commands::Widgets { .. } => unreachable!("handled above"),

        #[cfg(feature = "tui")]
        Commands::Tui => unreachable!("TUI handled in main"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_maps_to_auth_required() {
        let err: CliError = AdminError::unauthorized("Not authenticated").into();
        assert!(matches!(err, CliError::AuthRequired(_)));
        assert!(err.format_simple().contains("homepage-admin login"));
    }

    #[test]
    fn test_rejected_detail_is_kept() {
        let err: CliError = AdminError::rejected(400, Some("Category already exists".into())).into();
        assert_eq!(err.format_simple(), "Command error: Category already exists");
    }

    #[test]
    fn test_validation_maps_to_parse_error() {
        let err: CliError = AdminError::validation("Service name is required").into();
        assert!(matches!(err, CliError::ParseError(_)));
    }
}
