//! Command-line interface definitions using clap

use clap::{Args, Parser, Subcommand};

/// homepage-admin - manage a Homepage dashboard configuration from the terminal
#[derive(Parser)]
#[command(name = "homepage-admin")]
#[command(version)]
#[command(about = "Manage Homepage services, widgets and bookmarks", long_about = None)]
pub struct Cli {
    /// Backend base URL (overrides api.base_url)
    #[arg(long, global = true, value_name = "URL")]
    pub api: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start TUI mode
    #[cfg(feature = "tui")]
    Tui,

    /// Log in and store the access token
    Login {
        /// Username (prompted when omitted)
        username: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Notify the backend and forget the stored token
    Logout,

    /// Show the logged-in user and token expiry
    Whoami,

    /// List categories and services
    List {
        /// Output raw JSON
        #[arg(long)]
        json: bool,
    },

    /// Show supported widget types and their fields
    Widgets {
        /// Only this widget type
        widget_type: Option<String>,
    },

    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryCommands,
    },

    /// Manage services
    Service {
        #[command(subcommand)]
        action: ServiceCommands,
    },

    /// Manage bookmarks and bookmark groups
    Bookmark {
        #[command(subcommand)]
        action: BookmarkCommands,
    },

    /// Import, export and back up services.yaml
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Live preview target
    Preview {
        #[command(subcommand)]
        action: PreviewCommands,
    },
}

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Add an empty category
    Add { name: String },

    /// Rename a category
    Rename { name: String, new_name: String },

    /// Delete a category and all of its services
    Delete {
        name: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Set the category order (every category, in the new order)
    Reorder {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

/// Service fields shared by `service add` and `service edit`
#[derive(Args, Debug, Default, Clone)]
pub struct ServiceFields {
    /// Icon name or URL
    #[arg(long)]
    pub icon: Option<String>,

    /// Link opened from the dashboard
    #[arg(long)]
    pub href: Option<String>,

    /// Display mode (customapi widgets)
    #[arg(long)]
    pub display: Option<String>,

    /// Show container stats
    #[arg(long, value_name = "BOOL")]
    pub show_stats: Option<bool>,

    /// Enable or disable the health check (ping/server/container)
    #[arg(long, value_name = "BOOL")]
    pub health_check: Option<bool>,

    #[arg(long)]
    pub ping: Option<String>,

    #[arg(long)]
    pub server: Option<String>,

    #[arg(long)]
    pub container: Option<String>,

    /// Widget type, or "none" to remove the widget
    #[arg(long, value_name = "TYPE")]
    pub widget: Option<String>,

    /// Widget field as key=value (repeatable)
    #[arg(long = "field", value_name = "KEY=VALUE")]
    pub widget_fields: Vec<String>,

    /// customapi mapping as field=label (repeatable)
    #[arg(long = "mapping", value_name = "FIELD=LABEL")]
    pub mappings: Vec<String>,
}

#[derive(Subcommand)]
pub enum ServiceCommands {
    /// Show one service's stored configuration
    Show { category: String, name: String },

    /// Add a service
    Add {
        category: String,
        name: String,

        #[command(flatten)]
        fields: ServiceFields,
    },

    /// Edit a service; only the given fields change
    Edit {
        category: String,
        name: String,

        /// Rename the service
        #[arg(long)]
        new_name: Option<String>,

        /// Move it to another category
        #[arg(long)]
        new_category: Option<String>,

        #[command(flatten)]
        fields: ServiceFields,
    },

    /// Delete a service
    Delete {
        category: String,
        name: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Hide a visible service or show a hidden one
    ToggleHidden { category: String, name: String },

    /// Set the service order of a category
    Reorder {
        category: String,
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Move a service to another category
    Move {
        category: String,
        name: String,
        to_category: String,

        /// Position in the destination (default: end)
        #[arg(long)]
        position: Option<usize>,
    },
}

#[derive(Subcommand)]
pub enum BookmarkCommands {
    /// List groups and bookmarks
    List,

    /// Add a bookmark to a group
    Add {
        group: String,
        name: String,
        href: String,

        #[arg(long)]
        icon: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Edit a bookmark; only the given fields change
    Edit {
        group: String,
        name: String,

        #[arg(long)]
        new_name: Option<String>,

        #[arg(long)]
        href: Option<String>,

        #[arg(long)]
        icon: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a bookmark
    Delete {
        group: String,
        name: String,

        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Create a bookmark group
    GroupAdd { name: String },

    /// Rename a bookmark group
    GroupRename { name: String, new_name: String },

    /// Delete a group and all of its bookmarks
    GroupDelete {
        name: String,

        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Save bookmarks.yaml
    Export {
        /// Output path (default: bookmarks.yaml)
        file_path: Option<String>,
    },

    /// Upload a bookmarks YAML file
    Import { file_path: String },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Replace the backend configuration with a services YAML file
    Import { file_path: String },

    /// Save services.yaml
    Export {
        /// Output path (default: services.yaml)
        file_path: Option<String>,
    },

    /// Ask the backend to write a timestamped backup
    Backup,

    /// Save the backend's annotated example configuration
    Example {
        /// Output path (default: services.example.yaml)
        file_path: Option<String>,
    },

    /// Generate a sample homepage-admin.toml
    Generate {
        /// Output path (default: homepage-admin.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum PreviewCommands {
    /// Store the Homepage URL and check that it loads
    Set { url: String },

    /// Show the stored URL
    Show,

    /// Forget the stored URL
    Clear,

    /// Print a cache-busted URL and check that it loads
    Refresh,
}
