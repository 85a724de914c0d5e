use clap::{CommandFactory, Parser};

use homepage_admin::cli::Cli;
use homepage_admin::config::{init_config, override_api_base_url};
use homepage_admin::runtime::modes::{Mode, detect_mode};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_config();
    if let Some(api) = cli.api.as_deref() {
        override_api_base_url(api);
    }

    match detect_mode(cli.command.as_ref()) {
        #[cfg(feature = "tui")]
        Mode::Tui => {
            if let Err(e) = homepage_admin::runtime::modes::run_tui().await {
                eprintln!("TUI error: {}", e);
                std::process::exit(1);
            }
        }

        #[cfg(feature = "cli")]
        Mode::Cli => {
            let Some(command) = cli.command else {
                return;
            };
            if let Err(e) = homepage_admin::runtime::modes::run_cli(command).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }

        Mode::Help => {
            let _ = Cli::command().print_help();
            println!();
        }
    }
}
