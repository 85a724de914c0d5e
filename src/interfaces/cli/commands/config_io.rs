//! services.yaml import / export / backup, and homepage-admin.toml generation

use std::path::Path;

use colored::Colorize;

use super::helpers::confirm;
use crate::config::{CONFIG_FILE_NAME, StaticConfig};
use crate::interfaces::cli::{CliContext, CliError};

pub async fn import_config(ctx: &mut CliContext, file_path: &str) -> Result<(), CliError> {
    let path = Path::new(file_path);
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));
    if !is_yaml {
        return Err(CliError::ParseError("File must be a YAML file".to_string()));
    }
    let ok = ctx.dashboard.import_configuration(path).await;
    ctx.finish(ok, "Failed to import configuration")
}

pub async fn export_config(ctx: &mut CliContext, file_path: Option<String>) -> Result<(), CliError> {
    let path = file_path.unwrap_or_else(|| "services.yaml".to_string());
    let saved = ctx.dashboard.export_configuration(Path::new(&path)).await;
    ctx.finish(saved.is_some(), "Failed to export configuration")
}

pub async fn backup_config(ctx: &mut CliContext) -> Result<(), CliError> {
    let saved = ctx.dashboard.backup_configuration().await;
    ctx.finish(saved.is_some(), "Failed to create backup")
}

pub async fn example_config(ctx: &mut CliContext, file_path: Option<String>) -> Result<(), CliError> {
    let path = file_path.unwrap_or_else(|| "services.example.yaml".to_string());
    let data = ctx.client().config_io().example().await?;
    std::fs::write(&path, data)
        .map_err(|e| CliError::CommandError(format!("Unable to write {}: {}", path, e)))?;
    println!(
        "{} Example configuration saved to {}",
        "✓".bold().green(),
        path.blue()
    );
    Ok(())
}

/// Generate a sample `homepage-admin.toml`
pub fn config_generate(output_path: Option<String>, force: bool) -> Result<(), CliError> {
    let path = output_path.unwrap_or_else(|| CONFIG_FILE_NAME.to_string());

    // 非 --force 模式下交互确认覆盖
    if !force
        && Path::new(&path).exists()
        && !confirm(&format!("File already exists: {}. Overwrite?", path))?
    {
        println!("{}", "Aborted.".red());
        return Ok(());
    }

    println!(
        "{} {}",
        "Generating configuration file...".yellow(),
        path.blue()
    );

    match std::fs::write(&path, StaticConfig::generate_sample_config()) {
        Ok(()) => {
            println!(
                "  {} {}",
                "Configuration file generated successfully".green(),
                path.blue()
            );
            println!(
                "  {}",
                "Environment variables (HPA__API__BASE_URL, ...) override file values".dimmed()
            );
            Ok(())
        }
        Err(e) => Err(CliError::CommandError(format!(
            "Unable to write configuration file: {}",
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_generate_writes_sample() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("homepage-admin.toml");
        config_generate(Some(path.to_string_lossy().to_string()), true).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: StaticConfig = toml::from_str(&written).unwrap();
        assert_eq!(parsed.api.base_url, StaticConfig::default().api.base_url);
    }
}
