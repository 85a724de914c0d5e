//! Helper functions shared by the CLI commands

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::interfaces::cli::CliError;

/// Ask a yes/no question on stdin; anything but `y` is a no
pub fn confirm(prompt: &str) -> Result<bool, CliError> {
    print!("{} {} ", prompt.yellow(), "[y/N]".dimmed());
    io::stdout()
        .flush()
        .map_err(|e| CliError::CommandError(format!("Failed to flush stdout: {}", e)))?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|e| CliError::CommandError(format!("Failed to read input: {}", e)))?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Read one trimmed line after a prompt
pub fn prompt_line(prompt: &str) -> Result<String, CliError> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| CliError::CommandError(format!("Failed to flush stdout: {}", e)))?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|e| CliError::CommandError(format!("Failed to read input: {}", e)))?;
    Ok(input.trim().to_string())
}

/// `key=value` → (key, value); both sides trimmed, the key must be non-empty
pub fn parse_key_value(raw: &str) -> Result<(String, String), CliError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| CliError::ParseError(format!("Expected KEY=VALUE, got '{}'", raw)))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::ParseError(format!("Missing key in '{}'", raw)));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("url = http://10.0.0.2:8096").unwrap(),
            ("url".to_string(), "http://10.0.0.2:8096".to_string())
        );
        assert_eq!(
            parse_key_value("fields=a,b=c").unwrap(),
            ("fields".to_string(), "a,b=c".to_string())
        );
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=x").is_err());
    }
}
