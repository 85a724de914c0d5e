//! Widget catalogue (local, no backend call)

use colored::Colorize;

use crate::editor::{FieldKind, fields_for};
use crate::interfaces::cli::CliError;
use crate::models::WidgetKind;

fn kind_label(kind: FieldKind) -> String {
    match kind {
        FieldKind::Url => "url".to_string(),
        FieldKind::Text => "text".to_string(),
        FieldKind::Password => "password".to_string(),
        FieldKind::Checkbox => "bool".to_string(),
        FieldKind::Select(options) => options.join("|"),
        FieldKind::List => "a, b, c".to_string(),
        FieldKind::Mappings => "--mapping field=label".to_string(),
    }
}

fn print_widget(kind: WidgetKind) {
    println!("{} {}", kind.tag().cyan().bold(), format!("({})", kind.label()).dimmed());
    for field in fields_for(kind) {
        let mut line = format!("  {:<18} {:<24}", field.key, kind_label(field.kind));
        if field.required {
            line.push_str(&"required".red().to_string());
        } else if let Some(default) = field.default {
            line.push_str(&format!("default {}", default).dimmed().to_string());
        }
        println!("{}", line);
    }
}

pub fn show_widgets(widget_type: Option<&str>) -> Result<(), CliError> {
    match widget_type {
        Some(raw) => {
            let kind = WidgetKind::parse_tag(raw).map_err(CliError::ParseError)?;
            print_widget(kind);
        }
        None => {
            for kind in WidgetKind::all() {
                print_widget(kind);
                println!();
            }
            println!(
                "{} Set fields with {}",
                "ℹ".bold().blue(),
                "--widget <type> --field key=value".yellow()
            );
        }
    }
    Ok(())
}
