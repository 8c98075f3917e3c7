//! CLI entrypoint module structure.
use anyhow::Result;
use serde_json::json;

use crate::{
    form::FormView,
    templates::{AssistantTarget, HIGHLIGHT_INSTRUCTIONS},
};

pub mod args;
pub mod profile;

pub use args::{CliCommand, GenerateArgs, ParsedCommand};
pub use profile::{
    read_connection_string, resolve_config_path, resolve_input, GenerateProfile, InputSource,
    OutputFormat,
};

/// Execute CLI command mode and return a user-facing result payload.
pub fn execute_cli_command(command: CliCommand) -> Result<String> {
    match command {
        CliCommand::Targets => Ok(format_targets()),
    }
}

fn format_targets() -> String {
    AssistantTarget::ALL
        .iter()
        .map(|target| {
            let key = target.shape().root_key().unwrap_or("(manual setup)");
            format!("{:<10} {key}", target.as_str())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a successful render for the terminal.
pub fn format_view(view: &FormView<'_>, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(format_text(view)),
        OutputFormat::Json => {
            let payload = json!({
                "url": view.url,
                "json": view.json,
                "show_extra_instructions": view.show_extra_instructions,
                "message": view.message,
            });
            Ok(serde_json::to_string_pretty(&payload)?)
        }
    }
}

fn format_text(view: &FormView<'_>) -> String {
    let mut sections = vec![view.url.to_string()];
    if view.show_extra_instructions {
        sections.push(HIGHLIGHT_INSTRUCTIONS.to_string());
    } else if !view.json.is_empty() {
        sections.push(view.json.to_string());
    }
    sections.join("\n\n")
}
