//! CLI argument definitions and `GenerateProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::{resolve_config_path, resolve_input, GenerateProfile, OutputFormat};
use crate::{config::ConfigOverrides, templates::AssistantTarget};

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    Generate(GenerateProfile),
    Cli(CliCommand),
}

/// Top-level optional CLI commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// List supported assistant targets and the key their JSON uses.
    #[command(about = "List supported assistant targets")]
    Targets,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dbmcp",
    author,
    version,
    about = "Generate MCP server configuration from a database connection string",
    long_about = "Generate MCP server configuration from a database connection string.\n\nThe password is removed before the connection string is encoded into the service URL. Pass the connection string as an argument, or pipe it on stdin to keep it out of shell history.",
    args_conflicts_with_subcommands = true
)]
pub struct GenerateArgs {
    /// Path to dbmcp.toml (overrides DBMCP_CONFIG_PATH).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    /// Service base URL (overrides service.base_url).
    #[arg(long = "base-url")]
    pub base_url: Option<String>,
    /// Assistant whose configuration is rendered (overrides render.default_target).
    #[arg(long, value_enum)]
    pub target: Option<AssistantTarget>,
    /// Indent the generated JSON (overrides render.pretty).
    #[arg(long, default_value_t = false, conflicts_with = "compact")]
    pub pretty: bool,
    /// Emit compact JSON even when render.pretty is set.
    #[arg(long, default_value_t = false)]
    pub compact: bool,
    /// Print plain text (default) or a JSON object.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
    /// Connection string; read from stdin when omitted or `-`.
    pub connection_string: Option<String>,
    /// Optional CLI command mode.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl GenerateArgs {
    /// Build a `GenerateProfile` from CLI args.
    pub fn build(self) -> Result<GenerateProfile> {
        let config_path = resolve_config_path(self.config_override)?;

        Ok(GenerateProfile {
            config_path,
            overrides: ConfigOverrides {
                base_url: self.base_url,
            },
            target: self.target,
            pretty: match (self.pretty, self.compact) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            output: self.output,
            input: resolve_input(self.connection_string),
        })
    }

    /// Parse CLI args into either generate mode or utility command mode.
    pub fn into_command(self) -> Result<ParsedCommand> {
        match self.command {
            Some(command) => Ok(ParsedCommand::Cli(command)),
            None => Ok(ParsedCommand::Generate(self.build()?)),
        }
    }
}
