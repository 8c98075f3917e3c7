//! GenerateProfile and config/input resolution.
use std::{
    env,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;

use crate::{config::ConfigOverrides, templates::AssistantTarget};

/// How the rendered configuration is printed.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Where the connection string comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Argument(String),
    Stdin,
}

/// Resolved options for one generate run.
#[derive(Debug, Clone)]
pub struct GenerateProfile {
    /// Explicit config file; `None` defers to `DBMCP_CONFIG_PATH` or the default.
    pub config_path: Option<PathBuf>,
    pub overrides: ConfigOverrides,
    pub target: Option<AssistantTarget>,
    /// `None` defers to `render.pretty`.
    pub pretty: Option<bool>,
    pub output: OutputFormat,
    pub input: InputSource,
}

/// Make a CLI-supplied config path absolute against the working directory.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<Option<PathBuf>> {
    let Some(path) = override_path else {
        return Ok(None);
    };
    if path.is_absolute() {
        return Ok(Some(path));
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(Some(cwd.join(path)))
}

/// Pick the positional argument when given, stdin otherwise.
pub fn resolve_input(argument: Option<String>) -> InputSource {
    match argument {
        Some(value) if value != "-" => InputSource::Argument(value),
        _ => InputSource::Stdin,
    }
}

/// Read the connection string from `source`.
pub fn read_connection_string(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Argument(value) if value.trim().is_empty() => {
            Err(anyhow!("no connection string provided"))
        }
        InputSource::Argument(value) => Ok(value.clone()),
        InputSource::Stdin => read_from(io::stdin().lock()),
    }
}

fn read_from(mut reader: impl Read) -> Result<String> {
    let mut buffer = String::new();
    reader
        .read_to_string(&mut buffer)
        .context("failed to read connection string from stdin")?;
    let line = buffer
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or_else(|| anyhow!("no connection string provided on stdin"))?;
    Ok(line.to_string())
}
