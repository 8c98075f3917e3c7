//! Load and validate dbmcp configuration.
use std::{env, path::PathBuf};

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod render;
pub mod service;
pub mod telemetry;

pub use render::{parse_render_section, RawRenderSection, RenderSection};
pub use service::{parse_service_section, RawServiceSection, ServiceSection};

pub const CONFIG_ENV_KEY: &str = "DBMCP_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "dbmcp.toml";
/// Prefix for environment overrides such as `DBMCP_SERVICE__BASE_URL`.
pub const ENV_PREFIX: &str = "DBMCP";

/// Values supplied on the command line, applied after file and environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
}

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub service: ServiceSection,
    pub render: RenderSection,
    pub source_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawAppConfig {
    service: Option<RawServiceSection>,
    render: Option<RawRenderSection>,
}

impl AppConfig {
    /// Prefer `DBMCP_CONFIG_PATH` if set; otherwise read `dbmcp.toml` when present.
    pub fn load_from_env_or_default(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let (path, from_env) = match env::var(CONFIG_ENV_KEY) {
            Ok(value) if !value.trim().is_empty() => (PathBuf::from(value), true),
            _ => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };

        telemetry::log_env_source(&path, from_env);
        Self::load(path, from_env, overrides)
    }

    /// Load configuration from a specific path that must exist.
    pub fn load_from_path(path: PathBuf, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        Self::load(path, true, overrides)
    }

    /// Layer the file, `DBMCP_*` environment variables and CLI overrides.
    pub fn load(
        path: PathBuf,
        required: bool,
        overrides: &ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        info!(
            target: "dbmcp::config",
            path = %path.display(),
            required,
            "Starting configuration load"
        );

        let document = config::Config::builder()
            .add_source(config::File::from(path.clone()).required(required))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("service.base_url", overrides.base_url.clone())
            .and_then(|builder| builder.build())
            .map_err(|err| {
                let error = ConfigError::from_load_error(path.clone(), err);
                error!(
                    target: "dbmcp::config",
                    path = %path.display(),
                    reason = %error,
                    "Failed to load configuration sources"
                );
                error
            })?;

        let raw: RawAppConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "dbmcp::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "dbmcp::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawAppConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let service = parse_service_section(raw.service, &path)?;
        let render = parse_render_section(raw.render);

        Ok(Self {
            service,
            render,
            source_path: path,
        })
    }
}
