use std::path::PathBuf;

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to merge the file, `DBMCP_*` environment and CLI override layers.
    #[error("Failed to load configuration (file {path}, DBMCP_* environment or CLI overrides): {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Required field is missing.
    #[error("Configuration file {path} is missing `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Wrap a `config::ConfigError` raised while building the layered sources.
    pub fn from_load_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Load { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures surfaced while turning form input into a rendered configuration.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// Input does not resemble any supported connection string.
    #[error("Enter a MongoDB, PostgreSQL or MySQL connection string that includes a username")]
    NoMatch,
    /// A sanitized URL arrived without a database type.
    #[error("Unsupported database type")]
    UnsupportedDatabaseType,
}

impl GenerateError {
    /// `NoMatch` is an expected state while the user is still typing.
    pub const fn is_expected(&self) -> bool {
        matches!(self, GenerateError::NoMatch)
    }
}
