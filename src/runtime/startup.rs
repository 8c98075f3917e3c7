use std::process::ExitCode;

use anyhow::Error;
use tracing::info;

use crate::{
    cli::{format_view, read_connection_string, GenerateProfile},
    config::AppConfig,
    form::{FormAction, FormState},
    lib::errors::ConfigError,
    templates::TemplateGenerator,
};

/// Exit code used when the input is not a supported connection string.
pub const NO_MATCH_EXIT_CODE: u8 = 2;
/// Exit code for configuration and internal failures.
pub const FAILURE_EXIT_CODE: u8 = 1;

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: u8,
}

impl RuntimeExit {
    pub fn new(message: impl Into<String>, exit_code: u8) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: FAILURE_EXIT_CODE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        ExitCode::from(self.exit_code)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

/// Load config for `profile`, honouring an explicit `--config` path.
pub fn load_config(profile: &GenerateProfile) -> Result<AppConfig, ConfigError> {
    match &profile.config_path {
        Some(path) => AppConfig::load_from_path(path.clone(), &profile.overrides),
        None => AppConfig::load_from_env_or_default(&profile.overrides),
    }
}

/// Read the input, run it through the form reducer and format the result.
pub fn run_generate(profile: GenerateProfile, config: AppConfig) -> Result<String, RuntimeExit> {
    let raw = read_connection_string(&profile.input).map_err(RuntimeExit::from_error)?;
    let target = profile.target.or(config.render.default_target);
    let generator = TemplateGenerator::new(config.service.base_url.clone())
        .with_pretty(profile.pretty.unwrap_or(config.render.pretty));

    let mut state = FormState::new(generator).reduce(FormAction::ConnectionStringChanged(raw));
    if let Some(target) = target {
        state = state.reduce(FormAction::TargetSelected(target));
    }

    if let Some(message) = state.message() {
        let exit_code = if state.is_unmatched() {
            NO_MATCH_EXIT_CODE
        } else {
            FAILURE_EXIT_CODE
        };
        return Err(RuntimeExit::new(message, exit_code));
    }

    info!(
        target: "dbmcp::runtime",
        output = profile.output.as_str(),
        assistant = target.map(|t| t.as_str()).unwrap_or("none"),
        "Generated MCP configuration"
    );
    format_view(&state.view(), profile.output).map_err(RuntimeExit::from_error)
}
