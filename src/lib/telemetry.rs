//! Telemetry initialization and sanitizer/render event helpers.

use anyhow::Result;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use crate::{
    lib::errors::GenerateError,
    sanitizer::SanitizedResult,
    templates::{AssistantTarget, RenderedConfig},
};

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Record the outcome of sanitizing one input. Never receives the raw text.
pub fn log_sanitized(result: &SanitizedResult) {
    match result.db_type {
        Some(db_type) => debug!(
            target: "dbmcp::sanitizer",
            db_type = db_type.as_str(),
            has_user = result.db_user.is_some(),
            encoded_len = result.sanitized_url.len(),
            "Connection string sanitized"
        ),
        None => debug!(
            target: "dbmcp::sanitizer",
            "Input did not match a supported connection string"
        ),
    }
}

/// Record a successful render.
pub fn log_rendered(target: Option<AssistantTarget>, rendered: &RenderedConfig) {
    info!(
        target: "dbmcp::render",
        assistant = target.map(AssistantTarget::as_str).unwrap_or("none"),
        has_json = !rendered.json.is_empty(),
        show_extra_instructions = rendered.show_extra_instructions,
        "Rendered MCP configuration"
    );
}

/// Record a render failure that was reset to the empty state.
pub fn log_render_failure(error: GenerateError) {
    if error.is_expected() {
        debug!(target: "dbmcp::render", reason = %error, "Nothing to render");
    } else {
        warn!(target: "dbmcp::render", reason = %error, "Render failed; outputs cleared");
    }
}
