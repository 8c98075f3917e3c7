//! Build the service URL and render the MCP configuration for a target.
use serde::Serialize;

use crate::{lib::errors::GenerateError, sanitizer::DbType};

pub mod shapes;

pub use shapes::{AssistantTarget, TemplateShape, TARGET_SHAPES};

/// Prefix of every generated MCP server identifier.
pub const SERVER_ID_PREFIX: &str = "dbmcp";

/// Shown instead of a JSON block for Highlight, which is configured by hand.
pub const HIGHLIGHT_INSTRUCTIONS: &str = "\
Highlight is set up by hand rather than from a JSON file.
Paste the URL above into Highlight's custom MCP server setting, then replace <YOUR PASSWORD> with your database password.";

/// Most recent render. Empty strings mean there is nothing to display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedConfig {
    pub url: String,
    pub json: String,
    pub show_extra_instructions: bool,
}

/// `"dbmcp-<user>"`, or `"dbmcp"` without a user.
pub fn server_identifier(db_user: Option<&str>) -> String {
    match db_user.filter(|user| !user.is_empty()) {
        Some(user) => format!("{SERVER_ID_PREFIX}-{user}"),
        None => SERVER_ID_PREFIX.to_string(),
    }
}

/// Renders configuration documents against one service endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateGenerator {
    base_url: String,
    pretty: bool,
}

impl TemplateGenerator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            pretty: false,
        }
    }

    /// Emit indented JSON instead of the compact form.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base>?srvString=<sanitized>&<placeholder>`.
    pub fn service_url(
        &self,
        sanitized_url: &str,
        db_type: Option<DbType>,
    ) -> Result<String, GenerateError> {
        let db_type = db_type.ok_or(GenerateError::UnsupportedDatabaseType)?;
        Ok(format!(
            "{}?srvString={}&{}",
            self.base_url,
            sanitized_url,
            db_type.password_placeholder()
        ))
    }

    pub fn render(
        &self,
        sanitized_url: &str,
        db_user: Option<&str>,
        db_type: Option<DbType>,
        target: Option<AssistantTarget>,
    ) -> Result<RenderedConfig, GenerateError> {
        if sanitized_url.is_empty() {
            return Ok(RenderedConfig::default());
        }

        let url = self.service_url(sanitized_url, db_type)?;
        let Some(target) = target else {
            return Ok(RenderedConfig {
                url,
                ..RenderedConfig::default()
            });
        };

        let id = server_identifier(db_user);
        let json = match target.shape().document(&id, &url) {
            Some(document) => self.serialize(&document),
            None => String::new(),
        };
        let show_extra_instructions = target.shape() == TemplateShape::ManualInstructions;

        Ok(RenderedConfig {
            url,
            json,
            show_extra_instructions,
        })
    }

    fn serialize(&self, document: &serde_json::Value) -> String {
        if self.pretty {
            // `Value` maps always have string keys, so serialization cannot fail.
            serde_json::to_string_pretty(document).unwrap_or_default()
        } else {
            document.to_string()
        }
    }
}
