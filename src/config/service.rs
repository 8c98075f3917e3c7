use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::lib::errors::ConfigError;

/// Endpoint that receives the sanitized connection string.
#[derive(Debug, Clone)]
pub struct ServiceSection {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawServiceSection {
    pub base_url: Option<String>,
}

pub fn parse_service_section(
    raw: Option<RawServiceSection>,
    path: &Path,
) -> Result<ServiceSection, ConfigError> {
    let base_url = raw
        .unwrap_or_default()
        .base_url
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingField {
            path: path.to_path_buf(),
            field: "service.base_url",
        })?;
    validate_base_url(&base_url, path)?;
    Ok(ServiceSection { base_url })
}

fn validate_base_url(value: &str, path: &Path) -> Result<(), ConfigError> {
    let invalid = |message: &str| ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "service.base_url",
        message: message.into(),
    };

    let parsed = Url::parse(value).map_err(|err| invalid(&err.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid("Use an http or https URL"));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("Remove the query string and fragment"));
    }
    Ok(())
}
