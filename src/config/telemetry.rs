use tracing::{debug, info};

use super::{AppConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_env_source(path: &std::path::Path, from_env: bool) {
    if from_env {
        info!(
            target: "dbmcp::config",
            path = %path.display(),
            "Loading configuration using DBMCP_CONFIG_PATH environment variable"
        );
    } else {
        debug!(
            target: "dbmcp::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_PATH,
            "DBMCP_CONFIG_PATH not set; using default dbmcp.toml"
        );
    }
}

pub fn log_loaded(config: &AppConfig) {
    info!(
        target: "dbmcp::config",
        path = %config.source_path.display(),
        base_url = %config.service.base_url,
        default_target = config.render.default_target.map(|t| t.as_str()).unwrap_or("none"),
        pretty = config.render.pretty,
        "Configuration loaded successfully"
    );
}
