//! Strip credentials from connection strings and classify the database type.
use std::sync::LazyLock;

use serde::Serialize;

use crate::lib::{encoding::double_encode, telemetry};

pub mod patterns;

pub use patterns::{compile_all, ConnectionPattern, DbType, ParsedCredentials, SCHEME_PATTERNS};

static DEFAULT_SANITIZER: LazyLock<ConnectionStringSanitizer> = LazyLock::new(|| {
    ConnectionStringSanitizer::new().expect("built-in connection string patterns are valid")
});

/// Password-free view of a connection string.
///
/// An empty `sanitized_url` with `None` user and type means the input did not
/// match any supported shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SanitizedResult {
    pub sanitized_url: String,
    pub db_user: Option<String>,
    pub db_type: Option<DbType>,
}

impl SanitizedResult {
    pub fn is_empty(&self) -> bool {
        self.sanitized_url.is_empty()
    }
}

/// Ordered set of compiled connection string patterns.
#[derive(Debug, Clone)]
pub struct ConnectionStringSanitizer {
    patterns: Vec<ConnectionPattern>,
}

impl ConnectionStringSanitizer {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            patterns: compile_all()?,
        })
    }

    /// Split `raw` with the first pattern that matches.
    pub fn parse<'a>(&self, raw: &'a str) -> Option<(DbType, ParsedCredentials<'a>)> {
        self.patterns
            .iter()
            .find_map(|pattern| pattern.parse(raw).map(|parsed| (pattern.db_type(), parsed)))
    }

    pub fn sanitize(&self, raw: &str) -> SanitizedResult {
        let result = match self.parse(raw.trim()) {
            Some((db_type, parsed)) => SanitizedResult {
                sanitized_url: double_encode(&parsed.reconstruct()),
                db_user: Some(parsed.username.to_string()),
                db_type: Some(db_type),
            },
            None => SanitizedResult::default(),
        };
        telemetry::log_sanitized(&result);
        result
    }
}

/// Sanitize with the built-in MongoDB, PostgreSQL and MySQL patterns.
pub fn sanitize(raw: &str) -> SanitizedResult {
    DEFAULT_SANITIZER.sanitize(raw)
}
