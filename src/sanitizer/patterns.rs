//! Connection string shapes recognised by the sanitizer.
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Username, optional password, `@`, then an arbitrary remainder.
///
/// The split happens at the first `@` after the user segment. A literal `@`
/// inside a password must be percent-encoded as `%40`.
const CREDENTIALS_AND_REMAINDER: &str = r"([^:@/]+)(?::([^@]*))?@(.+)$";

/// Database families with a supported connection string shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    Mongodb,
    Postgre,
    Mysql,
}

impl DbType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DbType::Mongodb => "mongodb",
            DbType::Postgre => "postgre",
            DbType::Mysql => "mysql",
        }
    }

    /// Query parameter telling the service which password to ask for.
    pub const fn password_placeholder(&self) -> &'static str {
        match self {
            DbType::Mongodb => "mongodbpassword=<YOUR PASSWORD>",
            DbType::Postgre => "postgrepassword=<YOUR PASSWORD>",
            DbType::Mysql => "mysqlpassword=<YOUR PASSWORD>",
        }
    }
}

/// Scheme alternatives per family, in matching order.
pub const SCHEME_PATTERNS: &[(DbType, &str)] = &[
    (DbType::Mongodb, r"mongodb(?:\+srv)?://"),
    (DbType::Postgre, r"postgres(?:ql)?://"),
    (DbType::Mysql, r"mysql://"),
];

/// Scheme, username and remainder split out of a connection string.
///
/// The password only decides where the split happens; it is not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCredentials<'a> {
    pub scheme: &'a str,
    pub username: &'a str,
    pub remainder: &'a str,
}

impl ParsedCredentials<'_> {
    /// `scheme + username + "@" + remainder`.
    pub fn reconstruct(&self) -> String {
        format!("{}{}@{}", self.scheme, self.username, self.remainder)
    }
}

/// Compiled pattern for one database family.
#[derive(Debug, Clone)]
pub struct ConnectionPattern {
    db_type: DbType,
    regex: Regex,
}

impl ConnectionPattern {
    pub fn new(db_type: DbType, scheme: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^({scheme}){CREDENTIALS_AND_REMAINDER}"))?;
        Ok(Self { db_type, regex })
    }

    pub fn db_type(&self) -> DbType {
        self.db_type
    }

    /// Split `raw` into credentials when it has this pattern's shape.
    pub fn parse<'a>(&self, raw: &'a str) -> Option<ParsedCredentials<'a>> {
        let captures = self.regex.captures(raw)?;
        Some(ParsedCredentials {
            scheme: captures.get(1)?.as_str(),
            username: captures.get(2)?.as_str(),
            remainder: captures.get(4)?.as_str(),
        })
    }
}

/// Compile every entry of [`SCHEME_PATTERNS`] in order.
pub fn compile_all() -> Result<Vec<ConnectionPattern>, regex::Error> {
    SCHEME_PATTERNS
        .iter()
        .map(|(db_type, scheme)| ConnectionPattern::new(*db_type, scheme))
        .collect()
}
