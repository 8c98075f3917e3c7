//! Percent-encoding helpers for embedding connection strings in query values.

use std::string::FromUtf8Error;

/// Percent-encode `value` twice.
///
/// Every byte outside `A-Z a-z 0-9 - _ . ~` is escaped on the first pass, so
/// the second pass only rewrites the `%` signs into `%25`.
pub fn double_encode(value: &str) -> String {
    let once = urlencoding::encode(value);
    urlencoding::encode(&once).into_owned()
}

/// Inverse of [`double_encode`].
pub fn double_decode(value: &str) -> Result<String, FromUtf8Error> {
    let once = urlencoding::decode(value)?;
    Ok(urlencoding::decode(&once)?.into_owned())
}
