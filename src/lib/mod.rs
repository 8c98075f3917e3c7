//! Shared library modules providing error types, percent-encoding helpers, and telemetry initialization.

pub mod encoding;
pub mod errors;
pub mod telemetry;
