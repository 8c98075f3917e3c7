//! Library crate root re-exporting the sanitizer, template and form modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod config;
pub mod form;
pub mod runtime;
pub mod sanitizer;
pub mod templates;
