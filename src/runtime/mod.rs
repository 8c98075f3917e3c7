//! Runtime glue between CLI parsing, configuration and the form reducer.

pub mod startup;

pub use startup::{load_config, run_generate, RuntimeExit, FAILURE_EXIT_CODE, NO_MATCH_EXIT_CODE};
