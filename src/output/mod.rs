//! Result rendering for the CLI.

mod config;
mod formatter;

pub use config::{OutputConfig, OutputMode};
pub use formatter::OutputFormatter;
