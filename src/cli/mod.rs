//! CLI module
//!
//! Commands:
//! - serve: start the HTTP API server
//! - export: render a JSON dump of analyses as a CSV report
//! - stats: aggregate a JSON dump of analyses into summary figures

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{export, run, serve, stats};
pub use errors::{CliError, CliResult};
