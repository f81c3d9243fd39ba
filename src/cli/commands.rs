//! CLI command implementations
//!
//! `serve` blocks on the async server; `export` and `stats` are one-shot
//! commands over a JSON dump of analysis records (the same array shape the
//! GET /api/analyses endpoint returns).

use std::fs;
use std::path::Path;

use tokio::runtime::Runtime;

use crate::export::to_delimited_text;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{Logger, Severity};
use crate::schema::Analysis;
use crate::stats::StatsSummary;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the matching command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Serve { host, port } => serve(host, port),
        Command::Export { input, output } => export(&input, output.as_deref()),
        Command::Stats { input } => stats(&input),
    }
}

/// Start the HTTP API server and block until it exits
pub fn serve(host: String, port: u16) -> CliResult<()> {
    let config = HttpServerConfig {
        host,
        port,
        cors_origins: Vec::new(),
    };
    let server = HttpServer::with_config(config);

    let runtime = Runtime::new()?;
    runtime.block_on(server.start())?;
    Ok(())
}

/// Render a dump of analyses as a CSV report
pub fn export(input: &Path, output: Option<&Path>) -> CliResult<()> {
    let records = read_dump(input)?;
    let report = to_delimited_text(&records);

    match output {
        Some(path) => {
            fs::write(path, &report).map_err(|e| CliError::io(path, e))?;
            Logger::log(
                Severity::Info,
                "export_written",
                &[
                    ("path", &path.display().to_string()),
                    ("records", &records.len().to_string()),
                ],
            );
        }
        None => println!("{}", report),
    }
    Ok(())
}

/// Print summary statistics for a dump of analyses
pub fn stats(input: &Path) -> CliResult<()> {
    let records = read_dump(input)?;
    let summary = StatsSummary::from_records(&records);

    // Summary is machine-readable output, not a log event
    let json = serde_json::to_string_pretty(&summary)
        .map_err(|e| CliError::invalid_dump(input, e))?;
    println!("{}", json);
    Ok(())
}

fn read_dump(path: &Path) -> CliResult<Vec<Analysis>> {
    let content = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| CliError::invalid_dump(path, e))
}
