//! CLI argument definitions using clap
//!
//! Commands:
//! - factstore serve [--host <host>] [--port <port>]
//! - factstore export --input <analyses.json> [--output <report.csv>]
//! - factstore stats --input <analyses.json>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::http_server::HttpServerConfig;

/// factstore - a validated record store for fact-check analyses
#[derive(Parser, Debug)]
#[command(name = "factstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the analysis API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = HttpServerConfig::DEFAULT_PORT)]
        port: u16,
    },

    /// Render a JSON dump of analyses as a CSV report
    Export {
        /// Path to a JSON array of analysis records
        #[arg(long)]
        input: PathBuf,

        /// Where to write the report; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print summary statistics for a JSON dump of analyses
    Stats {
        /// Path to a JSON array of analysis records
        #[arg(long)]
        input: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["factstore", "serve"]).unwrap();
        match cli.command {
            Command::Serve { host, port } => {
                assert_eq!(host, "0.0.0.0");
                assert_eq!(port, 5000);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_export_requires_input() {
        assert!(Cli::try_parse_from(["factstore", "export"]).is_err());

        let cli =
            Cli::try_parse_from(["factstore", "export", "--input", "dump.json"]).unwrap();
        match cli.command {
            Command::Export { input, output } => {
                assert_eq!(input, PathBuf::from("dump.json"));
                assert_eq!(output, None);
            }
            _ => panic!("expected export"),
        }
    }
}
