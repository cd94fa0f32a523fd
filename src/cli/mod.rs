//! CLI module for the client registration service
//!
//! Provides subcommands:
//! - `serve`: run the HTTP API

pub mod serve;

use clap::{Parser, Subcommand};

/// Jobsearch client registration service
#[derive(Parser)]
#[command(name = "jobsearch-clients")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["jobsearch-clients", "serve"]).unwrap();
        let Command::Serve(args) = cli.command;
        assert!(args.port.is_none());
    }

    #[test]
    fn test_parse_serve_with_port() {
        let cli =
            Cli::try_parse_from(["jobsearch-clients", "serve", "--port", "9000"]).unwrap();
        let Command::Serve(args) = cli.command;
        assert_eq!(args.port, Some(9000));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["jobsearch-clients"]).is_err());
    }
}
