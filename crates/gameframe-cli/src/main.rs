//! CLI entry point.
//!
//! Loads `.env`, parses arguments, installs logging and hands off to
//! [`gameframe_cli::run`]. Every failure, including a rejected command
//! line, exits with 1.

use std::process::ExitCode;

use clap::Parser;

use gameframe_cli::error::parse_exit_code;
use gameframe_cli::logging::init_tracing;
use gameframe_cli::presentation::print_usage;
use gameframe_cli::{Cli, CliError};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal
    dotenvy::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout, parse errors to stderr
            err.print().ok();
            return ExitCode::from(parse_exit_code(&err));
        }
    };
    init_tracing(cli.verbose);

    match gameframe_cli::run(cli).await {
        Ok(outcome) => {
            tracing::debug!(?outcome, "Launch finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            if matches!(err, CliError::Usage) {
                print_usage();
            } else {
                eprintln!("Error: {err}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}
