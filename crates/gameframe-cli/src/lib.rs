//! Command-line launcher for gameframe.
//!
//! Parses options, wires the runtime adapters into the core launch service
//! and reports failures as process exit codes.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary entry point only
use dotenvy as _;
use tokio as _;

pub mod bootstrap;
pub mod error;
pub mod logging;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use error::CliError;
pub use parser::Cli;

use gameframe_core::LaunchOutcome;
use gameframe_runtime::inherited_environment;

/// Run one launch as described by `cli`.
///
/// An empty command is rejected before any configuration is loaded or any
/// subprocess is started.
pub async fn run(cli: Cli) -> Result<LaunchOutcome, CliError> {
    if cli.command.is_empty() {
        return Err(CliError::Usage);
    }

    let context = bootstrap(&CliConfig::from_cli(&cli))
        .map_err(|err| CliError::Config(format!("{err:#}")))?;
    let inherited = inherited_environment();
    Ok(context.launcher.run(cli.command, &inherited).await?)
}
