//! CLI-specific error types and mappings.
//!
//! This module maps launch and configuration failures to exit codes and
//! user-facing messages.

use clap::error::ErrorKind;
use gameframe_core::LaunchError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// No command was given.
    #[error("no command given")]
    Usage,

    /// The isolation entry point is not installed.
    #[error("{0}")]
    MissingDependency(String),

    /// Starting, waiting for, or running the isolated command failed.
    #[error("{0}")]
    Launch(String),

    /// Configuration error (unreadable profile file, etc.).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to the process exit code.
    ///
    /// Every launcher failure exits with 1 so wrapper scripts can treat
    /// them uniformly.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage | Self::MissingDependency(_) | Self::Launch(_) | Self::Config(_) => 1,
        }
    }
}

impl From<LaunchError> for CliError {
    fn from(err: LaunchError) -> Self {
        match err {
            LaunchError::Usage => Self::Usage,
            LaunchError::MissingDependency { .. } => Self::MissingDependency(err.to_string()),
            LaunchError::Spawn(_) | LaunchError::Wait(_) | LaunchError::ChildFailed { .. } => {
                Self::Launch(err.to_string())
            }
        }
    }
}

/// Exit code for a rejected command line.
///
/// Help and version requests succeed; every other parse failure is a
/// configuration error.
pub fn parse_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}
