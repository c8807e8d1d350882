//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `tokio::process` or filesystem types in any signature
//! - Probe ports never fail; launch ports return `LaunchError`

pub mod command_runner;
pub mod event_emitter;
pub mod hardware_probe;
pub mod isolation;
pub mod profile_source;

use std::path::PathBuf;
use thiserror::Error;

pub use command_runner::{CommandOutput, CommandRunner, ProbeCommand, ProbeError};
pub use event_emitter::{LaunchEvent, LaunchEventEmitter, NoopLaunchEmitter};
pub use hardware_probe::HardwareProbePort;
pub use isolation::{IsolationInvocation, IsolationPort};
pub use profile_source::{BuiltinProfiles, LayeredProfiles, ProfileSource, ProfileSourceError};

/// Fatal launch failures.
///
/// Every variant terminates the launch; there is no retry or partial success.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// No command was given.
    #[error("no command given")]
    Usage,

    /// The isolation entry point is not installed.
    #[error("Isolation script not found at {}", path.display())]
    MissingDependency { path: PathBuf },

    /// The isolation entry point could not be started.
    #[error("Error running isolation script: {0}")]
    Spawn(#[source] std::io::Error),

    /// Waiting for the isolation entry point failed.
    #[error("Error waiting for isolation script: {0}")]
    Wait(#[source] std::io::Error),

    /// The isolated command finished unsuccessfully.
    #[error("Game launch failed with status: {status}")]
    ChildFailed { status: String },
}
