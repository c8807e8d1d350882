//! Core domain for gameframe: hardware descriptors, profiles, environment
//! composition and the launch orchestrator.
//!
//! Everything with side effects sits behind a port in [`ports`]; the
//! adapters live in `gameframe-runtime`.

#![deny(unused_crate_dependencies)]

pub mod command_line;
pub mod compose;
pub mod config;
pub mod domain;
pub mod parse;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use command_line::{JoinStrategy, LaunchCommand, app_identifier};
pub use compose::{DIRECTIVE_KEYS, compose, directives};
pub use config::{
    DEFAULT_ISOLATION_SCRIPT, DEFAULT_PROBE_TIMEOUT_SECS, DEFAULT_SHELL, LaunchOptions,
};
pub use domain::{
    Environment, GpuVendor, HardwareDescriptor, LaunchDirectives, ProfileTable, RuntimeProfile,
    UNKNOWN_OPENGL_VERSION,
};
pub use ports::{
    BuiltinProfiles, CommandOutput, CommandRunner, HardwareProbePort, IsolationInvocation,
    IsolationPort, LaunchError, LaunchEvent, LaunchEventEmitter, LayeredProfiles,
    NoopLaunchEmitter, ProbeCommand, ProbeError, ProfileSource, ProfileSourceError,
};
pub use services::{HardwareProber, LaunchOutcome, LaunchService, ProfileResolver};

// Silence unused dev-dependency warnings; mockall is used by tests/
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
