//! Command runner port for diagnostic probes.
//!
//! The prober never spawns processes itself. It asks a `CommandRunner`
//! to execute a [`ProbeCommand`] and receives captured stdout or a
//! [`ProbeError`]. Implementations live in adapters (gameframe-runtime).

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// An external diagnostic command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ProbeCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// PCI device listing used for vendor detection.
    pub fn gpu_listing() -> Self {
        Self::new("lspci", ["-v"])
    }

    /// Vulkan capability query.
    pub fn vulkan_summary() -> Self {
        Self::new("vulkaninfo", ["--summary"])
    }

    /// OpenGL driver information.
    pub fn opengl_info() -> Self {
        Self::new("glxinfo", std::iter::empty::<String>())
    }
}

impl fmt::Display for ProbeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Captured output of a command that exited successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
}

impl CommandOutput {
    pub fn new(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
        }
    }
}

/// Why a probe command produced no usable output.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The program could not be started (usually not installed).
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran but exited unsuccessfully.
    #[error("{command} exited with {status}")]
    Exit { command: String, status: String },

    /// The program did not finish in time and was killed.
    #[error("{command} timed out after {timeout:?}")]
    Timeout { command: String, timeout: Duration },
}

/// Port for executing diagnostic commands.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` to completion and capture its stdout.
    ///
    /// Returns `Ok` only for a zero exit status.
    async fn run(&self, command: &ProbeCommand) -> Result<CommandOutput, ProbeError>;
}
