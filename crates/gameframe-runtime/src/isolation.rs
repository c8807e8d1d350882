//! Isolation entry point launcher.

use async_trait::async_trait;
use gameframe_core::ports::{IsolationInvocation, IsolationPort, LaunchError};
use std::io;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

/// Runs the isolation script through a shell with inherited stdio.
///
/// The child receives exactly the invocation's environment; nothing else
/// from the launcher's own environment leaks through.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellIsolationLauncher;

impl ShellIsolationLauncher {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl IsolationPort for ShellIsolationLauncher {
    fn is_available(&self, script: &Path) -> bool {
        match std::fs::metadata(script) {
            Ok(_) => true,
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            // Only absence is fatal; let the shell report anything else.
            Err(e) => {
                warn!(script = %script.display(), error = %e, "Could not stat isolation script");
                true
            }
        }
    }

    async fn launch(&self, invocation: &IsolationInvocation) -> Result<(), LaunchError> {
        let mut cmd = Command::new(&invocation.shell);
        cmd.arg(&invocation.script)
            .arg(&invocation.command_line)
            .env_clear()
            .envs(invocation.environment.iter())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = cmd.spawn().map_err(LaunchError::Spawn)?;
        debug!(pid = ?child.id(), "Isolation script started");

        let status = child.wait().await.map_err(LaunchError::Wait)?;
        if !status.success() {
            return Err(LaunchError::ChildFailed {
                status: status.to_string(),
            });
        }

        debug!(%status, "Isolation script finished");
        Ok(())
    }
}
