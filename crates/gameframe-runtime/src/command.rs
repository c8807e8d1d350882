//! Tokio-backed command runner for diagnostic probes.

use async_trait::async_trait;
use gameframe_core::DEFAULT_PROBE_TIMEOUT_SECS;
use gameframe_core::ports::{CommandOutput, CommandRunner, ProbeCommand, ProbeError};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::trace;

/// Runs probe commands with a hard timeout.
///
/// Stdin is closed and stderr discarded; only stdout is captured. A command
/// that outlives the timeout is killed and reported as `ProbeError::Timeout`.
#[derive(Debug, Clone, Copy)]
pub struct TokioCommandRunner {
    timeout: Duration,
}

impl TokioCommandRunner {
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for TokioCommandRunner {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS))
    }
}

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(&self, command: &ProbeCommand) -> Result<CommandOutput, ProbeError> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        trace!(command = %command, "Running probe");

        // Dropping the output future on timeout drops the child, which kills it.
        let output = match timeout(self.timeout, cmd.output()).await {
            Ok(result) => result.map_err(|source| ProbeError::Spawn {
                command: command.to_string(),
                source,
            })?,
            Err(_) => {
                return Err(ProbeError::Timeout {
                    command: command.to_string(),
                    timeout: self.timeout,
                });
            }
        };

        if !output.status.success() {
            return Err(ProbeError::Exit {
                command: command.to_string(),
                status: output.status.to_string(),
            });
        }

        Ok(CommandOutput::new(
            String::from_utf8_lossy(&output.stdout).into_owned(),
        ))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::Instant;

    fn sh(script: &str) -> ProbeCommand {
        ProbeCommand::new("sh", ["-c", script])
    }

    #[tokio::test]
    async fn test_captures_stdout() {
        let runner = TokioCommandRunner::default();
        let output = runner
            .run(&sh("echo 'OpenGL version string: 4.6'"))
            .await
            .unwrap();
        assert_eq!(output.stdout, "OpenGL version string: 4.6\n");
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_error() {
        let runner = TokioCommandRunner::default();
        let err = runner.run(&sh("echo partial; exit 3")).await.unwrap_err();
        assert!(matches!(err, ProbeError::Exit { .. }), "{err}");
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let runner = TokioCommandRunner::default();
        let err = runner
            .run(&ProbeCommand::new("gameframe-no-such-tool", ["--summary"]))
            .await
            .unwrap_err();
        assert!(matches!(err, ProbeError::Spawn { .. }), "{err}");
    }

    #[tokio::test]
    async fn test_timeout_kills_slow_command() {
        let runner = TokioCommandRunner::new(Duration::from_millis(200));
        let started = Instant::now();

        let err = runner.run(&sh("sleep 30")).await.unwrap_err();

        assert!(matches!(err, ProbeError::Timeout { .. }), "{err}");
        assert!(started.elapsed() < Duration::from_secs(10));
    }
}
