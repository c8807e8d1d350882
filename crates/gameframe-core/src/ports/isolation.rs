//! Isolation entry point port.
//!
//! The isolation script sandboxes the launched application. Gameframe only
//! checks that it exists and runs it with the composed environment.

use crate::domain::Environment;
use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};

use super::LaunchError;

/// A fully built invocation: `<shell> <script> <command_line>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsolationInvocation {
    pub shell: String,
    pub script: PathBuf,
    /// The launched command, flattened into the single argument the script expects.
    pub command_line: String,
    /// Complete environment for the child. Replaces the launcher's own.
    pub environment: Environment,
}

impl IsolationInvocation {
    /// Program and arguments, in order.
    pub fn argv(&self) -> [String; 3] {
        [
            self.shell.clone(),
            self.script.to_string_lossy().into_owned(),
            self.command_line.clone(),
        ]
    }
}

impl fmt::Display for IsolationInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:?}",
            self.shell,
            self.script.display(),
            self.command_line
        )
    }
}

/// Port for running the isolation entry point.
#[async_trait]
pub trait IsolationPort: Send + Sync {
    /// Whether the entry point exists on this host.
    fn is_available(&self, script: &Path) -> bool;

    /// Run the invocation with inherited stdio and wait for it to finish.
    ///
    /// Returns `Ok` only when the child exits successfully.
    async fn launch(&self, invocation: &IsolationInvocation) -> Result<(), LaunchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_argv() {
        let invocation = IsolationInvocation {
            shell: "bash".to_string(),
            script: PathBuf::from("/usr/local/bin/gameframe_isolate.sh"),
            command_line: "wine 'My Game.exe'".to_string(),
            environment: Environment::new(),
        };
        assert_eq!(
            invocation.argv(),
            [
                "bash".to_string(),
                "/usr/local/bin/gameframe_isolate.sh".to_string(),
                "wine 'My Game.exe'".to_string(),
            ]
        );
        assert_eq!(
            invocation.to_string(),
            r#"bash /usr/local/bin/gameframe_isolate.sh "wine 'My Game.exe'""#
        );
    }
}
