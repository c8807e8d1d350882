//! Launcher defaults and per-run options.

use std::path::PathBuf;

use crate::command_line::JoinStrategy;

/// Location of the isolation entry point when none is configured.
pub const DEFAULT_ISOLATION_SCRIPT: &str = "/usr/local/bin/gameframe_isolate.sh";

/// Shell used to run the isolation entry point.
pub const DEFAULT_SHELL: &str = "bash";

/// Upper bound for each diagnostic probe, in seconds.
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;

/// Options controlling a single launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    pub isolation_script: PathBuf,
    pub shell: String,
    pub join: JoinStrategy,
    /// Prepare everything but do not start the child.
    pub dry_run: bool,
}

impl LaunchOptions {
    pub fn with_defaults() -> Self {
        Self {
            isolation_script: PathBuf::from(DEFAULT_ISOLATION_SCRIPT),
            shell: DEFAULT_SHELL.to_string(),
            join: JoinStrategy::default(),
            dry_run: false,
        }
    }

    #[must_use]
    pub fn isolation_script(mut self, path: impl Into<PathBuf>) -> Self {
        self.isolation_script = path.into();
        self
    }

    #[must_use]
    pub fn shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    #[must_use]
    pub const fn join(mut self, join: JoinStrategy) -> Self {
        self.join = join;
        self
    }

    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = LaunchOptions::default();
        assert_eq!(
            options.isolation_script,
            PathBuf::from("/usr/local/bin/gameframe_isolate.sh")
        );
        assert_eq!(options.shell, "bash");
        assert_eq!(options.join, JoinStrategy::Quoted);
        assert!(!options.dry_run);
    }

    #[test]
    fn test_builder() {
        let options = LaunchOptions::with_defaults()
            .isolation_script("/opt/isolate.sh")
            .shell("sh")
            .join(JoinStrategy::Raw)
            .dry_run(true);
        assert_eq!(options.isolation_script, PathBuf::from("/opt/isolate.sh"));
        assert_eq!(options.shell, "sh");
        assert_eq!(options.join, JoinStrategy::Raw);
        assert!(options.dry_run);
    }
}
