//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Profile sources (built-in table plus optional JSON file)
//! - Hardware probe and isolation launcher (via gameframe-runtime)
//! - Launch service (via gameframe-core)

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use gameframe_core::{
    BuiltinProfiles, JoinStrategy, LaunchOptions, LaunchService, LayeredProfiles, ProfileResolver,
};
use gameframe_runtime::{DefaultHardwareProbe, JsonProfileFile, ShellIsolationLauncher};
use tracing::debug;

use crate::parser::Cli;
use crate::presentation::ConsoleEmitter;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub isolation_script: PathBuf,
    pub shell: String,
    /// Optional JSON profile file layered over the built-ins.
    pub profiles: Option<PathBuf>,
    /// Bound on each hardware probe command.
    pub probe_timeout: Duration,
    pub join: JoinStrategy,
    pub dry_run: bool,
    /// Print extra progress lines.
    pub verbose: bool,
}

impl CliConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            isolation_script: cli.isolate_script.clone(),
            shell: cli.shell.clone(),
            profiles: cli.profiles.clone(),
            probe_timeout: Duration::from_secs(cli.probe_timeout),
            join: if cli.raw_join {
                JoinStrategy::Raw
            } else {
                JoinStrategy::Quoted
            },
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        }
    }

    fn launch_options(&self) -> LaunchOptions {
        LaunchOptions::with_defaults()
            .isolation_script(self.isolation_script.clone())
            .shell(self.shell.clone())
            .join(self.join)
            .dry_run(self.dry_run)
    }
}

/// Fully composed context for a launch.
pub struct CliContext {
    pub launcher: LaunchService,
}

/// Wire the launch service from `config`.
///
/// Fails only when the profile file cannot be read or parsed.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let mut profiles = LayeredProfiles::new().with_layer(BuiltinProfiles);
    if let Some(path) = &config.profiles {
        debug!(path = %path.display(), "Layering profile file over built-ins");
        profiles = profiles.with_layer(JsonProfileFile::new(path.clone()));
    }
    let resolver =
        ProfileResolver::from_source(&profiles).context("Failed to load launch profiles")?;

    let launcher = LaunchService::new(
        Arc::new(DefaultHardwareProbe::new(config.probe_timeout)),
        resolver,
        Arc::new(ShellIsolationLauncher),
        config.launch_options(),
    )
    .with_emitter(Arc::new(ConsoleEmitter::new(config.verbose)));

    Ok(CliContext { launcher })
}
