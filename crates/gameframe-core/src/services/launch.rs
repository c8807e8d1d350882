//! Launch service - the orchestrator.
//!
//! Steps run strictly in order:
//! validate args → probe hardware → resolve profile → check isolation
//! entry point → compose environment → invoke child.
//! The first failing step ends the launch.

use crate::command_line::LaunchCommand;
use crate::compose::{compose, directives};
use crate::config::LaunchOptions;
use crate::domain::Environment;
use crate::ports::{
    HardwareProbePort, IsolationInvocation, IsolationPort, LaunchError, LaunchEvent,
    LaunchEventEmitter, NoopLaunchEmitter,
};
use std::sync::Arc;
use tracing::{debug, info};

use super::ProfileResolver;

/// How a successful launch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The isolated command ran and exited successfully.
    Completed,
    /// Dry run: the invocation was prepared and reported, not started.
    DryRun,
}

/// Orchestrates one launch through the probe, resolver and isolation ports.
pub struct LaunchService {
    probe: Arc<dyn HardwareProbePort>,
    resolver: ProfileResolver,
    isolation: Arc<dyn IsolationPort>,
    emitter: Arc<dyn LaunchEventEmitter>,
    options: LaunchOptions,
}

impl LaunchService {
    pub fn new(
        probe: Arc<dyn HardwareProbePort>,
        resolver: ProfileResolver,
        isolation: Arc<dyn IsolationPort>,
        options: LaunchOptions,
    ) -> Self {
        Self {
            probe,
            resolver,
            isolation,
            emitter: Arc::new(NoopLaunchEmitter),
            options,
        }
    }

    /// Report progress through `emitter` instead of discarding it.
    #[must_use]
    pub fn with_emitter(mut self, emitter: Arc<dyn LaunchEventEmitter>) -> Self {
        self.emitter = emitter;
        self
    }

    pub fn options(&self) -> &LaunchOptions {
        &self.options
    }

    pub fn resolver(&self) -> &ProfileResolver {
        &self.resolver
    }

    /// Launch `args` inside the isolation entry point.
    ///
    /// `inherited` is the environment the child starts from; the launch
    /// directives are layered on top of a copy of it.
    pub async fn run(
        &self,
        args: Vec<String>,
        inherited: &Environment,
    ) -> Result<LaunchOutcome, LaunchError> {
        let command = LaunchCommand::from_args(args)?;

        let hw = self.probe.probe().await;
        self.emitter.emit(LaunchEvent::HardwareDetected(hw.clone()));

        let app = command.app_identifier();
        let found = self.resolver.lookup(app).is_some();
        let profile = self.resolver.resolve(app);
        debug!(app, found, "Resolved profile");
        self.emitter.emit(LaunchEvent::ProfileResolved {
            app: app.to_string(),
            found,
        });

        let script = &self.options.isolation_script;
        if !self.isolation.is_available(script) {
            return Err(LaunchError::MissingDependency {
                path: script.clone(),
            });
        }

        let invocation = IsolationInvocation {
            shell: self.options.shell.clone(),
            script: script.clone(),
            command_line: command.flatten(self.options.join),
            environment: compose(&hw, &profile, inherited),
        };

        if self.options.dry_run {
            self.emitter.emit(LaunchEvent::DryRun {
                directives: directives(&hw, &profile),
                invocation,
            });
            return Ok(LaunchOutcome::DryRun);
        }

        info!(
            script = %invocation.script.display(),
            command = %invocation.command_line,
            "Launching through isolation script"
        );
        self.isolation.launch(&invocation).await?;
        Ok(LaunchOutcome::Completed)
    }
}
