//! Console output for the launcher.
//!
//! Status and dry-run output go to stdout; logs go to stderr.

use gameframe_core::{
    HardwareDescriptor, IsolationInvocation, LaunchDirectives, LaunchEvent, LaunchEventEmitter,
};

use crate::parser::{USAGE, USAGE_EXAMPLE};

/// Status line printed after probing.
pub fn format_hardware(hw: &HardwareDescriptor) -> String {
    format!("Detected {hw}")
}

/// Profile lookup result, shown with `--verbose`.
pub fn format_profile(app: &str, found: bool) -> String {
    if found {
        format!("Using profile for {app}")
    } else {
        format!("No profile for {app}; profile settings left empty")
    }
}

/// Dry-run report: the launch directives, then the command that would run.
pub fn format_dry_run(directives: &LaunchDirectives, invocation: &IsolationInvocation) -> String {
    format!("{directives}Would run: {invocation}")
}

pub fn print_usage() {
    println!("{USAGE}");
    println!("{USAGE_EXAMPLE}");
}

/// Emitter that prints launch progress to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleEmitter {
    verbose: bool,
}

impl ConsoleEmitter {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl LaunchEventEmitter for ConsoleEmitter {
    fn emit(&self, event: LaunchEvent) {
        match event {
            LaunchEvent::HardwareDetected(hw) => println!("{}", format_hardware(&hw)),
            LaunchEvent::ProfileResolved { app, found } => {
                if self.verbose {
                    println!("{}", format_profile(&app, found));
                }
            }
            LaunchEvent::DryRun {
                directives,
                invocation,
            } => println!("{}", format_dry_run(&directives, &invocation)),
        }
    }
}
