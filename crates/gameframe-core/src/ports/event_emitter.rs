//! Launch event emitter.
//!
//! The orchestrator reports progress through this trait so adapters decide
//! how (and whether) to show it.

use crate::domain::{HardwareDescriptor, LaunchDirectives};

use super::IsolationInvocation;

/// Progress of a single launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchEvent {
    /// Probing finished.
    HardwareDetected(HardwareDescriptor),
    /// A profile lookup finished. `found` is false for unknown applications.
    ProfileResolved { app: String, found: bool },
    /// Dry run: everything was prepared but nothing is launched.
    DryRun {
        directives: LaunchDirectives,
        invocation: IsolationInvocation,
    },
}

/// Trait for emitting launch events.
///
/// # Implementations
///
/// - `NoopLaunchEmitter` - For tests and embedding contexts
/// - Console output in gameframe-cli
pub trait LaunchEventEmitter: Send + Sync {
    /// Emit a launch event. Must not block.
    fn emit(&self, event: LaunchEvent);
}

/// Discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLaunchEmitter;

impl NoopLaunchEmitter {
    pub const fn new() -> Self {
        Self
    }
}

impl LaunchEventEmitter for NoopLaunchEmitter {
    fn emit(&self, _event: LaunchEvent) {}
}
