//! Capture of the launcher's own environment.

use gameframe_core::Environment;
use tracing::debug;

/// Snapshot the current process environment.
///
/// Names and values are kept as OS strings, so variables that are not
/// valid UTF-8 are carried through unchanged.
pub fn inherited_environment() -> Environment {
    let env = Environment::from_vars(std::env::vars_os());
    debug!(vars = env.len(), "Captured inherited environment");
    env
}
