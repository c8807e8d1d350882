//! Core services - the launcher's decision-making layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete implementations.

mod launch;
mod prober;
mod resolver;

pub use launch::{LaunchOutcome, LaunchService};
pub use prober::HardwareProber;
pub use resolver::ProfileResolver;
