//! Hardware probe port.
//!
//! # Design Notes
//!
//! - Core owns the trait and the prober logic (`services::HardwareProber`)
//! - Runtime owns command execution
//! - CLI injects the probe via bootstrap

use crate::domain::HardwareDescriptor;
use async_trait::async_trait;

/// Port for detecting host graphics hardware.
///
/// Probing is best-effort and never fails: anything that cannot be
/// determined is reported with its unknown/false default.
#[async_trait]
pub trait HardwareProbePort: Send + Sync {
    async fn probe(&self) -> HardwareDescriptor;
}
