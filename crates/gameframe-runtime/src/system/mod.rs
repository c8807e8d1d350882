//! Hardware probe implementation for gameframe-runtime.
//!
//! This module provides the `DefaultHardwareProbe` which implements
//! `HardwareProbePort` from gameframe-core by running the real diagnostic
//! tools (`lspci`, `vulkaninfo`, `glxinfo`) through a timed command runner.

use async_trait::async_trait;
use gameframe_core::ports::HardwareProbePort;
use gameframe_core::{HardwareDescriptor, HardwareProber};
use std::sync::Arc;
use std::time::Duration;

use crate::command::TokioCommandRunner;

/// Default implementation of `HardwareProbePort`.
///
/// It should be constructed in the CLI bootstrap and handed to the launch
/// service.
///
/// # Example
///
/// ```ignore
/// use gameframe_runtime::DefaultHardwareProbe;
/// use gameframe_core::ports::HardwareProbePort;
///
/// let probe = DefaultHardwareProbe::new(Duration::from_secs(5));
/// let hw = probe.probe().await;
/// ```
pub struct DefaultHardwareProbe {
    prober: HardwareProber,
}

impl DefaultHardwareProbe {
    /// Create a probe whose every command is bounded by `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self {
            prober: HardwareProber::new(Arc::new(TokioCommandRunner::new(timeout))),
        }
    }
}

impl Default for DefaultHardwareProbe {
    fn default() -> Self {
        Self {
            prober: HardwareProber::new(Arc::new(TokioCommandRunner::default())),
        }
    }
}

#[async_trait]
impl HardwareProbePort for DefaultHardwareProbe {
    async fn probe(&self) -> HardwareDescriptor {
        self.prober.probe().await
    }
}
