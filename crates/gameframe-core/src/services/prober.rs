//! Hardware prober - turns diagnostic command output into a descriptor.

use crate::domain::{GpuVendor, HardwareDescriptor, UNKNOWN_OPENGL_VERSION};
use crate::parse::{parse_gpu_vendor, parse_opengl_version};
use crate::ports::{CommandRunner, HardwareProbePort, ProbeCommand};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Best-effort hardware prober.
///
/// Runs the vendor, Vulkan and OpenGL probes one after another. A failed
/// probe degrades only its own field and is logged at debug level.
pub struct HardwareProber {
    runner: Arc<dyn CommandRunner>,
}

impl HardwareProber {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Run a probe command, swallowing any failure.
    async fn capture(&self, command: &ProbeCommand) -> Option<String> {
        match self.runner.run(command).await {
            Ok(output) => Some(output.stdout),
            Err(e) => {
                debug!(command = %command, error = %e, "Probe failed, using default");
                None
            }
        }
    }

    /// Vendor of the first recognised GPU. A failed listing reads as empty.
    pub async fn detect_gpu_vendor(&self) -> GpuVendor {
        let listing = self
            .capture(&ProbeCommand::gpu_listing())
            .await
            .unwrap_or_default();
        parse_gpu_vendor(&listing)
    }

    /// True when the Vulkan query exits successfully. Output is ignored.
    pub async fn detect_vulkan(&self) -> bool {
        self.capture(&ProbeCommand::vulkan_summary()).await.is_some()
    }

    /// OpenGL version string, or `"unknown"`.
    pub async fn detect_opengl_version(&self) -> String {
        self.capture(&ProbeCommand::opengl_info())
            .await
            .and_then(|output| parse_opengl_version(&output))
            .unwrap_or_else(|| UNKNOWN_OPENGL_VERSION.to_string())
    }
}

#[async_trait]
impl HardwareProbePort for HardwareProber {
    async fn probe(&self) -> HardwareDescriptor {
        let gpu_vendor = self.detect_gpu_vendor().await;
        let vulkan_supported = self.detect_vulkan().await;
        let opengl_version = self.detect_opengl_version().await;

        let hw = HardwareDescriptor::new(gpu_vendor, vulkan_supported, opengl_version);
        debug!(
            gpu = %hw.gpu_vendor,
            vulkan = hw.vulkan_supported,
            opengl = %hw.opengl_version,
            "Hardware probe complete"
        );
        hw
    }
}
