//! Host graphics hardware descriptor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder reported when the OpenGL version could not be determined.
pub const UNKNOWN_OPENGL_VERSION: &str = "unknown";

/// GPU vendor detected on the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GpuVendor {
    /// No known vendor marker was found, or the listing command failed.
    #[default]
    Unknown,
    Nvidia,
    Amd,
    Intel,
}

impl GpuVendor {
    /// Lowercase name as exported to launched processes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Nvidia => "nvidia",
            Self::Amd => "amd",
            Self::Intel => "intel",
        }
    }
}

impl fmt::Display for GpuVendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Graphics capabilities of the host, produced fresh by every probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareDescriptor {
    /// Vendor of the first recognised GPU.
    pub gpu_vendor: GpuVendor,
    /// Whether the Vulkan capability query succeeded.
    pub vulkan_supported: bool,
    /// OpenGL version string, or [`UNKNOWN_OPENGL_VERSION`].
    pub opengl_version: String,
}

impl HardwareDescriptor {
    /// Create a descriptor from its three probe results.
    pub fn new(
        gpu_vendor: GpuVendor,
        vulkan_supported: bool,
        opengl_version: impl Into<String>,
    ) -> Self {
        Self {
            gpu_vendor,
            vulkan_supported,
            opengl_version: opengl_version.into(),
        }
    }

    /// Descriptor reported when every probe failed.
    pub fn unknown() -> Self {
        Self::new(GpuVendor::Unknown, false, UNKNOWN_OPENGL_VERSION)
    }
}

impl Default for HardwareDescriptor {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for HardwareDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GPU: {}, Vulkan: {}, OpenGL: {}",
            self.gpu_vendor, self.vulkan_supported, self.opengl_version
        )
    }
}
