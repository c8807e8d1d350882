//! Parsers for diagnostic tool output.
//!
//! Each parser is a pure function over captured stdout so it can be tested
//! against fixture text without running the real tools.

use crate::domain::GpuVendor;

/// One vendor detection rule: if `marker` occurs in the listing, the
/// host is reported as `vendor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorRule {
    pub marker: &'static str,
    pub vendor: GpuVendor,
}

/// Vendor rules in priority order. The first rule whose marker appears
/// anywhere in the output wins, regardless of where it appears.
pub const VENDOR_RULES: &[VendorRule] = &[
    VendorRule {
        marker: "NVIDIA",
        vendor: GpuVendor::Nvidia,
    },
    VendorRule {
        marker: "AMD",
        vendor: GpuVendor::Amd,
    },
    VendorRule {
        marker: "Intel",
        vendor: GpuVendor::Intel,
    },
];

/// Label identifying the version line in `glxinfo` output.
pub const OPENGL_VERSION_LABEL: &str = "OpenGL version";

/// Detect the GPU vendor from a hardware listing (case-sensitive).
pub fn parse_gpu_vendor(listing: &str) -> GpuVendor {
    parse_gpu_vendor_with(VENDOR_RULES, listing)
}

/// Detect the GPU vendor using a caller-supplied rule list.
pub fn parse_gpu_vendor_with(rules: &[VendorRule], listing: &str) -> GpuVendor {
    rules
        .iter()
        .find(|rule| listing.contains(rule.marker))
        .map_or(GpuVendor::Unknown, |rule| rule.vendor)
}

/// Extract the OpenGL version from `glxinfo` output.
///
/// Only the first line containing [`OPENGL_VERSION_LABEL`] is considered.
/// The version is the text after that line's first colon, trimmed.
/// Returns `None` when no line matches, the line has no colon, or the
/// remainder is blank.
pub fn parse_opengl_version(output: &str) -> Option<String> {
    let line = output
        .lines()
        .find(|line| line.contains(OPENGL_VERSION_LABEL))?;
    let (_, remainder) = line.split_once(':')?;
    let version = remainder.trim();
    (!version.is_empty()).then(|| version.to_string())
}
