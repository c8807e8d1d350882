//! Domain types shared by every gameframe crate.
//!
//! These are plain data with no infrastructure dependencies.

mod environment;
mod hardware;
mod profile;

pub use environment::{Environment, LaunchDirectives};
pub use hardware::{GpuVendor, HardwareDescriptor, UNKNOWN_OPENGL_VERSION};
pub use profile::{ProfileTable, RuntimeProfile, settings};
