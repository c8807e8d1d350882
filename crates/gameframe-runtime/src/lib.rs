//! OS-level adapters for gameframe: probe command execution, the profile
//! file source and the isolation script launcher.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod command;
mod env;
mod isolation;
mod profiles;
pub mod system;

pub use command::TokioCommandRunner;
pub use env::inherited_environment;
pub use isolation::ShellIsolationLauncher;
pub use profiles::JsonProfileFile;
pub use system::DefaultHardwareProbe;

// Silence unused dev-dependency warnings; tokio-test is used by tests/
#[cfg(test)]
use tokio_test as _;
