//! Profile source port.
//!
//! A `ProfileSource` produces the lookup table the resolver is built from.
//! Sources are read once at startup; the resolver never reloads.

use crate::domain::{ProfileTable, RuntimeProfile, settings};
use std::path::PathBuf;
use thiserror::Error;

/// Errors loading a profile table.
#[derive(Debug, Error)]
pub enum ProfileSourceError {
    /// The backing file could not be read.
    #[error("Failed to read profile file {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    /// The backing data is not a valid profile table.
    #[error("Invalid profile file {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
}

/// Port for supplying application profiles.
pub trait ProfileSource: Send + Sync {
    fn load(&self) -> Result<ProfileTable, ProfileSourceError>;
}

/// The profiles compiled into the launcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProfiles;

impl BuiltinProfiles {
    pub const fn new() -> Self {
        Self
    }

    /// The embedded seed table.
    pub fn table() -> ProfileTable {
        ProfileTable::new().with_profile(
            "supertuxkart.exe",
            RuntimeProfile::new()
                .with_setting(settings::FPS_LIMIT, "60")
                .with_setting(settings::VSYNC, "1")
                .with_setting(settings::VKBASALT, "1")
                .with_setting(settings::MANGOHUD, "1"),
        )
    }
}

impl ProfileSource for BuiltinProfiles {
    fn load(&self) -> Result<ProfileTable, ProfileSourceError> {
        Ok(Self::table())
    }
}

/// Stack of sources where later layers replace earlier profiles.
#[derive(Default)]
pub struct LayeredProfiles {
    layers: Vec<Box<dyn ProfileSource>>,
}

impl LayeredProfiles {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_layer(mut self, source: impl ProfileSource + 'static) -> Self {
        self.layers.push(Box::new(source));
        self
    }
}

impl ProfileSource for LayeredProfiles {
    fn load(&self) -> Result<ProfileTable, ProfileSourceError> {
        let mut table = ProfileTable::new();
        for layer in &self.layers {
            table.merge(layer.load()?);
        }
        Ok(table)
    }
}
