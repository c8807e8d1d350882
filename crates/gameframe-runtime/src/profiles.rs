//! File-backed profile source.

use gameframe_core::ProfileTable;
use gameframe_core::ports::{ProfileSource, ProfileSourceError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Profiles read from a JSON file of the form
/// `{ "<app>": { "<setting>": "<value>" } }`.
///
/// The file is read on every `load`; the resolver calls it once.
#[derive(Debug, Clone)]
pub struct JsonProfileFile {
    path: PathBuf,
}

impl JsonProfileFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileSource for JsonProfileFile {
    fn load(&self) -> Result<ProfileTable, ProfileSourceError> {
        let content = fs::read_to_string(&self.path).map_err(|e| ProfileSourceError::Read {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        let table = ProfileTable::from_json(&content).map_err(|e| ProfileSourceError::Parse {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        debug!(path = %self.path.display(), profiles = table.len(), "Read profile file");
        Ok(table)
    }
}
