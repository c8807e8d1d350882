//! Per-application runtime profiles.
//!
//! A profile is an open set of named string settings. The launcher only
//! reads the keys in [`settings`], but profiles may carry any others.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Setting names understood by the environment composer.
pub mod settings {
    pub const FPS_LIMIT: &str = "fps_limit";
    pub const VSYNC: &str = "vsync";
    pub const VKBASALT: &str = "vkbasalt";
    pub const MANGOHUD: &str = "mangohud";
}

/// Named runtime settings for a single application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuntimeProfile {
    settings: BTreeMap<String, String>,
}

impl RuntimeProfile {
    /// Create an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Value of a setting, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }

    /// Value of a setting, or the empty string when the profile lacks it.
    pub fn setting(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Iterate settings in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.settings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for RuntimeProfile
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            settings: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Lookup table from application identifier to profile.
///
/// The JSON form is an object of objects:
/// `{ "supertuxkart.exe": { "fps_limit": "60" } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileTable {
    profiles: HashMap<String, RuntimeProfile>,
}

impl ProfileTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Insert or replace the profile for an application.
    pub fn insert(&mut self, app: impl Into<String>, profile: RuntimeProfile) {
        self.profiles.insert(app.into(), profile);
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with_profile(mut self, app: impl Into<String>, profile: RuntimeProfile) -> Self {
        self.insert(app, profile);
        self
    }

    /// Exact-match lookup.
    pub fn get(&self, app: &str) -> Option<&RuntimeProfile> {
        self.profiles.get(app)
    }

    /// Overlay `other` on top of this table. Whole profiles are replaced;
    /// settings are never merged key by key.
    pub fn merge(&mut self, other: Self) {
        self.profiles.extend(other.profiles);
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn apps(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}
