//! Ordered environment variable sets.
//!
//! Both types keep insertion order and hold each key at most once. Setting
//! an existing key overwrites its value in place.

use std::ffi::{OsStr, OsString};
use std::fmt;

/// Insert or overwrite `key`, keeping the position of an existing entry.
fn upsert<K: PartialEq, V>(entries: &mut Vec<(K, V)>, key: K, value: V) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some(entry) => entry.1 = value,
        None => entries.push((key, value)),
    }
}

/// Environment assignments derived for one launch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchDirectives {
    entries: Vec<(String, String)>,
}

impl LaunchDirectives {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directive. Last write wins.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        upsert(&mut self.entries, key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for LaunchDirectives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            writeln!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

/// A complete process environment.
///
/// Entries are OS strings so inherited variables that are not valid UTF-8
/// reach the child byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    entries: Vec<(OsString, OsString)>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an environment from key/value pairs. Later duplicates win.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        let mut env = Self::new();
        for (key, value) in vars {
            env.set(key, value);
        }
        env
    }

    pub fn set(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) {
        upsert(&mut self.entries, key.into(), value.into());
    }

    /// Overlay every directive onto this environment.
    pub fn apply(&mut self, directives: &LaunchDirectives) {
        for (key, value) in directives.iter() {
            self.set(key, value);
        }
    }

    /// Raw value of `key`.
    pub fn get_os(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        let key = key.as_ref();
        self.entries
            .iter()
            .find(|(k, _)| k.as_os_str() == key)
            .map(|(_, v)| v.as_os_str())
    }

    /// Value of `key`; `None` when absent or not valid UTF-8.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_os(key).and_then(OsStr::to_str)
    }

    pub fn contains_key(&self, key: impl AsRef<OsStr>) -> bool {
        self.get_os(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }
}
