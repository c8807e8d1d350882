//! Profile resolver - application identifier to runtime profile.

use crate::domain::{ProfileTable, RuntimeProfile};
use crate::ports::{ProfileSource, ProfileSourceError};
use tracing::debug;

/// Exact-match profile lookup over a table fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct ProfileResolver {
    table: ProfileTable,
}

impl ProfileResolver {
    pub fn new(table: ProfileTable) -> Self {
        Self { table }
    }

    /// Build a resolver from a profile source.
    pub fn from_source(source: &dyn ProfileSource) -> Result<Self, ProfileSourceError> {
        let table = source.load()?;
        debug!(profiles = table.len(), "Loaded profile table");
        Ok(Self::new(table))
    }

    /// Profile for `app`, or an empty profile when none is registered.
    pub fn resolve(&self, app: &str) -> RuntimeProfile {
        self.lookup(app).cloned().unwrap_or_default()
    }

    /// Profile for `app` if one is registered.
    pub fn lookup(&self, app: &str) -> Option<&RuntimeProfile> {
        self.table.get(app)
    }

    pub fn table(&self) -> &ProfileTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings;
    use crate::ports::BuiltinProfiles;

    fn builtin() -> ProfileResolver {
        ProfileResolver::from_source(&BuiltinProfiles).unwrap()
    }

    #[test]
    fn test_resolve_known_app() {
        let profile = builtin().resolve("supertuxkart.exe");
        assert_eq!(profile.setting(settings::FPS_LIMIT), "60");
        assert_eq!(profile.setting(settings::VSYNC), "1");
        assert_eq!(profile.setting(settings::VKBASALT), "1");
        assert_eq!(profile.setting(settings::MANGOHUD), "1");
    }

    #[test]
    fn test_resolve_unknown_app_is_empty() {
        let resolver = builtin();
        assert!(resolver.resolve("unknownapp.exe").is_empty());
        assert!(resolver.lookup("unknownapp.exe").is_none());
    }

    #[test]
    fn test_no_fuzzy_matching() {
        let resolver = builtin();
        assert!(resolver.resolve("SUPERTUXKART.EXE").is_empty());
        assert!(resolver.resolve("supertuxkart").is_empty());
        assert!(resolver.resolve("/games/supertuxkart.exe").is_empty());
    }

    #[test]
    fn test_default_resolver_has_no_profiles() {
        assert!(ProfileResolver::default().resolve("supertuxkart.exe").is_empty());
    }
}
