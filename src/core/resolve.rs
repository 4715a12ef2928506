//! Registry path to source file resolution.
//!
//! This is textual substitution only: `@/components/Button` becomes
//! `src/components/Button.tsx` with the default settings. No module resolution is done.
//! Once a path starts with the alias, every occurrence of the alias is substituted.

use std::path::PathBuf;

use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    alias_prefix: String,
    alias_root: String,
    extension: String,
}

impl PathResolver {
    pub fn new(
        alias_prefix: impl Into<String>,
        alias_root: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            alias_prefix: alias_prefix.into(),
            alias_root: alias_root.into(),
            extension: extension.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.alias_prefix, &config.alias_root, &config.extension)
    }

    /// Resolve a registry path to the file that should implement it.
    pub fn resolve(&self, registry_path: &str) -> PathBuf {
        let mut resolved = if registry_path.starts_with(&self.alias_prefix) {
            registry_path.replace(&self.alias_prefix, &self.alias_root)
        } else {
            registry_path.to_string()
        };

        if !resolved.ends_with(&self.extension) {
            resolved.push_str(&self.extension);
        }

        PathBuf::from(resolved)
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
