//! Name to `ToolConfig` lookup tables.

use crate::tool::ToolConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Read-only table of tool configs keyed by name.
///
/// Built once at startup and passed to whatever needs it. Iteration order is
/// sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    entries: BTreeMap<String, ToolConfig>,
}

/// Registry of toggleable tools, keyed by tool id.
pub type ToolRegistry = Registry;

/// Registry of mutually exclusive contrast filters, keyed by filter name.
pub type FilterRegistry = Registry;

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry keyed by each config's own id
    pub fn from_tools(configs: impl IntoIterator<Item = ToolConfig>) -> Self {
        let mut registry = Self::new();
        for config in configs {
            registry.insert(config.id.clone(), config);
        }
        registry
    }

    /// Insert or replace an entry, returning the replaced config
    pub fn insert(&mut self, name: impl Into<String>, config: ToolConfig) -> Option<ToolConfig> {
        self.entries.insert(name.into(), config)
    }

    /// Merge another registry in; its entries win on conflict
    pub fn extend(&mut self, other: Registry) {
        self.entries.extend(other.entries);
    }

    /// Look up an entry
    pub fn get(&self, name: &str) -> Option<&ToolConfig> {
        self.entries.get(name)
    }

    /// Whether the name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over `(name, config)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ToolConfig)> {
        self.entries.iter().map(|(name, config)| (name.as_str(), config))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, ToolConfig)> for Registry {
    fn from_iter<T: IntoIterator<Item = (String, ToolConfig)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
