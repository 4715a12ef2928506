//! Registry document loading.
//!
//! The registry holds two collections, `componentRegistry` and `sectionRegistry`, each
//! mapping a category name to a list of entries. Category and prop order follow the
//! document (serde_json is built with `preserve_order`).

use std::{fmt, fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Props schema declared by a registry entry, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct DeclaredProps(Vec<(String, String)>);

impl DeclaredProps {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, declared)| declared.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, declared)| (name.as_str(), declared.as_str()))
    }
}

impl From<Map<String, Value>> for DeclaredProps {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter()
            .map(|(name, value)| {
                let declared = match value {
                    Value::String(text) => text,
                    // Non-string schema values are compared through their JSON text.
                    other => other.to_string(),
                };
                (name, declared)
            })
            .collect()
    }
}

impl FromIterator<(String, String)> for DeclaredProps {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub props_schema: DeclaredProps,
}

impl Entry {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }

    /// Registry path of the entry, if it names one. Empty paths count as absent.
    pub fn source_path(&self) -> Option<&str> {
        self.path.as_deref().filter(|path| !path.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub entries: Vec<Entry>,
}

/// One of the two top-level registry collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Collection(Vec<Category>);

impl Collection {
    pub fn categories(&self) -> &[Category] {
        &self.0
    }

    pub fn entry_count(&self) -> usize {
        self.0.iter().map(|category| category.entries.len()).sum()
    }
}

impl TryFrom<Map<String, Value>> for Collection {
    type Error = serde_json::Error;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        map.into_iter()
            .map(|(name, entries)| {
                let entries: Vec<Entry> = serde_json::from_value(entries)?;
                Ok(Category { name, entries })
            })
            .collect::<Result<Vec<_>, serde_json::Error>>()
            .map(Collection)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Components,
    Sections,
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionKind::Components => write!(f, "components"),
            CollectionKind::Sections => write!(f, "sections"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registry {
    #[serde(default)]
    pub component_registry: Collection,
    #[serde(default)]
    pub section_registry: Collection,
}

impl Registry {
    /// Collections in the order they are checked.
    pub fn collections(&self) -> [(CollectionKind, &Collection); 2] {
        [
            (CollectionKind::Components, &self.component_registry),
            (CollectionKind::Sections, &self.section_registry),
        ]
    }
}

pub fn parse_registry(content: &str) -> Result<Registry> {
    serde_json::from_str(content).context("Failed to parse registry")
}

pub fn load_registry(path: &Path) -> Result<Registry> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read registry file: {:?}", path))?;
    parse_registry(&content)
        .with_context(|| format!("Failed to parse registry file: {:?}", path))
}
