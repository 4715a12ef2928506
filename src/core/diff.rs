//! Comparison of extracted props against a registry props schema.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{extract::ExtractedProps, registry::DeclaredProps};

/// How a registry type string encodes optionality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionalityRule {
    /// Optional if the string contains `?` or the `(required)` marker.
    ///
    /// Treating `(required)` as optional matches existing registries checked by this tool,
    /// so it stays the default.
    #[default]
    Legacy,
    /// Optional if the string contains `?` and not the `(required)` marker.
    Strict,
}

impl OptionalityRule {
    pub fn is_optional(self, declared_type: &str) -> bool {
        let has_marker = declared_type.contains("(required)");
        match self {
            OptionalityRule::Legacy => declared_type.contains('?') || has_marker,
            OptionalityRule::Strict => declared_type.contains('?') && !has_marker,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalityMismatch {
    pub prop: String,
    pub actual_optional: bool,
    pub registry_optional: bool,
}

fn describe(optional: bool) -> &'static str {
    if optional { "optional" } else { "required" }
}

impl fmt::Display for OptionalityMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: optionality mismatch (actual: {}, registry: {})",
            self.prop,
            describe(self.actual_optional),
            describe(self.registry_optional)
        )
    }
}

/// Drift between a component's source props and its registry entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropsDiff {
    /// Props declared in source but absent from the registry.
    pub missing_in_registry: Vec<String>,
    /// Props declared in the registry but absent from source.
    pub extra_in_registry: Vec<String>,
    pub type_mismatches: Vec<OptionalityMismatch>,
}

impl PropsDiff {
    pub fn is_empty(&self) -> bool {
        self.missing_in_registry.is_empty()
            && self.extra_in_registry.is_empty()
            && self.type_mismatches.is_empty()
    }
}

pub fn diff_props(
    extracted: &ExtractedProps,
    declared: &DeclaredProps,
    rule: OptionalityRule,
) -> PropsDiff {
    let mut diff = PropsDiff::default();

    for (name, info) in extracted.iter() {
        let Some(declared_type) = declared.get(name) else {
            diff.missing_in_registry.push(name.to_string());
            continue;
        };

        let registry_optional = rule.is_optional(declared_type);
        if info.optional != registry_optional {
            diff.type_mismatches.push(OptionalityMismatch {
                prop: name.to_string(),
                actual_optional: info.optional,
                registry_optional,
            });
        }
    }

    diff.extra_in_registry = declared
        .iter()
        .filter(|(name, _)| !extracted.contains(name))
        .map(|(name, _)| name.to_string())
        .collect();

    diff
}
