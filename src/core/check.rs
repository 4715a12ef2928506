//! Registry walk: resolve, extract and diff every entry in document order.

use std::path::PathBuf;

use colored::Colorize;

use super::{
    diff::{OptionalityRule, PropsDiff, diff_props},
    extract::{PropsExtraction, extract_file},
    registry::{CollectionKind, Entry, Registry},
    resolve::PathResolver,
};

/// Result of checking a single registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The props block was found and compared.
    Compared(PropsDiff),
    /// The resolved file does not exist.
    FileNotFound,
    /// The resolved file could not be read.
    Unreadable(String),
    /// The file exists but no props block was found in it.
    NoPropsBlock,
}

impl EntryOutcome {
    pub fn has_issue(&self) -> bool {
        match self {
            EntryOutcome::Compared(diff) => !diff.is_empty(),
            EntryOutcome::FileNotFound
            | EntryOutcome::Unreadable(_)
            | EntryOutcome::NoPropsBlock => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReport {
    pub name: String,
    /// Path as written in the registry.
    pub registry_path: String,
    /// File the registry path resolved to.
    pub file: PathBuf,
    pub outcome: EntryOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    pub kind: CollectionKind,
    pub name: String,
    /// Checked entries, in document order. Entries without a path are not included.
    pub entries: Vec<EntryReport>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckResult {
    pub categories: Vec<CategoryReport>,
    /// Entries skipped for having no path.
    pub skipped: usize,
}

impl CheckResult {
    pub fn issues(&self) -> impl Iterator<Item = &EntryReport> {
        self.categories
            .iter()
            .flat_map(|category| category.entries.iter())
            .filter(|entry| entry.outcome.has_issue())
    }

    pub fn issue_count(&self) -> usize {
        self.issues().count()
    }

    pub fn checked_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.entries.len())
            .sum()
    }
}

pub struct Checker {
    resolver: PathResolver,
    rule: OptionalityRule,
    verbose: bool,
}

impl Checker {
    pub fn new(resolver: PathResolver, rule: OptionalityRule) -> Self {
        Self {
            resolver,
            rule,
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn check_registry(&self, registry: &Registry) -> CheckResult {
        let mut result = CheckResult::default();

        for (kind, collection) in registry.collections() {
            for category in collection.categories() {
                let mut entries = Vec::new();
                for entry in &category.entries {
                    match self.check_entry(entry) {
                        Some(report) => entries.push(report),
                        None => result.skipped += 1,
                    }
                }
                result.categories.push(CategoryReport {
                    kind,
                    name: category.name.clone(),
                    entries,
                });
            }
        }

        result
    }

    /// Check one entry. Returns `None` when the entry has no path.
    pub fn check_entry(&self, entry: &Entry) -> Option<EntryReport> {
        let Some(registry_path) = entry.source_path() else {
            if self.verbose {
                eprintln!(
                    "{} {} (no path)",
                    "skip".dimmed(),
                    entry.display_name()
                );
            }
            return None;
        };

        let file = self.resolver.resolve(registry_path);
        if self.verbose {
            eprintln!(
                "{} {} -> {}",
                "check".dimmed(),
                entry.display_name(),
                file.display()
            );
        }

        let outcome = match extract_file(&file) {
            PropsExtraction::Parsed(extracted) => {
                EntryOutcome::Compared(diff_props(&extracted, &entry.props_schema, self.rule))
            }
            PropsExtraction::NotFound => EntryOutcome::FileNotFound,
            PropsExtraction::Unreadable(reason) => EntryOutcome::Unreadable(reason),
            PropsExtraction::NoPropsBlock => EntryOutcome::NoPropsBlock,
        };

        Some(EntryReport {
            name: entry.display_name().to_string(),
            registry_path: registry_path.to_string(),
            file,
            outcome,
        })
    }
}
