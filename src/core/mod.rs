//! Core checking engine.
//!
//! - `extract`: props shape extraction from component source
//! - `registry`: registry document model and loading
//! - `resolve`: registry path to source file resolution
//! - `diff`: comparison of extracted and declared props
//! - `check`: the registry walk tying the above together

pub mod check;
pub mod diff;
pub mod extract;
pub mod registry;
pub mod resolve;

pub use check::{CategoryReport, CheckResult, Checker, EntryOutcome, EntryReport};
pub use diff::{OptionalityMismatch, OptionalityRule, PropsDiff, diff_props};
pub use extract::{
    ExtractedProps, PropInfo, PropsBlock, PropsExtraction, extract_file, extract_props,
    find_props_block, parse_props_body,
};
pub use registry::{
    Category, Collection, CollectionKind, DeclaredProps, Entry, Registry, load_registry,
    parse_registry,
};
pub use resolve::PathResolver;
