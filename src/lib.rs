//! Propcheck - component registry props checker
//!
//! Propcheck cross-checks a JSON component registry against the TypeScript source files
//! implementing its components. It reports props missing from the registry, props the
//! registry declares that no longer exist, and props whose optionality disagrees.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, comparison and the registry walk

pub mod cli;
pub mod config;
pub mod core;
