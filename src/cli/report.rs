//! Report formatting and printing utilities.
//!
//! Output mirrors the registry layout: a header per category, a block per drifting entry,
//! then a summary. Separate from core logic to allow propcheck to be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::config::CONFIG_FILE_NAME;
use crate::core::{CheckResult, EntryOutcome, EntryReport};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print a check result to stdout.
pub fn print(result: &CheckResult) {
    print_to(result, &mut io::stdout().lock());
}

/// Print a check result to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &CheckResult, writer: &mut W) {
    for category in &result.categories {
        let _ = writeln!(writer);
        let _ = writeln!(
            writer,
            "{}",
            format!("=== Checking {} {} ===", category.name, category.kind).bold()
        );

        for entry in category.entries.iter().filter(|e| e.outcome.has_issue()) {
            print_entry(entry, writer);
        }
    }

    print_summary(result, writer);
}

/// Print the message shown when the registry file is absent.
pub fn print_registry_not_found(path: &Path) {
    print_registry_not_found_to(path, &mut io::stdout().lock());
}

pub fn print_registry_not_found_to<W: Write>(path: &Path, writer: &mut W) {
    let _ = writeln!(writer, "{}", format!("{} not found!", path.display()).red());
}

pub fn print_init() {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );
}

// ============================================================
// Internal Functions
// ============================================================

fn print_entry<W: Write>(entry: &EntryReport, writer: &mut W) {
    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{} ({}):",
        entry.name.bold(),
        entry.registry_path
    );

    match &entry.outcome {
        EntryOutcome::Compared(diff) => {
            if !diff.missing_in_registry.is_empty() {
                let _ = writeln!(
                    writer,
                    "  {} {}",
                    "Missing in registry:".yellow(),
                    diff.missing_in_registry.join(", ")
                );
            }
            if !diff.extra_in_registry.is_empty() {
                let _ = writeln!(
                    writer,
                    "  {} {}",
                    "Extra in registry:".yellow(),
                    diff.extra_in_registry.join(", ")
                );
            }
            if !diff.type_mismatches.is_empty() {
                let mismatches: Vec<String> = diff
                    .type_mismatches
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                let _ = writeln!(
                    writer,
                    "  {} {}",
                    "Type mismatches:".red(),
                    mismatches.join(", ")
                );
            }
        }
        EntryOutcome::FileNotFound => print_note(entry, Some("file not found"), writer),
        EntryOutcome::Unreadable(reason) => {
            let detail = format!("unreadable: {}", reason);
            print_note(entry, Some(detail.as_str()), writer);
        }
        EntryOutcome::NoPropsBlock => print_note(entry, None, writer),
    }
}

fn print_note<W: Write>(entry: &EntryReport, detail: Option<&str>, writer: &mut W) {
    let suffix = detail
        .map(|detail| format!(" ({})", detail))
        .unwrap_or_default();
    let _ = writeln!(
        writer,
        "  {} Could not find props interface in {}{}",
        "Note:".cyan(),
        entry.file.display(),
        suffix
    );
}

fn print_summary<W: Write>(result: &CheckResult, writer: &mut W) {
    let count = result.issue_count();
    let count_str = if count == 0 {
        count.to_string().green()
    } else {
        count.to_string().red()
    };

    let _ = writeln!(writer);
    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", "=== Summary ===".bold());
    let _ = writeln!(writer, "Total issues found: {}", count_str);

    if count > 0 {
        let _ = writeln!(writer);
        let _ = writeln!(writer, "Components with issues:");
        for entry in result.issues() {
            let _ = writeln!(writer, "  - {}", entry.name);
        }
    }
}

// ============================================================
// Tests
// ============================================================
