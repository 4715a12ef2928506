use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{CheckArgs, ExitStatus, report};
use crate::{
    config::load_config,
    core::{Checker, OptionalityRule, PathResolver, load_registry},
};

pub fn check(args: CheckArgs) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_config(&cwd)?;
    let config = loaded.config;

    if args.verbose {
        match &loaded.source {
            Some(path) => eprintln!("{} {}", "config".dimmed(), path.display()),
            None => eprintln!("{} defaults", "config".dimmed()),
        }
    }

    let registry_path = args
        .registry
        .unwrap_or_else(|| PathBuf::from(&config.registry));

    if !registry_path.exists() {
        report::print_registry_not_found(&registry_path);
        return Ok(ExitStatus::Success);
    }

    let registry = load_registry(&registry_path)?;

    let rule = if args.strict {
        OptionalityRule::Strict
    } else {
        config.optionality
    };

    let result = Checker::new(PathResolver::from_config(&config), rule)
        .verbose(args.verbose)
        .check_registry(&registry);

    if args.verbose {
        eprintln!(
            "{} {} entries, {} skipped without a path",
            "checked".dimmed(),
            result.checked_count(),
            result.skipped
        );
    }

    report::print(&result);

    Ok(ExitStatus::Success)
}
