//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Compare registry props against component sources (default)
//! - `init`: Initialize propcheck configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Arguments for the default `check` command
    #[command(flatten)]
    pub check: CheckArgs,
}

impl Arguments {
    /// Resolve the command to run, defaulting to `check`.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Check(self.check))
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// Registry file to check (overrides config file)
    #[arg(long, env = "PROPCHECK_REGISTRY")]
    pub registry: Option<PathBuf>,

    /// Treat the `(required)` marker as required instead of optional
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check registry props against component source files
    Check(CheckArgs),
    /// Initialize a new .propcheckrc.json configuration file
    Init,
}
