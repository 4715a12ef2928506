use anyhow::Result;

pub mod args;
pub mod commands;
pub mod exit_status;
pub mod report;

pub use args::{Arguments, CheckArgs, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    match args.into_command() {
        Command::Check(args) => commands::check::check(args),
        Command::Init => commands::init::init(),
    }
}
