use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// Drift in the registry is reported, not enforced, so a completed check is always
/// `Success`.
///
/// - `Success` (0): Command completed (issues may have been reported)
/// - `Error` (2): Command failed due to internal error (malformed registry, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed.
    Success,
    /// Command failed due to internal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
