use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed (reports generated, history cleared)
/// - `Failure` (1): Command completed but could not do its work
///   (e.g. the config file already exists)
/// - `Error` (2): Command failed due to internal error (I/O error, config
///   error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
