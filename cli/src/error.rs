use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Process exit status reported to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    GeneralError = 1,
    InvalidArguments = 2,
    ThemeNotFound = 3,
    IoError = 4,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

/// Expected command failures, each mapped to an exit status.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("No current theme found")]
    NoCurrentTheme,

    #[error("Theme '{0}' not found")]
    ThemeNotFound(String),

    #[error("failed to write output to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Stdout(#[source] io::Error),

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CommandError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            CommandError::NoCurrentTheme | CommandError::ThemeNotFound(_) => {
                ExitStatus::ThemeNotFound
            }
            CommandError::Write { .. } | CommandError::Stdout(_) => ExitStatus::IoError,
            CommandError::Serialize(_) => ExitStatus::GeneralError,
        }
    }
}
