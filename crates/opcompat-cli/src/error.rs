//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` and IO/JSON failures to exit codes and user-facing
//! messages.

use opcompat_core::CoreError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Argument error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Input could not be parsed as a graph.
    #[error("Invalid graph: {0}")]
    Parse(String),
}

impl CliError {
    /// Map error to an exit code (sysexits.h conventions).
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Parse(_) => 65,    // EX_DATAERR
            Self::Io(_) => 74,       // EX_IOERR
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidArgument(msg) | CoreError::Validation(msg) => Self::Arguments(msg),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Io(err.to_string())
        } else {
            Self::Parse(err.to_string())
        }
    }
}
