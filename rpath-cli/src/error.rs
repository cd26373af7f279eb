//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer, wrapping
//! library errors and providing the exit-code mapping.

use std::fmt;
use rpath::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// No path argument was supplied.
    MissingArgument,

    /// Path resolution failed (wrapped library error).
    Resolution(LibError),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Missing argument or resolution failure
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::MissingArgument | CliError::Resolution(_) => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingArgument => write!(f, "missing path argument"),
            CliError::Resolution(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Resolution(e) => Some(e),
            CliError::MissingArgument => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Resolution(e)
    }
}
