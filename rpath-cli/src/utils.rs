//! Utility functions for CLI operations.

use std::env;
use std::path::PathBuf;

/// Global CLI options shared across command execution.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// The name used when the invoked executable cannot be determined.
pub const FALLBACK_PROGRAM_NAME: &str = "rpath";

/// Program name for usage and error messages.
///
/// Uses the basename of the invoked executable (what `err(3)` would print),
/// falling back to the crate's binary name.
pub fn program_name() -> String {
    env::args_os()
        .next()
        .map(PathBuf::from)
        .and_then(|p| {
            p.file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| FALLBACK_PROGRAM_NAME.to_string())
}
