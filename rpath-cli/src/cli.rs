//! CLI structure definition.
//!
//! This module defines the command-line surface using clap's derive macros.
//! There are no subcommands: the first positional argument is always the
//! candidate path.

use clap::Parser;
use std::path::PathBuf;

/// Command-line tool that prints the canonical absolute form of a path.
#[derive(Parser)]
#[command(name = "rpath")]
#[command(version, about = "Print the canonical absolute form of a path", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,

    /// Path to resolve (arguments after the first are ignored)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_path() {
        let cli = Cli::parse_from(["rpath", "/tmp"]);
        assert_eq!(cli.paths, vec![PathBuf::from("/tmp")]);
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_no_path() {
        let cli = Cli::parse_from(["rpath"]);
        assert!(cli.paths.is_empty());
    }

    #[test]
    fn test_parse_extra_paths_collected() {
        let cli = Cli::parse_from(["rpath", "/a", "/b", "/c"]);
        assert_eq!(cli.paths.first(), Some(&PathBuf::from("/a")));
        assert_eq!(cli.paths.len(), 3);
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["rpath", "--verbose", "/tmp"]);
        assert!(cli.verbose);

        let cli = Cli::parse_from(["rpath", "--quiet", "/tmp"]);
        assert!(cli.quiet);
    }
}
