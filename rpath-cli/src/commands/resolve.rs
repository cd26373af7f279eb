//! The resolve operation: canonicalize a path and print it.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use rpath::PathResolver;
use std::path::PathBuf;

/// Resolve a path to canonical absolute form and print it to stdout.
pub struct ResolveCommand {
    /// The candidate path.
    pub path: PathBuf,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = rpath::init_logger(global.verbose, global.quiet);
        logger.debug(&format!("resolving {}", self.path.display()));

        let resolver = PathResolver::new();
        let resolved = resolver.resolve(&self.path)?;

        logger.debug(&format!(
            "canonical form of {} is {}",
            resolved.original().display(),
            resolved.path().display()
        ));

        println!("{}", resolved.path().display());
        Ok(())
    }
}
