//! Main entry point for the rpath CLI.
//!
//! Resolves a filesystem path argument into its canonicalized absolute form
//! (symlinks followed, `.`/`..` segments collapsed) and prints the result.
//! With no argument, a usage line goes to stdout; resolution failures go to
//! stderr prefixed with the program name. Exit status is 0 on success and
//! 1 otherwise.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use commands::ResolveCommand;
use error::CliError;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    // Execute the command
    let result = run(cli, &global);

    // Handle errors and set exit code
    match result {
        Ok(()) => {}
        Err(CliError::MissingArgument) => {
            // Usage goes to stdout, matching the tool's contract
            println!("Usage: {} path", utils::program_name());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{}: {e}", utils::program_name());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli, global: &GlobalOptions) -> Result<(), CliError> {
    // First positional is the candidate path; extras are silently ignored
    let Some(path) = cli.paths.into_iter().next() else {
        return Err(CliError::MissingArgument);
    };

    ResolveCommand { path }.execute(global)
}
