//! CLI command implementations.
//!
//! The tool has a single operation:
//! - `resolve`: canonicalize a path and print the result

pub mod resolve;

pub use resolve::ResolveCommand;
