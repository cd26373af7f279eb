#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # rpath
//!
//! A library for resolving filesystem paths to their canonical absolute form.
//!
//! Resolution follows symlinks and collapses `.`/`..` segments through the
//! operating system's canonicalization facility; lexical normalization is
//! available separately for paths that need not exist.
//!
//! ## Core Types
//!
//! - [`PathResolver`]: the main resolution entry point
//! - [`NormalizedPath`] and [`ResolvedPath`]: lexical and canonical results
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use rpath::PathResolver;
//! use std::path::Path;
//!
//! let resolver = PathResolver::new();
//! let resolved = resolver.resolve(Path::new("/tmp")).unwrap();
//! assert!(resolved.path().is_absolute());
//! ```

pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{NormalizedPath, PathResolver, ResolvedPath};
