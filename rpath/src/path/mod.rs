//! Path handling: lexical normalization and filesystem canonicalization.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Normalization converts paths to an absolute form lexically:
//! - Expanding tilde (~) to the home directory
//! - Converting relative paths to absolute paths
//! - Resolving `.` and `..` components
//!
//! The filesystem is never consulted, so symlinks survive and the path need
//! not exist.
//!
//! ## Canonicalization
//!
//! Canonicalization follows symlinks to get the "real" path on the
//! filesystem. `..` components are resolved against real (post-symlink)
//! parent directories, which is why canonicalization must not be preceded
//! by lexical `..` collapsing.
//!
//! # Examples
//!
//! ```no_run
//! use rpath::path::PathResolver;
//! use std::path::Path;
//!
//! let resolver = PathResolver::new();
//!
//! // Canonical form: absolute, symlink-free, names an existing object
//! let resolved = resolver.resolve(Path::new("/tmp")).unwrap();
//! assert!(resolved.path().is_absolute());
//!
//! // Lexical form: absolute, symlinks preserved, may not exist
//! let normalized = resolver.resolve_lexical(Path::new("./a/../b")).unwrap();
//! assert!(normalized.as_path().is_absolute());
//! ```

pub mod canonicalize;
pub mod normalize;
pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use resolver::PathResolver;
pub use types::{NormalizedPath, ResolvedPath};
