//! Path resolution combining normalization and canonicalization.
//!
//! This module provides the `PathResolver` type, which is the main entry
//! point for turning a user-supplied path into its canonical absolute form.

use std::path::Path;

use crate::error::{Error, Result};
use crate::path::types::{NormalizedPath, ResolvedPath};
use crate::path::{canonicalize, normalize};

/// Resolves paths to their canonical absolute form.
///
/// Resolution expands a leading tilde, makes the path absolute against the
/// current working directory, and canonicalizes it through the filesystem.
/// `..` components are deliberately left for the canonicalization step, so
/// they are resolved against real (post-symlink) parent directories exactly
/// as `realpath(3)` does.
///
/// # Examples
///
/// ```no_run
/// use rpath::path::PathResolver;
/// use std::path::Path;
///
/// let resolver = PathResolver::new();
/// let resolved = resolver.resolve(Path::new("/tmp")).unwrap();
/// assert!(resolved.path().is_absolute());
/// ```
#[derive(Debug, Clone)]
pub struct PathResolver {
    /// Maximum symlink depth for safe canonicalization.
    max_symlink_depth: usize,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self {
            max_symlink_depth: 40,
        }
    }
}

impl PathResolver {
    /// Create a new path resolver with default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpath::path::PathResolver;
    ///
    /// let resolver = PathResolver::new();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the maximum symlink depth.
    ///
    /// This limits how many symlinks will be followed during canonicalization
    /// to prevent infinite loops.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpath::path::PathResolver;
    ///
    /// let resolver = PathResolver::new().with_max_symlink_depth(100);
    /// ```
    #[must_use]
    pub fn with_max_symlink_depth(mut self, depth: usize) -> Self {
        self.max_symlink_depth = depth;
        self
    }

    /// Resolve a path to its canonical absolute form.
    ///
    /// The input may be relative or absolute and may contain a leading
    /// tilde. The result follows every symlink and collapses every `.` and
    /// `..` component, and always names an existing filesystem object.
    ///
    /// When a component does not exist, the returned `PathNotFound` carries
    /// the lexically normalized input, which names what was looked up
    /// without implying that symlinks were followed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input cannot be made absolute (bad tilde, no current directory)
    /// - A component of the path does not exist
    /// - Permission is denied, a symlink loop is detected, or the symlink
    ///   chain exceeds the configured depth
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rpath::path::PathResolver;
    /// use std::path::Path;
    ///
    /// let resolver = PathResolver::new();
    /// let resolved = resolver.resolve(Path::new("./src")).unwrap();
    /// assert!(resolved.path().is_absolute());
    /// ```
    pub fn resolve(&self, path: &Path) -> Result<ResolvedPath> {
        let absolute = normalize::absolutize(path)?;

        match canonicalize::canonicalize_safe(&absolute, self.max_symlink_depth) {
            Ok(canonical) => Ok(ResolvedPath::new(canonical, path.to_path_buf())),
            Err(Error::PathNotFound { .. }) => {
                let display = normalize::normalize(path)
                    .map(NormalizedPath::into_path_buf)
                    .unwrap_or(absolute);
                Err(Error::PathNotFound { path: display })
            }
            Err(e) => Err(e),
        }
    }

    /// Normalize a path lexically, without touching the filesystem.
    ///
    /// This is the symlink-preserving counterpart to [`resolve`]: the result
    /// is absolute and free of `.`/`..` components, but symlinks are kept
    /// and the path need not exist.
    ///
    /// [`resolve`]: PathResolver::resolve
    ///
    /// # Errors
    ///
    /// Returns an error if normalization fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rpath::path::PathResolver;
    /// use std::path::Path;
    ///
    /// let resolver = PathResolver::new();
    /// let normalized = resolver.resolve_lexical(Path::new("./missing/dir")).unwrap();
    /// assert!(normalized.as_path().is_absolute());
    /// ```
    pub fn resolve_lexical(&self, path: &Path) -> Result<NormalizedPath> {
        normalize::normalize(path)
    }
}
