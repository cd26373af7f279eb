//! Lexical path normalization.
//!
//! This module provides functionality to normalize paths by:
//! - Expanding tilde (~) to the home directory
//! - Converting relative paths to absolute paths
//! - Resolving `.` and `..` components
//!
//! Everything here is purely lexical: the filesystem is never consulted and
//! symlinks are never followed. Canonicalization lives in
//! [`crate::path::canonicalize`].

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::types::NormalizedPath;

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use rpath::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// // Expands ~ to home directory
/// let expanded = expand_tilde(Path::new("~")).unwrap();
/// assert!(expanded.is_absolute());
///
/// // Leaves absolute paths unchanged
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    // Get home directory using the home crate
    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        // ~user syntax not supported
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Make a path absolute without resolving `.` or `..` components.
///
/// Expands a leading tilde, then joins relative paths onto the current
/// working directory. Components are left untouched so that a later
/// filesystem canonicalization can resolve `..` against real (post-symlink)
/// parent directories.
///
/// # Errors
///
/// Returns an error if tilde expansion fails or the current directory
/// cannot be determined.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;

    if expanded.is_absolute() {
        return Ok(expanded);
    }

    let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("cannot get current directory: {e}"),
    })?;
    Ok(cwd.join(expanded))
}

/// Resolve `.` and `..` components in an absolute path.
///
/// This function processes path components to remove current directory (`.`)
/// references and resolve parent directory (`..`) references, lexically.
///
/// # Errors
///
/// Returns an error if the path contains too many `..` components that would
/// escape the root directory.
///
/// # Examples
///
/// ```
/// use rpath::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// // Resolves . and ..
/// let resolved = resolve_components(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/a/c"));
///
/// // Handles multiple ..
/// let resolved = resolve_components(Path::new("/a/b/../../c")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/c"));
/// ```
pub fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut result = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                // Windows prefix
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => {
                result.push(c);
            }
            Component::CurDir => {
                // Skip "." - it doesn't change the path
            }
            Component::ParentDir => {
                // Try to pop the last component for ".."
                if !result.pop() {
                    // Already at root - can't go up further
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "path contains too many '..' components (escapes root)"
                            .to_string(),
                    });
                }
            }
        }
    }

    // Ensure we at least have a root if we started with one
    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    Ok(result)
}

/// Normalize a path to absolute form, lexically.
///
/// This is the main normalization function that:
/// 1. Expands tilde (~) if present
/// 2. Converts relative paths to absolute (using current directory)
/// 3. Resolves `.` and `..` components
///
/// The result preserves symlinks; use the resolver for canonical forms.
///
/// # Errors
///
/// Returns an error if:
/// - Tilde expansion fails
/// - Current directory cannot be determined
/// - Path contains too many `..` components
///
/// # Examples
///
/// ```no_run
/// use rpath::path::normalize::normalize;
/// use std::path::Path;
///
/// let normalized = normalize(Path::new("./src")).unwrap();
/// assert!(normalized.as_path().is_absolute());
/// ```
pub fn normalize(path: &Path) -> Result<NormalizedPath> {
    let absolute = absolutize(path)?;
    let resolved = resolve_components(&absolute)?;
    NormalizedPath::new(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_home() {
        let home = home::home_dir().unwrap();
        assert_eq!(expand_tilde(Path::new("~")).unwrap(), home);
    }

    #[test]
    fn test_expand_tilde_with_path() {
        let home = home::home_dir().unwrap();
        let expanded = expand_tilde(Path::new("~/test")).unwrap();
        assert_eq!(expanded, home.join("test"));
    }

    #[test]
    fn test_expand_tilde_absolute_unchanged() {
        let path = Path::new("/absolute/path");
        assert_eq!(expand_tilde(path).unwrap(), path);
    }

    #[test]
    fn test_expand_tilde_relative_unchanged() {
        let path = Path::new("relative/path");
        assert_eq!(expand_tilde(path).unwrap(), path);
    }

    #[test]
    fn test_expand_tilde_user_syntax_not_supported() {
        let result = expand_tilde(Path::new("~user/path"));
        assert!(result.is_err());
    }

    #[test]
    fn test_absolutize_relative() {
        let cwd = env::current_dir().unwrap();
        let absolute = absolutize(Path::new("relative/path")).unwrap();
        assert_eq!(absolute, cwd.join("relative/path"));
    }

    #[test]
    #[cfg(unix)]
    fn test_absolutize_preserves_dots() {
        // Dot components must survive so canonicalization sees them
        let absolute = absolutize(Path::new("/a/b/../c")).unwrap();
        assert_eq!(absolute, PathBuf::from("/a/b/../c"));
    }

    #[test]
    fn test_resolve_components_simple() {
        let resolved = resolve_components(Path::new("/a/./b/../c")).unwrap();
        assert_eq!(resolved, PathBuf::from("/a/c"));
    }

    #[test]
    fn test_resolve_components_multiple_parent() {
        let resolved = resolve_components(Path::new("/a/b/../../c")).unwrap();
        assert_eq!(resolved, PathBuf::from("/c"));
    }

    #[test]
    fn test_resolve_components_root_only() {
        let resolved = resolve_components(Path::new("/")).unwrap();
        assert_eq!(resolved, PathBuf::from("/"));
    }

    #[test]
    fn test_resolve_components_too_many_parent() {
        let result = resolve_components(Path::new("/a/../.."));
        assert!(result.is_err());
    }

    #[test]
    #[cfg(unix)]
    fn test_normalize_absolute() {
        let normalized = normalize(Path::new("/a/./b/../c")).unwrap();
        assert_eq!(normalized.as_path(), Path::new("/a/c"));
    }

    #[test]
    fn test_normalize_relative() {
        let cwd = env::current_dir().unwrap();
        let normalized = normalize(Path::new("relative/path")).unwrap();
        assert!(normalized.as_path().is_absolute());
        assert!(normalized.as_path().starts_with(&cwd));
        assert!(normalized.as_path().ends_with("relative/path"));
    }

    #[test]
    fn test_normalize_tilde() {
        let home = home::home_dir().unwrap();
        let normalized = normalize(Path::new("~/test")).unwrap();
        assert_eq!(normalized.as_path(), home.join("test").as_path());
    }

    #[test]
    fn test_normalize_current_dir() {
        let cwd = env::current_dir().unwrap();
        let normalized = normalize(Path::new(".")).unwrap();
        assert_eq!(normalized.as_path(), cwd.as_path());
    }

    // Property-based tests
    #[cfg(unix)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        // Strategy to generate valid path strings (Unix-like paths)
        fn path_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec("[a-zA-Z0-9_-]{1,10}", 1..=5)
                .prop_map(|parts| format!("/{}", parts.join("/")))
        }

        // Strategy for paths with . and .. components
        fn path_with_dots_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec(
                prop_oneof![
                    Just(".".to_string()),
                    Just("..".to_string()),
                    "[a-zA-Z0-9_-]{1,10}".prop_map(|s| s),
                ],
                1..=8,
            )
            .prop_map(|parts| format!("/{}", parts.join("/")))
        }

        proptest! {
            /// Normalization always produces absolute paths
            #[test]
            fn normalize_always_absolute(s in path_strategy()) {
                let path = Path::new(&s);
                if let Ok(normalized) = normalize(path) {
                    prop_assert!(normalized.as_path().is_absolute());
                }
            }

            /// Normalization is idempotent (normalizing twice gives same result)
            #[test]
            fn normalize_idempotent(s in path_strategy()) {
                let path = Path::new(&s);
                if let Ok(norm1) = normalize(path) {
                    if let Ok(norm2) = normalize(norm1.as_path()) {
                        prop_assert_eq!(norm1, norm2);
                    }
                }
            }

            /// Normalized paths don't contain . components
            #[test]
            fn normalize_no_current_dir(s in path_with_dots_strategy()) {
                let path = Path::new(&s);
                if let Ok(normalized) = normalize(path) {
                    for component in normalized.as_path().components() {
                        prop_assert_ne!(component, std::path::Component::CurDir);
                    }
                }
            }

            /// Normalized paths don't contain .. components
            #[test]
            fn normalize_no_parent_dir(s in path_with_dots_strategy()) {
                let path = Path::new(&s);
                if let Ok(normalized) = normalize(path) {
                    for component in normalized.as_path().components() {
                        prop_assert_ne!(component, std::path::Component::ParentDir);
                    }
                }
            }

            /// resolve_components preserves absolute paths
            #[test]
            fn resolve_components_preserves_absolute(s in path_strategy()) {
                let path = Path::new(&s);
                if let Ok(resolved) = resolve_components(path) {
                    prop_assert!(resolved.is_absolute());
                }
            }
        }
    }
}
