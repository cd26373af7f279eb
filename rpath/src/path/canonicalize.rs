//! Path canonicalization primitives.
//!
//! This module wraps the operating system's canonicalization facility
//! (`std::fs::canonicalize`), mapping its failures onto the library error
//! taxonomy, and adds a variant that walks leading symlink chains itself so
//! cycles and excessive depth surface as first-class errors instead of raw
//! I/O errors.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Canonicalize a path by following symlinks.
///
/// This function uses the standard library's `canonicalize` to resolve all
/// symlinks and relative components in the path. The path must exist for
/// canonicalization to succeed.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist (`PathNotFound`)
/// - Permission is denied (`PermissionDenied`)
/// - Any other I/O error occurs
///
/// # Examples
///
/// ```no_run
/// use rpath::path::canonicalize::canonicalize;
/// use std::path::Path;
///
/// let canonical = canonicalize(Path::new("/tmp")).unwrap();
/// assert!(canonical.is_absolute());
/// ```
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::PathNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })
}

/// Canonicalize a path with symlink loop detection.
///
/// Leading symlink chains are followed manually, bounded by `max_depth` and
/// a visited set, so that a cycle is reported as `SymlinkLoop` rather than
/// whatever the OS maps `ELOOP` to. Once the chain bottoms out on a
/// non-symlink, resolution of any remaining interior symlinks is delegated
/// to [`canonicalize`].
///
/// # Errors
///
/// Returns an error if:
/// - A symlink loop is detected (`SymlinkLoop`)
/// - The maximum symlink depth is exceeded (`InvalidPath`)
/// - The path does not exist (`PathNotFound`)
/// - Any other I/O error occurs
///
/// # Examples
///
/// ```no_run
/// use rpath::path::canonicalize::canonicalize_safe;
/// use std::path::Path;
///
/// let canonical = canonicalize_safe(Path::new("/tmp"), 40).unwrap();
/// assert!(canonical.is_absolute());
/// ```
pub fn canonicalize_safe(path: &Path, max_depth: usize) -> Result<PathBuf> {
    let mut visited = HashSet::new();
    let mut current = path.to_path_buf();
    let mut depth = 0;

    loop {
        // Check for loops
        if !visited.insert(current.clone()) {
            return Err(Error::SymlinkLoop {
                path: current.clone(),
            });
        }

        // Check depth
        if depth >= max_depth {
            return Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: format!("too many symlinks (max {max_depth})"),
            });
        }

        // Try to read the symlink
        match fs::read_link(&current) {
            Ok(target) => {
                log::debug!(
                    "following symlink {} -> {}",
                    current.display(),
                    target.display()
                );
                current = if target.is_absolute() {
                    target
                } else {
                    // Relative symlink - resolve relative to parent
                    current
                        .parent()
                        .ok_or_else(|| Error::InvalidPath {
                            path: current.clone(),
                            reason: "symlink has no parent directory".to_string(),
                        })?
                        .join(target)
                };
                depth += 1;
            }
            Err(e) if e.kind() == ErrorKind::InvalidInput => {
                // Not a symlink - canonicalize to handle any interior symlinks
                return canonicalize(&current);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::PathNotFound { path: current });
            }
            Err(e) => {
                return Err(Error::Io(e));
            }
        }
    }
}
