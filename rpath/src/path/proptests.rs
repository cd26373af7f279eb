//! Property-based tests for path handling.
//!
//! Note: The normalize module already has property tests for normalization.
//! This module focuses on resolver behavior over larger case counts.

use super::normalize::{absolutize, normalize, resolve_components};
use super::resolver::PathResolver;
use proptest::prelude::*;
use std::path::PathBuf;

// Strategy for generating path-like strings
fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent: normalize(normalize(p)) == normalize(p)
    #[test]
    fn path_normalization_idempotent(path in absolute_path_strategy()) {
        if let Ok(normalized_once) = normalize(&path) {
            if let Ok(normalized_twice) = normalize(normalized_once.as_path()) {
                prop_assert_eq!(normalized_once, normalized_twice);
            }
        }
    }

    // Normalized paths never contain ".."
    #[test]
    fn normalized_paths_no_parent_refs(path in absolute_path_strategy()) {
        if let Ok(normalized) = normalize(&path) {
            let path_str = normalized.as_path().to_string_lossy().into_owned();
            prop_assert!(!path_str.contains(".."));
        }
    }

    // Absolutize leaves dot-free absolute paths untouched
    #[test]
    fn absolutize_absolute_is_identity(path in absolute_path_strategy()) {
        if let Ok(absolute) = absolutize(&path) {
            prop_assert_eq!(absolute, path);
        }
    }

    // resolve_lexical agrees with normalize
    #[test]
    fn resolve_lexical_matches_normalize(path in absolute_path_strategy()) {
        let resolver = PathResolver::new();
        let via_resolver = resolver.resolve_lexical(&path);
        let direct = normalize(&path);
        match (via_resolver, direct) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            (a, b) => prop_assert!(false, "resolver {a:?} disagreed with normalize {b:?}"),
        }
    }

    // Component resolution never grows the component count
    #[test]
    fn resolve_components_never_grows(path in absolute_path_strategy()) {
        if let Ok(resolved) = resolve_components(&path) {
            prop_assert!(resolved.components().count() <= path.components().count());
        }
    }
}
