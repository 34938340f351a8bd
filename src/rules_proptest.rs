//! Property-based tests for pattern resolution and rule ordering.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::codeowners::merge;
    use crate::ecosystems::{normalize_directory, ManifestTable};
    use crate::rules::{is_root_pattern, sort_rules, RuleLine};
    use proptest::prelude::*;

    fn ecosystem() -> impl Strategy<Value = &'static str> {
        let ids: Vec<&'static str> = ManifestTable::builtin().ecosystems().collect();
        proptest::sample::select(ids)
    }

    fn directory() -> impl Strategy<Value = String> {
        "/?([a-z]{1,6}/){0,3}/?"
    }

    fn pattern() -> impl Strategy<Value = String> {
        "(/[a-z*?.]{1,5}){1,4}"
    }

    // ============================================================================
    // Resolver property tests
    // ============================================================================

    proptest! {
        /// Property: every resolved pattern is anchored and has no empty segment
        #[test]
        fn resolved_patterns_are_anchored(eco in ecosystem(), dir in directory()) {
            for pattern in ManifestTable::builtin().resolve(eco, &dir) {
                prop_assert!(pattern.starts_with('/'), "unanchored: {}", pattern);
                prop_assert!(!pattern.contains("//"), "empty segment: {}", pattern);
                prop_assert!(!pattern.ends_with('/'), "trailing slash: {}", pattern);
            }
        }

        /// Property: directory normalization is idempotent
        #[test]
        fn normalize_directory_is_idempotent(dir in directory()) {
            let once = normalize_directory(&dir);
            prop_assert_eq!(normalize_directory(&once), once.clone());
        }

        /// Property: every manifest of a known ecosystem yields a direct pattern
        #[test]
        fn every_manifest_has_direct_pattern(eco in ecosystem(), dir in directory()) {
            let table = ManifestTable::builtin();
            let root = normalize_directory(&dir);
            let patterns = table.resolve(eco, &dir);
            for manifest in table.manifests(eco).unwrap() {
                let direct = format!("{}/{}", root, manifest);
                prop_assert!(patterns.contains(&direct));
            }
        }
    }

    // ============================================================================
    // Sort property tests
    // ============================================================================

    proptest! {
        /// Property: sorting is independent of input order
        #[test]
        fn sort_is_order_independent(patterns in prop::collection::vec(pattern(), 0..20)) {
            let mut forward: Vec<RuleLine> =
                patterns.iter().map(|p| RuleLine::new(p.as_str(), &["a"])).collect();
            let mut backward: Vec<RuleLine> = forward.iter().rev().cloned().collect();
            sort_rules(&mut forward);
            sort_rules(&mut backward);
            prop_assert_eq!(forward, backward);
        }

        /// Property: root patterns always precede non-root patterns
        #[test]
        fn root_patterns_come_first(patterns in prop::collection::vec(pattern(), 0..20)) {
            let mut rules: Vec<RuleLine> =
                patterns.iter().map(|p| RuleLine::new(p.as_str(), &["a"])).collect();
            sort_rules(&mut rules);
            let first_non_root = rules
                .iter()
                .position(|r| !is_root_pattern(r.pattern()))
                .unwrap_or(rules.len());
            prop_assert!(rules[first_non_root..].iter().all(|r| !is_root_pattern(r.pattern())));
        }

        /// Property: merging the same rules twice reports no changes the second time
        #[test]
        fn merge_is_idempotent(
            patterns in prop::collection::vec(pattern(), 1..10),
            prefix in "(\\* @[a-z]{1,5}\n){0,3}",
        ) {
            let mut rules: Vec<RuleLine> =
                patterns.iter().map(|p| RuleLine::new(p.as_str(), &["a"])).collect();
            sort_rules(&mut rules);
            let first = merge(Some(&prefix), &rules);
            let second = merge(Some(&first.content), &rules);
            prop_assert!(!second.has_changes);
            prop_assert_eq!(first.content, second.content);
        }

        /// Property: appending a block keeps every existing byte in front of it
        #[test]
        fn append_preserves_existing_content(
            patterns in prop::collection::vec(pattern(), 1..5),
            existing in "([a-z* @]{0,8}(\r\n|\n)){0,4}",
        ) {
            let mut rules: Vec<RuleLine> =
                patterns.iter().map(|p| RuleLine::new(p.as_str(), &["a"])).collect();
            sort_rules(&mut rules);
            let merged = merge(Some(&existing), &rules);
            prop_assert!(merged.content.starts_with(existing.as_str()));
        }
    }
}
