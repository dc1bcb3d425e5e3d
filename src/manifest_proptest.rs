//! Property-based tests for manifest resolution.
//!
//! These tests use proptest to generate manifests and verify that alias
//! resolution and version listing invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::document::DocumentType;
    use crate::manifest::Manifest;
    use crate::provider::{ManifestProvider, Provider};
    use crate::resolver;
    use proptest::prelude::*;
    use std::collections::{BTreeMap, BTreeSet};
    use std::fs;
    use tempfile::TempDir;

    fn version() -> impl Strategy<Value = String> {
        (1990u32..2100, 1u32..13, 1u32..29)
            .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d))
    }

    /// Non-date aliases; a date-shaped alias would shadow a concrete version.
    fn alias() -> impl Strategy<Value = String> {
        prop_oneof![Just("latest".to_string()), "[a-z]{1,8}"]
    }

    /// service -> alias -> version, as it might appear in a hand-written file
    fn raw_manifest() -> impl Strategy<Value = BTreeMap<String, BTreeMap<String, String>>> {
        prop::collection::btree_map(
            "[a-z]{2,10}",
            prop::collection::btree_map(alias(), version(), 1..6),
            1..5,
        )
    }

    // ============================================================================
    // Manifest invariants
    // ============================================================================

    proptest! {
        /// Property: every concrete version resolves to itself
        #[test]
        fn concrete_versions_are_identity(raw in raw_manifest()) {
            let manifest = Manifest::from(raw.clone());
            for (service, table) in &raw {
                for version in table.values() {
                    prop_assert_eq!(manifest.resolve(service, version), Some(version.as_str()));
                }
            }
        }

        /// Property: resolving twice gives the same answer as resolving once
        #[test]
        fn resolution_is_idempotent(raw in raw_manifest()) {
            let manifest = Manifest::from(raw.clone());
            for (service, table) in &raw {
                for alias in table.keys() {
                    let once = manifest.resolve(service, alias).unwrap();
                    prop_assert_eq!(manifest.resolve(service, once), Some(once));
                }
            }
        }

        /// Property: list_versions has no duplicates and covers every value
        #[test]
        fn list_versions_is_distinct_and_complete(raw in raw_manifest()) {
            let manifest = Manifest::from(raw.clone());
            for (service, table) in &raw {
                let listed = manifest.list_versions(service);
                let unique: BTreeSet<&String> = listed.iter().collect();
                prop_assert_eq!(unique.len(), listed.len());

                let expected: BTreeSet<&String> = table.values().collect();
                prop_assert_eq!(unique, expected);
            }
        }

        /// Property: list_versions is ordered newest first
        #[test]
        fn list_versions_is_descending(raw in raw_manifest()) {
            let manifest = Manifest::from(raw);
            for service in manifest.services() {
                let listed = manifest.list_versions(service);
                prop_assert!(listed.windows(2).all(|pair| pair[0] > pair[1]));
            }
        }

        /// Property: unknown services list no versions
        #[test]
        fn unknown_service_lists_nothing(raw in raw_manifest(), service in "[A-Z]{3,6}") {
            let manifest = Manifest::from(raw);
            prop_assert!(manifest.list_versions(&service).is_empty());
        }
    }

    // ============================================================================
    // Provider invariants
    // ============================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        /// Property: resolving an alias returns the same data as resolving the
        /// concrete version it points to
        #[test]
        fn alias_resolution_is_transparent(raw in raw_manifest()) {
            let dir = TempDir::new().unwrap();
            let manifest = Manifest::from(raw.clone());
            for service in manifest.services() {
                for version in manifest.list_versions(service) {
                    let body = format!(r#"{{"service":"{}","version":"{}"}}"#, service, version);
                    let name = DocumentType::Api.file_name(service, &version, "json");
                    fs::write(dir.path().join(name), body).unwrap();
                }
            }
            let provider = ManifestProvider::new(dir.path(), manifest.clone());

            for (service, table) in &raw {
                for (alias, version) in table {
                    let via_alias = resolver::resolve(&provider, "api", service, alias).unwrap();
                    let direct = resolver::resolve(&provider, "api", service, version).unwrap();
                    prop_assert_eq!(&via_alias, &direct);
                    prop_assert_eq!(via_alias["version"].as_str(), Some(version.as_str()));
                }
            }

            prop_assert!(provider.provide(DocumentType::Api, "unknown-service", "latest").unwrap().is_none());
        }
    }
}
