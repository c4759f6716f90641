//! Property tests for fingerprinting and the staleness gate.

use std::collections::BTreeMap;

use proptest::prelude::*;

use fixture_builder::domain::value_objects::ContentHash;
use fixture_builder::{FingerprintMap, FingerprintStore, Staleness, StalenessGate, YamlFingerprintRepository};

fn tracked_path() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[a-z0-9_]{1,10}").unwrap();
    proptest::collection::vec(segment, 1..=3).prop_map(|segments| segments.join("/") + ".sql")
}

fn tracked_files() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    proptest::collection::btree_map(tracked_path(), any::<Vec<u8>>(), 0..8)
}

fn fingerprint(files: &BTreeMap<String, Vec<u8>>) -> FingerprintMap {
    files
        .iter()
        .map(|(path, content)| (path.clone(), ContentHash::from_bytes(content)))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: unchanged files never open the gate.
    #[test]
    fn property_identical_files_are_up_to_date(files in tracked_files()) {
        let baseline = fingerprint(&files);
        let current = fingerprint(&files);

        prop_assert_eq!(StalenessGate::evaluate(&current, Some(&baseline)), Staleness::UpToDate);
    }

    /// PROPERTY: without a baseline the gate is always open.
    #[test]
    fn property_missing_baseline_is_always_stale(files in tracked_files()) {
        let current = fingerprint(&files);

        prop_assert_eq!(StalenessGate::evaluate(&current, None), Staleness::FirstRun);
    }

    /// PROPERTY: editing any one file is detected and attributed to that file.
    #[test]
    fn property_single_edit_is_reported(
        files in tracked_files().prop_filter("need a file", |f| !f.is_empty()),
        pick in any::<prop::sample::Index>(),
        extra in any::<u8>(),
    ) {
        let baseline = fingerprint(&files);
        let mut edited = files.clone();
        let path = pick.get(&files.keys().cloned().collect::<Vec<_>>()).clone();
        if let Some(content) = edited.get_mut(&path) {
            content.push(extra);
        }
        let current = fingerprint(&edited);

        match StalenessGate::evaluate(&current, Some(&baseline)) {
            Staleness::Changed(diff) => {
                prop_assert_eq!(diff.changed, vec![path]);
                prop_assert!(diff.added.is_empty());
                prop_assert!(diff.removed.is_empty());
            }
            other => prop_assert!(false, "expected a change, got {:?}", other),
        }
    }

    /// PROPERTY: a diff lists every path exactly once across its three buckets.
    #[test]
    fn property_diff_partitions_differing_paths(
        before in tracked_files(),
        after in tracked_files(),
    ) {
        let baseline = fingerprint(&before);
        let current = fingerprint(&after);
        let diff = current.diff(&baseline);

        for path in &diff.added {
            prop_assert!(after.contains_key(path) && !before.contains_key(path));
        }
        for path in &diff.removed {
            prop_assert!(before.contains_key(path) && !after.contains_key(path));
        }
        for path in &diff.changed {
            prop_assert!(before[path] != after[path]);
        }
        prop_assert_eq!(diff.is_empty(), baseline == current);
    }

    /// PROPERTY: what the YAML store saves, it loads back unchanged.
    #[test]
    fn property_yaml_store_preserves_fingerprints(files in tracked_files()) {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlFingerprintRepository::new(dir.path().join("tmp/fixture_builder.yml"));
        let fingerprints = fingerprint(&files);

        store.save(&fingerprints).unwrap();

        prop_assert_eq!(store.load().unwrap(), Some(fingerprints));
    }
}
