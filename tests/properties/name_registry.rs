//! Property tests for the per-build name registry.

use std::collections::BTreeSet;

use proptest::prelude::*;

use fixture_builder::{EntityRef, FixtureError, NameKey, NameRegistry};

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,12}").unwrap()
}

fn keys() -> impl Strategy<Value = BTreeSet<(String, i64)>> {
    let collection = prop_oneof![Just("users"), Just("posts"), Just("comments")];
    proptest::collection::btree_set((collection.prop_map(String::from), 1..50i64), 1..20)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: naming distinct records succeeds and every lookup returns the name.
    #[test]
    fn property_distinct_records_all_receive_the_name(name in name(), keys in keys()) {
        let records: Vec<EntityRef> = keys
            .iter()
            .map(|(collection, id)| EntityRef::new(collection.as_str(), *id))
            .collect();
        let mut registry = NameRegistry::new();

        let named = registry.assign_name(&name, &records).unwrap();

        prop_assert_eq!(named.len(), records.len());
        prop_assert_eq!(registry.len(), records.len());
        for (collection, id) in &keys {
            prop_assert_eq!(
                registry.lookup(&NameKey::new(collection.as_str(), *id)),
                Some(name.as_str())
            );
        }
    }

    /// PROPERTY: a second name for any already-named record is rejected,
    /// and the first name survives.
    #[test]
    fn property_renaming_is_rejected(
        first in name(),
        second in name(),
        keys in keys(),
        pick in any::<prop::sample::Index>(),
    ) {
        let records: Vec<EntityRef> = keys
            .iter()
            .map(|(collection, id)| EntityRef::new(collection.as_str(), *id))
            .collect();
        let mut registry = NameRegistry::new();
        registry.assign_name(&first, &records).unwrap();

        let target = pick.get(&records);
        let err = registry.assign_name(&second, [target]).unwrap_err();

        let is_duplicate = matches!(err, FixtureError::DuplicateName { .. });
        prop_assert!(is_duplicate);
        prop_assert_eq!(registry.lookup(&target.key()), Some(first.as_str()));
        prop_assert_eq!(registry.len(), records.len());
    }

    /// PROPERTY: whitespace-only names never register anything.
    #[test]
    fn property_blank_names_are_rejected(
        blank in proptest::string::string_regex("[ \t\n]{0,5}").unwrap(),
        keys in keys(),
    ) {
        let records: Vec<EntityRef> = keys
            .iter()
            .map(|(collection, id)| EntityRef::new(collection.as_str(), *id))
            .collect();
        let mut registry = NameRegistry::new();

        let rejected = registry.assign_name(&blank, &records).is_err();

        prop_assert!(rejected);
        prop_assert!(registry.is_empty());
    }
}
