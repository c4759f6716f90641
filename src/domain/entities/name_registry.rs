//! Name registry - custom names assigned to generated records
//!
//! Lives for exactly one build pass. Nothing here is persisted; the export
//! stage consults it so fixture entries carry stable names instead of raw ids.

use std::collections::HashMap;

use crate::error::{FixtureError, FixtureResult};

use super::entity_ref::{EntityRef, NameKey};

/// Maps `(collection, identifier)` to a user-assigned name.
#[derive(Debug, Default)]
pub struct NameRegistry {
    names: HashMap<NameKey, String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `name` to every record, returning the records unchanged.
    ///
    /// Records are processed in order; ones named before a failing record
    /// keep their names. A key can be named once per registry, even when the
    /// second name is identical. One name may label several distinct keys.
    pub fn assign_name<'a, I, R>(&mut self, name: &str, records: I) -> FixtureResult<Vec<&'a EntityRef>>
    where
        I: IntoIterator<Item = R>,
        R: Into<Option<&'a EntityRef>>,
    {
        if name.trim().is_empty() {
            return Err(FixtureError::InvalidArgument(
                "cannot name an object blank".to_string(),
            ));
        }

        let mut named = Vec::new();
        for record in records {
            let record = match record.into() {
                Some(record) if !record.collection_id().trim().is_empty() => record,
                _ => {
                    return Err(FixtureError::InvalidArgument(
                        "cannot name a blank object".to_string(),
                    ))
                }
            };

            let key = record.key();
            if let Some(existing) = self.names.get(&key) {
                return Err(FixtureError::DuplicateName {
                    collection: key.collection,
                    identifier: key.identifier,
                    existing: existing.clone(),
                });
            }
            self.names.insert(key, name.to_string());
            named.push(record);
        }
        Ok(named)
    }

    pub fn lookup(&self, key: &NameKey) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NameKey, &str)> {
        self.names.iter().map(|(k, v)| (k, v.as_str()))
    }
}
