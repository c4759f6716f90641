//! Record Namer Domain Service
//!
//! Chooses the fixture entry name for every exported record. Precedence:
//!
//! 1. per-collection naming callback
//! 2. custom name from the [`NameRegistry`]
//! 3. first non-empty candidate field (e.g. `display_name`), snake-cased
//! 4. the raw identifier
//!
//! Names are unique within a collection; repeats get a `_N` suffix.
//! Callback and registry names are reserved first, so only inferred or
//! identifier names are ever pushed aside by a suffix.

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use crate::domain::entities::{EntityRef, NameRegistry};

/// Caller-supplied naming function for one collection: `(record, row_index)`.
pub type NamingCallback = Box<dyn Fn(&EntityRef, usize) -> String + Send + Sync>;

/// An exported record together with its fixture entry name.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedRecord {
    pub name: String,
    pub record: EntityRef,
}

/// Every record of one collection, named and in data-store order.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedCollection {
    pub collection: String,
    pub records: Vec<NamedRecord>,
}

impl NamedCollection {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&EntityRef> {
        self.records
            .iter()
            .find(|r| r.name == name)
            .map(|r| &r.record)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }
}

pub struct RecordNamer<'a> {
    registry: &'a NameRegistry,
    name_fields: &'a [String],
    callbacks: &'a HashMap<String, NamingCallback>,
}

impl<'a> RecordNamer<'a> {
    pub fn new(
        registry: &'a NameRegistry,
        name_fields: &'a [String],
        callbacks: &'a HashMap<String, NamingCallback>,
    ) -> Self {
        Self {
            registry,
            name_fields,
            callbacks,
        }
    }

    pub fn name_collection(&self, collection: &str, records: Vec<EntityRef>) -> NamedCollection {
        let mut taken: HashSet<String> = HashSet::new();
        let mut names: Vec<Option<String>> = vec![None; records.len()];

        // Explicit names claim their keys before any fallback name is chosen.
        for (index, record) in records.iter().enumerate() {
            if let Some(base) = self.explicit_name(record, index + 1) {
                names[index] = Some(claim(&mut taken, base));
            }
        }
        for (index, record) in records.iter().enumerate() {
            if names[index].is_none() {
                names[index] = Some(claim(&mut taken, self.fallback_name(record)));
            }
        }

        let named = records
            .into_iter()
            .zip(names)
            .map(|(record, name)| NamedRecord {
                name: name.unwrap_or_default(),
                record,
            })
            .collect();

        NamedCollection {
            collection: collection.to_string(),
            records: named,
        }
    }

    /// Name for a single record before collection-level deduplication.
    pub fn base_name(&self, record: &EntityRef, row_index: usize) -> String {
        self.explicit_name(record, row_index)
            .unwrap_or_else(|| self.fallback_name(record))
    }

    fn explicit_name(&self, record: &EntityRef, row_index: usize) -> Option<String> {
        if let Some(callback) = self.callbacks.get(record.collection_id()) {
            return Some(callback(record, row_index));
        }
        self.registry.lookup(&record.key()).map(str::to_string)
    }

    fn fallback_name(&self, record: &EntityRef) -> String {
        self.inferred_name(record)
            .unwrap_or_else(|| record.identifier().to_string())
    }

    fn inferred_name(&self, record: &EntityRef) -> Option<String> {
        self.name_fields.iter().find_map(|field| {
            let raw = match record.field(field)? {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                _ => return None,
            };
            let name = snake_case(&raw);
            (!name.is_empty()).then_some(name)
        })
    }
}

/// First free name among `base`, `base_1`, `base_2`, ...
fn claim(taken: &mut HashSet<String>, base: String) -> String {
    let mut name = base.clone();
    let mut suffix = 0;
    while taken.contains(&name) {
        suffix += 1;
        name = format!("{base}_{suffix}");
    }
    taken.insert(name.clone());
    name
}

/// `"Alice Admin"` -> `alice_admin`, `"AliceAdmin"` -> `alice_admin`.
fn snake_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_separator = false;
    let mut after_lower = false;

    for ch in value.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            if ch.is_uppercase() && after_lower {
                pending_separator = true;
            }
            if pending_separator && !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            pending_separator = false;
            out.extend(ch.to_lowercase());
            after_lower = ch.is_lowercase() || ch.is_ascii_digit();
        } else {
            pending_separator = true;
            after_lower = false;
        }
    }
    out
}
