//! Fingerprint map entity - tracked file path to content digest
//!
//! Pure data structure. Reading files and persisting maps are handled by
//! `HashTracker` and the `FingerprintStore` port.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ContentHash;

/// Normalize a tracked path for use as a map key (always forward slashes).
pub(crate) fn normalize_tracked_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Content digests for every tracked file, keyed by normalized path.
///
/// Ordered so that two maps built from the same files compare and
/// serialize identically regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FingerprintMap {
    entries: BTreeMap<String, ContentHash>,
}

impl FingerprintMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, hash: ContentHash) {
        self.entries.insert(path.into(), hash);
    }

    pub fn get(&self, path: &str) -> Option<&ContentHash> {
        self.entries.get(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContentHash)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Compare against a baseline, listing what moved.
    pub fn diff(&self, baseline: &FingerprintMap) -> FingerprintDiff {
        let mut diff = FingerprintDiff::default();
        for (path, hash) in &self.entries {
            match baseline.entries.get(path) {
                None => diff.added.push(path.clone()),
                Some(old) if old != hash => diff.changed.push(path.clone()),
                Some(_) => {}
            }
        }
        for path in baseline.entries.keys() {
            if !self.entries.contains_key(path) {
                diff.removed.push(path.clone());
            }
        }
        diff
    }
}

impl FromIterator<(String, ContentHash)> for FingerprintMap {
    fn from_iter<I: IntoIterator<Item = (String, ContentHash)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Paths that differ between two fingerprint maps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FingerprintDiff {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub changed: Vec<String>,
}

impl FingerprintDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}
