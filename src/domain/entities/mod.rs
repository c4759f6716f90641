//! Domain Entities
//!
//! - `FingerprintMap` - tracked file path to content digest
//! - `EntityRef` / `NameKey` - a generated record and its identity
//! - `NameRegistry` - custom names assigned during one build pass

mod entity_ref;
mod fingerprint_map;
mod name_registry;

pub use entity_ref::{EntityRef, NameKey, Row};
pub(crate) use fingerprint_map::normalize_tracked_path;
pub use fingerprint_map::{FingerprintDiff, FingerprintMap};
pub use name_registry::NameRegistry;
