//! Domain Layer
//!
//! The staleness and naming rules, free of I/O.
//!
//! ## Structure
//!
//! - `entities/` - FingerprintMap, EntityRef, NameRegistry
//! - `value_objects/` - ContentHash, SqlTemplate
//! - `services/` - StalenessGate, RecordNamer
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
