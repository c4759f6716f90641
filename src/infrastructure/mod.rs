//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system with atomic writes
//! - `repositories/` - YAML fingerprint store
//! - `discovery` - Schema files and legacy fixture globs
//! - `data_store` - In-memory data store
//! - `sink` - YAML fixture writer

pub mod data_store;
pub mod discovery;
pub mod fs;
pub mod repositories;
pub mod sink;

// Re-export for convenience
pub use data_store::MemoryDataStore;
pub use fs::LocalFs;
pub use repositories::YamlFingerprintRepository;
pub use sink::YamlFixtureSink;
