//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod data_store;
pub mod file_system;
pub mod fingerprint_store;
pub mod fixture_sink;

pub use data_store::{DataStore, DataStoreError, Statement, StatementKind};
pub use file_system::{FileSystem, FsError, FsResult};
pub use fingerprint_store::{FingerprintStore, StoreLock};
pub use fixture_sink::FixtureSink;

#[cfg(test)]
pub use file_system::MockFileSystem;
#[cfg(test)]
pub use fingerprint_store::MemoryFingerprintStore;
#[cfg(test)]
pub use fixture_sink::MemorySink;
