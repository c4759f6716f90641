//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod fingerprint;

pub use fingerprint::YamlFingerprintRepository;
