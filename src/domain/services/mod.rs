//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod record_namer;
mod staleness;

pub use record_namer::{NamedCollection, NamedRecord, NamingCallback, RecordNamer};
pub use staleness::{Staleness, StalenessGate};
