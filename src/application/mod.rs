//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `FixtureBuilder` - Gated fixture regeneration (check, build, export, persist)
//!
//! ## Services
//!
//! - `HashTracker` - Fingerprints the tracked file set and moves them through a store

pub mod build;
pub mod hash_tracker;

pub use build::{BuildContext, BuildOutcome, BuildReport, BuildState, FixtureBuilder};
pub use hash_tracker::HashTracker;
