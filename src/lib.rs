//! fixture-builder - staleness-gated test fixture generation
//!
//! Fixtures are regenerated only when the schema definition files they
//! depend on change. Each build clears the data store, runs a caller
//! supplied generation procedure, names the resulting records and exports
//! them as YAML fixtures, then records content fingerprints so the next
//! invocation can skip the work.
//!
//! ```ignore
//! use fixture_builder::{factory, BuildConfiguration, MemoryDataStore};
//!
//! let config = BuildConfiguration::builder(".").build()?;
//! let report = factory(&config, &mut db, |ctx| {
//!     let admin = create_admin(ctx.store_mut())?;
//!     ctx.name("admin", [&admin])?;
//!     Ok(())
//! })?;
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{BuildContext, BuildOutcome, BuildReport, BuildState, FixtureBuilder, HashTracker};
pub use config::{BuildConfiguration, BuildConfigurationBuilder, FixtureSettings};
pub use domain::entities::{EntityRef, FingerprintMap, NameKey, NameRegistry, Row};
pub use domain::ports::{DataStore, DataStoreError, FingerprintStore, FixtureSink, Statement};
pub use domain::services::{NamedCollection, NamedRecord, Staleness, StalenessGate};
pub use error::{FixtureError, FixtureResult};
pub use infrastructure::{LocalFs, MemoryDataStore, YamlFingerprintRepository, YamlFixtureSink};

/// Run one gated build against local disk.
///
/// Fingerprints live at the configured `fixture_builder_file` and fixtures
/// are written under `fixtures_dir`. `generate` runs only when stale.
pub fn factory<S, G>(
    config: &BuildConfiguration,
    data_store: &mut S,
    generate: G,
) -> FixtureResult<BuildReport>
where
    S: DataStore + ?Sized,
    G: FnOnce(&mut BuildContext<'_, S>) -> FixtureResult<()>,
{
    let store = YamlFingerprintRepository::new(config.fixture_builder_file());
    let sink = YamlFixtureSink::new(config.fixtures_dir());
    FixtureBuilder::new(config, LocalFs::new(), store, sink).run(data_store, generate)
}
