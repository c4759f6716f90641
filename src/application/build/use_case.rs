//! Fixture Builder Use Case
//!
//! Runs one gated build pass:
//! 1. Check: fingerprint tracked files, compare with the persisted baseline
//! 2. Build: clear tables, run the caller's generation procedure
//! 3. Export: dump and name every table, write fixtures, run `after_build`
//! 4. Persist: record the fingerprints computed in step 1
//!
//! Fingerprints are persisted last, so any failure leaves the previous
//! baseline in place and the next invocation rebuilds.

use std::collections::BTreeMap;

use crate::application::hash_tracker::HashTracker;
use crate::config::BuildConfiguration;
use crate::domain::ports::{DataStore, FileSystem, FingerprintStore, FixtureSink, StoreLock};
use crate::domain::services::StalenessGate;
use crate::error::FixtureResult;

use super::context::BuildContext;
use super::result::{BuildOutcome, BuildReport, BuildState};

/// Records the state machine's path through one pass.
#[derive(Debug)]
struct BuildTrace {
    state: BuildState,
    transitions: Vec<BuildState>,
}

impl BuildTrace {
    fn new() -> Self {
        Self {
            state: BuildState::Idle,
            transitions: vec![BuildState::Idle],
        }
    }

    fn enter(&mut self, next: BuildState) {
        tracing::debug!(from = %self.state, to = %next, "fixture build transition");
        self.state = next;
        self.transitions.push(next);
    }
}

/// Fixture builder - gates and runs fixture regeneration
///
/// Parameterized by its ports so tests can run it fully in memory.
pub struct FixtureBuilder<'c, FS, ST, SK>
where
    FS: FileSystem,
    ST: FingerprintStore,
    SK: FixtureSink,
{
    config: &'c BuildConfiguration,
    file_system: FS,
    store: ST,
    sink: SK,
    trace: BuildTrace,
}

impl<'c, FS, ST, SK> FixtureBuilder<'c, FS, ST, SK>
where
    FS: FileSystem,
    ST: FingerprintStore,
    SK: FixtureSink,
{
    pub fn new(config: &'c BuildConfiguration, file_system: FS, store: ST, sink: SK) -> Self {
        Self {
            config,
            file_system,
            store,
            sink,
            trace: BuildTrace::new(),
        }
    }

    pub fn state(&self) -> BuildState {
        self.trace.state
    }

    pub fn transitions(&self) -> &[BuildState] {
        &self.trace.transitions
    }

    /// Run one pass, invoking `generate` only when fixtures are stale.
    pub fn run<S, G>(&mut self, data_store: &mut S, generate: G) -> FixtureResult<BuildReport>
    where
        S: DataStore + ?Sized,
        G: FnOnce(&mut BuildContext<'_, S>) -> FixtureResult<()>,
    {
        self.trace = BuildTrace::new();
        match self.run_pass(data_store, generate) {
            Ok(report) => Ok(report),
            Err(err) => {
                self.trace.enter(BuildState::Failed);
                tracing::error!(error = %err, "fixture build failed; fingerprints not persisted");
                Err(err)
            }
        }
    }

    fn run_pass<S, G>(&mut self, data_store: &mut S, generate: G) -> FixtureResult<BuildReport>
    where
        S: DataStore + ?Sized,
        G: FnOnce(&mut BuildContext<'_, S>) -> FixtureResult<()>,
    {
        let Self {
            config,
            file_system,
            store,
            sink,
            trace,
        } = self;
        let config: &'c BuildConfiguration = *config;

        trace.enter(BuildState::Checking);
        let _lock = if config.lock_state() {
            store.lock()?
        } else {
            StoreLock::unguarded()
        };

        let tracker = HashTracker::new(
            &*file_system,
            config.root(),
            config.files_to_check().to_vec(),
        )?;
        let persisted = tracker.load_persisted(&*store)?;
        let staleness = StalenessGate::evaluate(tracker.current(), persisted.as_ref());

        if !staleness.is_stale() {
            trace.enter(BuildState::Skipped);
            tracing::info!(files = tracker.current().len(), "fixtures up to date; skipping build");
            return Ok(BuildReport {
                outcome: BuildOutcome::Skipped,
                staleness,
                fingerprints: tracker.current().clone(),
                transitions: trace.transitions.clone(),
                custom_names: 0,
                exported: BTreeMap::new(),
            });
        }

        tracing::info!(reason = %staleness, "rebuilding fixtures");
        trace.enter(BuildState::Building);
        let mut context = BuildContext::new(config, data_store);
        context.delete_tables()?;
        generate(&mut context)?;
        let custom_names = context.registry().len();

        trace.enter(BuildState::Exporting);
        let collections = context.export()?;
        drop(context);
        sink.write(&collections)?;
        if let Some(hook) = config.after_build() {
            hook(collections.as_slice())?;
        }
        let exported = collections
            .iter()
            .map(|c| (c.collection.clone(), c.len()))
            .collect();

        tracker.persist(&*store)?;
        trace.enter(BuildState::Persisted);

        Ok(BuildReport {
            outcome: BuildOutcome::Rebuilt,
            staleness,
            fingerprints: tracker.current().clone(),
            transitions: trace.transitions.clone(),
            custom_names,
            exported,
        })
    }
}
