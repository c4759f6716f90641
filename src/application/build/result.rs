//! Build states and the report of one pass

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::entities::FingerprintMap;
use crate::domain::services::Staleness;

/// Where a build pass is in its lifecycle.
///
/// `Idle -> Checking -> {Skipped | Building -> Exporting -> Persisted}`,
/// with `Failed` reachable from any non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    Idle,
    Checking,
    Skipped,
    Building,
    Exporting,
    Persisted,
    Failed,
}

impl BuildState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            BuildState::Skipped | BuildState::Persisted | BuildState::Failed
        )
    }
}

impl fmt::Display for BuildState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuildState::Idle => "idle",
            BuildState::Checking => "checking",
            BuildState::Skipped => "skipped",
            BuildState::Building => "building",
            BuildState::Exporting => "exporting",
            BuildState::Persisted => "persisted",
            BuildState::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Fingerprints matched; existing fixtures stay authoritative
    Skipped,
    /// Fixtures were regenerated and the new baseline persisted
    Rebuilt,
}

/// Result of a completed (non-failed) build pass
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub outcome: BuildOutcome,
    pub staleness: Staleness,
    /// Fingerprints computed for this pass
    pub fingerprints: FingerprintMap,
    pub transitions: Vec<BuildState>,
    /// Custom names assigned during generation
    pub custom_names: usize,
    /// Record count per exported collection
    pub exported: BTreeMap<String, usize>,
}

impl BuildReport {
    pub fn rebuilt(&self) -> bool {
        self.outcome == BuildOutcome::Rebuilt
    }
}
