//! Staleness Gate Domain Service
//!
//! Decides whether fixtures must be rebuilt by comparing the current
//! fingerprints against the last persisted baseline. Comparison is exact:
//! any added, removed or modified tracked file forces a full rebuild.

use std::fmt;

use crate::domain::entities::{FingerprintDiff, FingerprintMap};

/// Why the gate opened (or did not).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Staleness {
    /// Persisted fingerprints match the current ones
    UpToDate,
    /// No baseline has ever been persisted
    FirstRun,
    /// Tracked files differ from the baseline
    Changed(FingerprintDiff),
}

impl Staleness {
    pub fn is_stale(&self) -> bool {
        !matches!(self, Staleness::UpToDate)
    }
}

impl fmt::Display for Staleness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Staleness::UpToDate => write!(f, "fixtures are up to date"),
            Staleness::FirstRun => write!(f, "no fingerprints recorded yet"),
            Staleness::Changed(diff) => {
                let mut parts = Vec::new();
                if !diff.changed.is_empty() {
                    parts.push(format!("changed: {}", diff.changed.join(", ")));
                }
                if !diff.added.is_empty() {
                    parts.push(format!("added: {}", diff.added.join(", ")));
                }
                if !diff.removed.is_empty() {
                    parts.push(format!("removed: {}", diff.removed.join(", ")));
                }
                write!(f, "tracked files differ ({})", parts.join("; "))
            }
        }
    }
}

/// Stateless comparison of current vs. persisted fingerprints.
#[derive(Debug, Clone, Copy, Default)]
pub struct StalenessGate;

impl StalenessGate {
    pub fn evaluate(current: &FingerprintMap, persisted: Option<&FingerprintMap>) -> Staleness {
        match persisted {
            None => Staleness::FirstRun,
            Some(baseline) if baseline == current => Staleness::UpToDate,
            Some(baseline) => Staleness::Changed(current.diff(baseline)),
        }
    }

    pub fn is_stale(current: &FingerprintMap, persisted: Option<&FingerprintMap>) -> bool {
        Self::evaluate(current, persisted).is_stale()
    }
}
