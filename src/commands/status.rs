//! Status command handler
//!
//! Reports whether the next build would regenerate fixtures.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use fixture_builder::{HashTracker, LocalFs, YamlFingerprintRepository};

/// Execute the status command
///
/// With `check`, a stale project exits with code 1.
pub fn cmd_status(root: &Path, config_file: Option<&Path>, check: bool) -> Result<ExitCode> {
    let config = super::load_configuration(root, config_file)?;
    let tracker = HashTracker::new(LocalFs::new(), root, config.files_to_check().to_vec())?;
    let store = YamlFingerprintRepository::new(config.fixture_builder_file());

    let staleness = tracker.staleness(&store)?;
    if staleness.is_stale() {
        println!("stale: {staleness}");
    } else {
        println!("up to date");
    }
    tracing::debug!(
        tracked = tracker.current().len(),
        state_file = %store.path().display(),
        "status evaluated"
    );

    if check && staleness.is_stale() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
