//! Fingerprints command handler

use std::path::Path;

use anyhow::Result;

use fixture_builder::{HashTracker, LocalFs};

/// Print the current fingerprint of every tracked file.
pub fn cmd_fingerprints(root: &Path, config_file: Option<&Path>, json: bool) -> Result<()> {
    let config = super::load_configuration(root, config_file)?;
    let tracker = HashTracker::new(LocalFs::new(), root, config.files_to_check().to_vec())?;

    if json {
        println!("{}", serde_json::to_string_pretty(tracker.current())?);
        return Ok(());
    }

    if tracker.current().is_empty() {
        println!("no tracked files");
    }
    for (path, hash) in tracker.current().iter() {
        println!("{hash}  {path}");
    }
    Ok(())
}
