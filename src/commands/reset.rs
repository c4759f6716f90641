//! Reset command handler
//!
//! Forgets the persisted fingerprints so the next build regenerates
//! fixtures. Also the way out of a corrupt state file.

use std::path::Path;

use anyhow::{Context, Result};

use fixture_builder::{FingerprintStore, YamlFingerprintRepository};

pub fn cmd_reset(root: &Path, config_file: Option<&Path>) -> Result<()> {
    let config = super::load_configuration(root, config_file)?;
    let store = YamlFingerprintRepository::new(config.fixture_builder_file());

    if !store.path().exists() {
        println!("nothing to reset");
        return Ok(());
    }
    store
        .clear()
        .with_context(|| format!("failed to remove {}", store.path().display()))?;
    println!("removed {}", store.path().display());
    Ok(())
}
