//! CLI command handlers

mod fingerprints;
mod project_root;
mod reset;
mod status;

use std::path::Path;

use anyhow::{Context, Result};

use fixture_builder::config::{self, BuildConfiguration, ConfigWarning};

pub use fingerprints::cmd_fingerprints;
pub use project_root::discover_project_root;
pub use reset::cmd_reset;
pub use status::cmd_status;

/// Resolve the configuration the library would use for `root`.
///
/// An explicit `--config` file replaces `fixture_builder.toml`; environment
/// overrides apply either way.
pub(crate) fn load_configuration(
    root: &Path,
    config_file: Option<&Path>,
) -> Result<BuildConfiguration> {
    let settings = match config_file {
        Some(path) => {
            let (settings, warnings) = config::load_with_warnings(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            report_warnings(&warnings);
            config::with_env_overrides(settings)
        }
        None => config::load_project_settings(root)?.0,
    };

    BuildConfiguration::builder(root)
        .settings(settings)
        .build()
        .context("invalid fixture builder configuration")
}

fn report_warnings(warnings: &[ConfigWarning]) {
    for warning in warnings {
        tracing::warn!(
            key = %warning.key,
            file = %warning.file.display(),
            line = ?warning.line,
            suggestion = warning.suggestion.as_deref().unwrap_or(""),
            "unknown config key"
        );
    }
}
