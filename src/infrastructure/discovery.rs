//! Tracked file discovery
//!
//! Finds the schema definition files present in a project and expands
//! legacy-fixture glob patterns into concrete paths.

use std::path::{Path, PathBuf};

use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;

use crate::error::{FixtureError, FixtureResult};

/// Schema files tracked by default, relative to the project root.
pub const SCHEMA_FILES: &[&str] = &[
    "db/schema.rb",
    "db/development_structure.sql",
    "db/test_structure.sql",
    "db/production_structure.sql",
];

/// The subset of [`SCHEMA_FILES`] present under `root`, in declaration order.
pub fn schema_definition_files(root: &Path) -> Vec<PathBuf> {
    SCHEMA_FILES
        .iter()
        .map(PathBuf::from)
        .filter(|relative| root.join(relative).is_file())
        .collect()
}

/// Expand glob patterns (relative to `root`) into sorted, root-relative paths.
///
/// Hidden and git-ignored files are included; patterns name fixtures
/// explicitly, so the usual walk filters do not apply. A pattern without a
/// slash matches at the root only (`*.yml` never descends into subdirectories).
pub fn expand_globs(root: &Path, patterns: &[String]) -> FixtureResult<Vec<PathBuf>> {
    if patterns.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder = OverrideBuilder::new(root);
    for pattern in patterns {
        builder.add(&anchored(pattern)).map_err(|e| {
            FixtureError::InvalidArgument(format!("invalid legacy fixture glob '{pattern}': {e}"))
        })?;
    }
    let overrides = builder.build().map_err(|e| {
        FixtureError::InvalidArgument(format!("invalid legacy fixture globs: {e}"))
    })?;

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .overrides(overrides)
        .build();

    let mut matches = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| FixtureError::Io {
            path: root.to_path_buf(),
            source: std::io::Error::other(e.to_string()),
        })?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_path_buf();
        matches.push(relative);
    }
    matches.sort();
    Ok(matches)
}

/// Gitignore-style globs without a slash match at any depth; pin them to root.
fn anchored(pattern: &str) -> String {
    let (negation, body) = match pattern.strip_prefix('!') {
        Some(body) => ("!", body),
        None => ("", pattern),
    };
    if body.contains('/') {
        pattern.to_string()
    } else {
        format!("{negation}/{body}")
    }
}
