//! Settings file loading and environment overrides

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FixtureError, FixtureResult};

use super::types::FixtureSettings;

/// Settings file looked up at the project root
pub const SETTINGS_FILE: &str = "fixture_builder.toml";

pub const ENV_FIXTURE_BUILDER_FILE: &str = "FIXTURE_BUILDER_FILE";
pub const ENV_SKIP_TABLES: &str = "FIXTURE_BUILDER_SKIP_TABLES";
pub const ENV_FIXTURES_DIR: &str = "FIXTURE_BUILDER_FIXTURES_DIR";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load a settings file and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FixtureResult<(FixtureSettings, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| FixtureError::io(path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let settings: FixtureSettings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FixtureError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((settings, warnings))
}

/// Load `fixture_builder.toml` from the project root (defaults when absent),
/// then apply `FIXTURE_BUILDER_*` environment overrides.
pub fn load_project_settings(
    root: &Path,
) -> FixtureResult<(FixtureSettings, Vec<ConfigWarning>)> {
    let path = root.join(SETTINGS_FILE);
    let (settings, warnings) = if path.is_file() {
        load_with_warnings(&path)?
    } else {
        (FixtureSettings::default(), Vec::new())
    };

    for warning in &warnings {
        tracing::warn!(
            key = %warning.key,
            file = %warning.file.display(),
            line = ?warning.line,
            suggestion = warning.suggestion.as_deref().unwrap_or(""),
            "unknown config key"
        );
    }

    Ok((with_env_overrides(settings), warnings))
}

/// Apply environment variable overrides (FIXTURE_BUILDER_* prefix)
pub fn with_env_overrides(settings: FixtureSettings) -> FixtureSettings {
    apply_overrides(settings, |key| std::env::var(key).ok())
}

pub(crate) fn apply_overrides(
    mut settings: FixtureSettings,
    var: impl Fn(&str) -> Option<String>,
) -> FixtureSettings {
    if let Some(path) = var(ENV_FIXTURE_BUILDER_FILE).filter(|v| !v.is_empty()) {
        settings.fixture_builder_file = Some(PathBuf::from(path));
    }

    // comma-separated
    if let Some(tables) = var(ENV_SKIP_TABLES).filter(|v| !v.is_empty()) {
        settings.skip_tables = Some(
            tables
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect(),
        );
    }

    if let Some(dir) = var(ENV_FIXTURES_DIR).filter(|v| !v.is_empty()) {
        settings.fixtures_dir = Some(PathBuf::from(dir));
    }

    settings
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "select_sql",
        "delete_sql",
        "skip_tables",
        "files_to_check",
        "record_name_fields",
        "fixture_builder_file",
        "fixtures_dir",
        "legacy_fixtures",
        "lock_state",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
