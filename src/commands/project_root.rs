use std::path::{Path, PathBuf};

use fixture_builder::config::SETTINGS_FILE;

/// Discover the project root directory from an invocation directory.
///
/// Heuristics (first match wins, walking upward from `start`):
/// - `fixture_builder.toml`
/// - `db/` (schema definition files live here)
/// - `.git/` or `.git` file (git repo root / worktree)
///
/// Falls back to `start` when no markers are found.
pub fn discover_project_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(SETTINGS_FILE).is_file() {
            return dir.to_path_buf();
        }
        if dir.join("db").is_dir() {
            return dir.to_path_buf();
        }
        if dir.join(".git").exists() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}
